pub mod sea_orm_entity;
pub mod settings_repository_postgres;

pub use settings_repository_postgres::SettingsRepositoryPostgres;
