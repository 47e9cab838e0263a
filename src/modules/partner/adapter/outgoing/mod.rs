pub mod partner_repository_postgres;
pub mod sea_orm_entity;

pub use partner_repository_postgres::PartnerRepositoryPostgres;
