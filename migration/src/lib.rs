pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_images;
mod m20260301_000002_create_table_galleries;
mod m20260301_000003_create_table_events;
mod m20260301_000004_create_table_partners;
mod m20260301_000005_create_table_news;
mod m20260301_000006_create_table_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_images::Migration),
            Box::new(m20260301_000002_create_table_galleries::Migration),
            Box::new(m20260301_000003_create_table_events::Migration),
            Box::new(m20260301_000004_create_table_partners::Migration),
            Box::new(m20260301_000005_create_table_news::Migration),
            Box::new(m20260301_000006_create_table_settings::Migration),
        ]
    }
}
