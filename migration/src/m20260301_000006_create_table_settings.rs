use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    // Singleton row, id is always 1.
                    .col(
                        ColumnDef::new(Settings::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Settings::ClubName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Settings::ContactEmail)
                            .string_len(320)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Settings::InstagramUrl).text())
                    .col(ColumnDef::new(Settings::HeroTagline).text())
                    .col(
                        ColumnDef::new(Settings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Settings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Settings {
    Table,
    Id,
    ClubName,
    ContactEmail,
    InstagramUrl,
    HeroTagline,
    UpdatedAt,
}
