//! Create `jobs` table.
//! One row per tracked job application; `id` is AUTOINCREMENT so ids are never reused.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(pk_auto(Jobs::Id))
                    .col(text(Jobs::Company))
                    .col(text(Jobs::Position))
                    .col(text(Jobs::Status))
                    .col(text(Jobs::Date))
                    .col(text(Jobs::Salary).default(""))
                    .col(text(Jobs::Location).default(""))
                    .col(text(Jobs::Notes).default(""))
                    .col(timestamp_with_time_zone(Jobs::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // List orders by creation time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_jobs_created_at")
                    .table(Jobs::Table)
                    .col(Jobs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Jobs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    Company,
    Position,
    Status,
    Date,
    Salary,
    Location,
    Notes,
    CreatedAt,
}
