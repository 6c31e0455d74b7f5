//! Create `working_processes` table.
//!
//! Numbered steps rendered as the public process accordion.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkingProcesses::Table)
                    .if_not_exists()
                    .col(uuid(WorkingProcesses::Id).primary_key())
                    .col(integer(WorkingProcesses::StepNo).not_null())
                    .col(string_len(WorkingProcesses::Title, 256).not_null())
                    .col(text_null(WorkingProcesses::Description))
                    .col(integer(WorkingProcesses::SortOrder).not_null())
                    .col(boolean(WorkingProcesses::IsActive).not_null())
                    .col(timestamp_with_time_zone(WorkingProcesses::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(WorkingProcesses::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WorkingProcesses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WorkingProcesses {
    Table,
    Id,
    StepNo,
    Title,
    Description,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
