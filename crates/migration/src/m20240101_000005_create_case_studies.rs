//! Create `case_studies` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseStudies::Table)
                    .if_not_exists()
                    .col(uuid(CaseStudies::Id).primary_key())
                    .col(string_len(CaseStudies::Title, 256).not_null())
                    .col(text_null(CaseStudies::Summary))
                    .col(string_len_null(CaseStudies::ClientName, 128))
                    .col(integer(CaseStudies::SortOrder).not_null())
                    .col(boolean(CaseStudies::IsActive).not_null())
                    .col(timestamp_with_time_zone(CaseStudies::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(CaseStudies::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CaseStudies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CaseStudies {
    Table,
    Id,
    Title,
    Summary,
    ClientName,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
