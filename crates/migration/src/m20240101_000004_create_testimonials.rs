//! Create `testimonials` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(uuid(Testimonials::Id).primary_key())
                    .col(string_len(Testimonials::AuthorName, 256).not_null())
                    .col(string_len_null(Testimonials::Company, 128))
                    .col(text(Testimonials::Quote).not_null())
                    .col(integer(Testimonials::SortOrder).not_null())
                    .col(boolean(Testimonials::IsActive).not_null())
                    .col(timestamp_with_time_zone(Testimonials::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Testimonials::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Testimonials::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    AuthorName,
    Company,
    Quote,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
