//! Create `team_members` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(uuid(TeamMembers::Id).primary_key())
                    .col(string_len(TeamMembers::Name, 256).not_null())
                    .col(string_len_null(TeamMembers::RoleTitle, 128))
                    .col(text_null(TeamMembers::Bio))
                    .col(string_len_null(TeamMembers::PhotoUrl, 512))
                    .col(integer(TeamMembers::SortOrder).not_null())
                    .col(boolean(TeamMembers::IsActive).not_null())
                    .col(timestamp_with_time_zone(TeamMembers::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(TeamMembers::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TeamMembers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TeamMembers {
    Table,
    Id,
    Name,
    RoleTitle,
    Bio,
    PhotoUrl,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
