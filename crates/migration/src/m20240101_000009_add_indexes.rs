use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Every public render path filters on is_active and orders by sort_order,
// so each content table gets the same composite index.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_services_active_sort")
                    .table(Services::Table)
                    .col(Services::IsActive)
                    .col(Services::SortOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_working_processes_active_sort")
                    .table(WorkingProcesses::Table)
                    .col(WorkingProcesses::IsActive)
                    .col(WorkingProcesses::SortOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_members_active_sort")
                    .table(TeamMembers::Table)
                    .col(TeamMembers::IsActive)
                    .col(TeamMembers::SortOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_testimonials_active_sort")
                    .table(Testimonials::Table)
                    .col(Testimonials::IsActive)
                    .col(Testimonials::SortOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_case_studies_active_sort")
                    .table(CaseStudies::Table)
                    .col(CaseStudies::IsActive)
                    .col(CaseStudies::SortOrder)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_active_sort").table(Services::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_working_processes_active_sort")
                    .table(WorkingProcesses::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_team_members_active_sort").table(TeamMembers::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_testimonials_active_sort").table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_case_studies_active_sort").table(CaseStudies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services { Table, IsActive, SortOrder }

#[derive(DeriveIden)]
enum WorkingProcesses { Table, IsActive, SortOrder }

#[derive(DeriveIden)]
enum TeamMembers { Table, IsActive, SortOrder }

#[derive(DeriveIden)]
enum Testimonials { Table, IsActive, SortOrder }

#[derive(DeriveIden)]
enum CaseStudies { Table, IsActive, SortOrder }
