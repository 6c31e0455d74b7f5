//! Migrator registering content-table migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_services;
mod m20240101_000002_create_working_processes;
mod m20240101_000003_create_team_members;
mod m20240101_000004_create_testimonials;
mod m20240101_000005_create_case_studies;
mod m20240101_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_services::Migration),
            Box::new(m20240101_000002_create_working_processes::Migration),
            Box::new(m20240101_000003_create_team_members::Migration),
            Box::new(m20240101_000004_create_testimonials::Migration),
            Box::new(m20240101_000005_create_case_studies::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000009_add_indexes::Migration),
        ]
    }
}
