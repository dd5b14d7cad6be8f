//! Migrator creating the job tracker schema.
//! The table is created only when absent; there is no upgrade path.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_jobs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_jobs::Migration)]
    }
}
