//! Migrator for the record tables. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user_codes;
mod m20240101_000002_create_user_roles;
mod m20240101_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user_codes::Migration),
            Box::new(m20240101_000002_create_user_roles::Migration),
            Box::new(m20240101_000003_add_indexes::Migration),
        ]
    }
}
