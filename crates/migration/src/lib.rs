//! Migrator for the user accounts schema.
//! Every migration is idempotent (`if_not_exists`) so `up` can run on each startup.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user_account;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_user_account::Migration)]
    }
}
