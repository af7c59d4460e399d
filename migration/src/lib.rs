pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_categories_table;
mod m20240501_000002_create_questions_table;
pub mod seed;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_categories_table::Migration),
            Box::new(m20240501_000002_create_questions_table::Migration),
        ]
    }
}
