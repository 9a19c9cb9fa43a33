pub use sea_orm_migration::prelude::*;

mod m20241027_100000_expenses;
mod m20241027_100100_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241027_100000_expenses::Migration),
            Box::new(m20241027_100100_categories::Migration),
        ]
    }
}
