pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_drone_table;
mod m20260301_000002_create_media_table;
mod m20260301_000003_create_medication_table;
mod m20260302_000004_create_battery_level_audit_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_drone_table::Migration),
            Box::new(m20260301_000002_create_media_table::Migration),
            Box::new(m20260301_000003_create_medication_table::Migration),
            Box::new(m20260302_000004_create_battery_level_audit_table::Migration),
        ]
    }
}
