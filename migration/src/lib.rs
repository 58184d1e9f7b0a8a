pub use sea_orm_migration::prelude::*;

mod m20250610_000001_create_users_table;
mod m20250610_000002_create_periods_table;
mod m20250610_000003_create_period_days_table;
mod m20250610_000004_create_symptoms_table;
mod m20250610_000005_create_symptom_logs_table;
mod m20250610_000006_create_cycle_data_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_000001_create_users_table::Migration),
            Box::new(m20250610_000002_create_periods_table::Migration),
            Box::new(m20250610_000003_create_period_days_table::Migration),
            Box::new(m20250610_000004_create_symptoms_table::Migration),
            Box::new(m20250610_000005_create_symptom_logs_table::Migration),
            Box::new(m20250610_000006_create_cycle_data_table::Migration),
        ]
    }
}
