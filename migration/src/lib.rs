pub use sea_orm_migration::prelude::*;

mod m20250601_000001_initial;
mod m20250618_000001_add_partner_fields;
mod m20250702_000001_add_sim_plan_fields;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_initial::Migration),
            Box::new(m20250618_000001_add_partner_fields::Migration),
            Box::new(m20250702_000001_add_sim_plan_fields::Migration),
        ]
    }
}
