pub use sea_orm_migration::prelude::*;

mod m20260212_000001_initial;
mod m20260305_000001_add_payment_references;
mod m20260412_000001_add_booking_status;
mod m20260518_000001_add_demo_requests;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260212_000001_initial::Migration),
            Box::new(m20260305_000001_add_payment_references::Migration),
            Box::new(m20260412_000001_add_booking_status::Migration),
            Box::new(m20260518_000001_add_demo_requests::Migration),
        ]
    }
}
