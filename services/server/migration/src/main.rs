use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users;
mod m20260801_000002_create_two_fa_codes;
mod m20260801_000003_create_locations;
mod m20260801_000004_create_attendance_events;
mod m20260801_000005_create_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users::Migration),
            Box::new(m20260801_000002_create_two_fa_codes::Migration),
            Box::new(m20260801_000003_create_locations::Migration),
            Box::new(m20260801_000004_create_attendance_events::Migration),
            Box::new(m20260801_000005_create_notifications::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
