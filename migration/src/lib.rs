pub use sea_orm_migration::prelude::*;

mod m20250905_000001_initial;
mod m20250905_000002_add_leaderboard_view;
mod m20250905_000003_seed_coupon_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250905_000001_initial::Migration),
            Box::new(m20250905_000002_add_leaderboard_view::Migration),
            Box::new(m20250905_000003_seed_coupon_catalog::Migration),
        ]
    }
}
