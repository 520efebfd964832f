pub use sea_orm_migration::prelude::*;

mod m20261016_000001_area;
mod m20261016_000002_venue;
mod m20261016_000003_artist;
mod m20261016_000004_show;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_area::Migration),
            Box::new(m20261016_000002_venue::Migration),
            Box::new(m20261016_000003_artist::Migration),
            Box::new(m20261016_000004_show::Migration),
        ]
    }
}
