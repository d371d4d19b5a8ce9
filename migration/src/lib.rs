pub use sea_orm_migration::prelude::*;

mod m20260810_000001_hanabi_user;
mod m20260810_000002_hanabi_character_template;
mod m20260810_000003_hanabi_character;
mod m20260810_000004_hanabi_relic;
mod m20260810_000005_hanabi_battle_history;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_hanabi_user::Migration),
            Box::new(m20260810_000002_hanabi_character_template::Migration),
            Box::new(m20260810_000003_hanabi_character::Migration),
            Box::new(m20260810_000004_hanabi_relic::Migration),
            Box::new(m20260810_000005_hanabi_battle_history::Migration),
        ]
    }
}
