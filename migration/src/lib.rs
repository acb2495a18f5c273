pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_pokedex_type_table;
mod m20260815_000002_create_pokedex_ability_table;
mod m20260815_000003_create_pokedex_stat_table;
mod m20260815_000004_create_pokedex_evolution_chain_table;
mod m20260815_000005_create_pokedex_pokemon_table;
mod m20260815_000006_create_pokedex_pokemon_type_table;
mod m20260815_000007_create_pokedex_pokemon_ability_table;
mod m20260815_000008_create_pokedex_pokemon_stat_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_pokedex_type_table::Migration),
            Box::new(m20260815_000002_create_pokedex_ability_table::Migration),
            Box::new(m20260815_000003_create_pokedex_stat_table::Migration),
            Box::new(m20260815_000004_create_pokedex_evolution_chain_table::Migration),
            Box::new(m20260815_000005_create_pokedex_pokemon_table::Migration),
            Box::new(m20260815_000006_create_pokedex_pokemon_type_table::Migration),
            Box::new(m20260815_000007_create_pokedex_pokemon_ability_table::Migration),
            Box::new(m20260815_000008_create_pokedex_pokemon_stat_table::Migration),
        ]
    }
}
