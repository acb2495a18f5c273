use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000002_create_pokedex_ability_table::PokedexAbility,
    m20260815_000005_create_pokedex_pokemon_table::PokedexPokemon,
};

static IDX_POKEDEX_POKEMON_ABILITY_UNIQUE: &str =
    "idx_pokedex_pokemon_ability_pokemon_id_ability_id";
static FK_POKEDEX_POKEMON_ABILITY_POKEMON_ID: &str = "fk_pokedex_pokemon_ability_pokemon_id";
static FK_POKEDEX_POKEMON_ABILITY_ABILITY_ID: &str = "fk_pokedex_pokemon_ability_ability_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokedexPokemonAbility::Table)
                    .if_not_exists()
                    .col(pk_auto(PokedexPokemonAbility::Id))
                    .col(integer(PokedexPokemonAbility::PokemonId))
                    .col(integer(PokedexPokemonAbility::AbilityId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEDEX_POKEMON_ABILITY_UNIQUE)
                    .table(PokedexPokemonAbility::Table)
                    .col(PokedexPokemonAbility::PokemonId)
                    .col(PokedexPokemonAbility::AbilityId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POKEDEX_POKEMON_ABILITY_POKEMON_ID)
                    .from_tbl(PokedexPokemonAbility::Table)
                    .from_col(PokedexPokemonAbility::PokemonId)
                    .to_tbl(PokedexPokemon::Table)
                    .to_col(PokedexPokemon::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POKEDEX_POKEMON_ABILITY_ABILITY_ID)
                    .from_tbl(PokedexPokemonAbility::Table)
                    .from_col(PokedexPokemonAbility::AbilityId)
                    .to_tbl(PokedexAbility::Table)
                    .to_col(PokedexAbility::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_POKEDEX_POKEMON_ABILITY_ABILITY_ID)
                    .table(PokedexPokemonAbility::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_POKEDEX_POKEMON_ABILITY_POKEMON_ID)
                    .table(PokedexPokemonAbility::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEDEX_POKEMON_ABILITY_UNIQUE)
                    .table(PokedexPokemonAbility::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(PokedexPokemonAbility::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PokedexPokemonAbility {
    Table,
    Id,
    PokemonId,
    AbilityId,
}
