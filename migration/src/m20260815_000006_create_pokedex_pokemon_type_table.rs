use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_pokedex_type_table::PokedexType,
    m20260815_000005_create_pokedex_pokemon_table::PokedexPokemon,
};

static IDX_POKEDEX_POKEMON_TYPE_UNIQUE: &str = "idx_pokedex_pokemon_type_pokemon_id_type_id";
static FK_POKEDEX_POKEMON_TYPE_POKEMON_ID: &str = "fk_pokedex_pokemon_type_pokemon_id";
static FK_POKEDEX_POKEMON_TYPE_TYPE_ID: &str = "fk_pokedex_pokemon_type_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokedexPokemonType::Table)
                    .if_not_exists()
                    .col(pk_auto(PokedexPokemonType::Id))
                    .col(integer(PokedexPokemonType::PokemonId))
                    .col(integer(PokedexPokemonType::TypeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEDEX_POKEMON_TYPE_UNIQUE)
                    .table(PokedexPokemonType::Table)
                    .col(PokedexPokemonType::PokemonId)
                    .col(PokedexPokemonType::TypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POKEDEX_POKEMON_TYPE_POKEMON_ID)
                    .from_tbl(PokedexPokemonType::Table)
                    .from_col(PokedexPokemonType::PokemonId)
                    .to_tbl(PokedexPokemon::Table)
                    .to_col(PokedexPokemon::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POKEDEX_POKEMON_TYPE_TYPE_ID)
                    .from_tbl(PokedexPokemonType::Table)
                    .from_col(PokedexPokemonType::TypeId)
                    .to_tbl(PokedexType::Table)
                    .to_col(PokedexType::Id)
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
                    .name(FK_POKEDEX_POKEMON_TYPE_TYPE_ID)
                    .table(PokedexPokemonType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_POKEDEX_POKEMON_TYPE_POKEMON_ID)
                    .table(PokedexPokemonType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEDEX_POKEMON_TYPE_UNIQUE)
                    .table(PokedexPokemonType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PokedexPokemonType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PokedexPokemonType {
    Table,
    Id,
    PokemonId,
    TypeId,
}
