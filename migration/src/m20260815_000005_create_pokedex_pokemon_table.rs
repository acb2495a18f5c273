use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000004_create_pokedex_evolution_chain_table::PokedexEvolutionChain;

static IDX_POKEDEX_POKEMON_EVOLUTION_CHAIN_ID: &str = "idx_pokedex_pokemon_evolution_chain_id";
static FK_POKEDEX_POKEMON_EVOLUTION_CHAIN_ID: &str = "fk_pokedex_pokemon_evolution_chain_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokedexPokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(PokedexPokemon::Id))
                    .col(big_integer_uniq(PokedexPokemon::PokedexId))
                    .col(string_uniq(PokedexPokemon::Name))
                    .col(integer(PokedexPokemon::Height))
                    .col(integer(PokedexPokemon::Weight))
                    .col(integer_null(PokedexPokemon::BaseExperience))
                    .col(string_null(PokedexPokemon::SpriteUrl))
                    .col(integer_null(PokedexPokemon::EvolutionChainId))
                    .col(timestamp(PokedexPokemon::CreatedAt))
                    .col(timestamp(PokedexPokemon::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEDEX_POKEMON_EVOLUTION_CHAIN_ID)
                    .table(PokedexPokemon::Table)
                    .col(PokedexPokemon::EvolutionChainId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POKEDEX_POKEMON_EVOLUTION_CHAIN_ID)
                    .from_tbl(PokedexPokemon::Table)
                    .from_col(PokedexPokemon::EvolutionChainId)
                    .to_tbl(PokedexEvolutionChain::Table)
                    .to_col(PokedexEvolutionChain::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_POKEDEX_POKEMON_EVOLUTION_CHAIN_ID)
                    .table(PokedexPokemon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEDEX_POKEMON_EVOLUTION_CHAIN_ID)
                    .table(PokedexPokemon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PokedexPokemon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PokedexPokemon {
    Table,
    Id,
    PokedexId,
    Name,
    Height,
    Weight,
    BaseExperience,
    SpriteUrl,
    EvolutionChainId,
    CreatedAt,
    UpdatedAt,
}
