use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000003_create_pokedex_stat_table::PokedexStat,
    m20260815_000005_create_pokedex_pokemon_table::PokedexPokemon,
};

static IDX_POKEDEX_POKEMON_STAT_UNIQUE: &str = "idx_pokedex_pokemon_stat_pokemon_id_stat_id";
static FK_POKEDEX_POKEMON_STAT_POKEMON_ID: &str = "fk_pokedex_pokemon_stat_pokemon_id";
static FK_POKEDEX_POKEMON_STAT_STAT_ID: &str = "fk_pokedex_pokemon_stat_stat_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokedexPokemonStat::Table)
                    .if_not_exists()
                    .col(pk_auto(PokedexPokemonStat::Id))
                    .col(integer(PokedexPokemonStat::PokemonId))
                    .col(integer(PokedexPokemonStat::StatId))
                    .col(integer(PokedexPokemonStat::BaseStat))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEDEX_POKEMON_STAT_UNIQUE)
                    .table(PokedexPokemonStat::Table)
                    .col(PokedexPokemonStat::PokemonId)
                    .col(PokedexPokemonStat::StatId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POKEDEX_POKEMON_STAT_POKEMON_ID)
                    .from_tbl(PokedexPokemonStat::Table)
                    .from_col(PokedexPokemonStat::PokemonId)
                    .to_tbl(PokedexPokemon::Table)
                    .to_col(PokedexPokemon::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POKEDEX_POKEMON_STAT_STAT_ID)
                    .from_tbl(PokedexPokemonStat::Table)
                    .from_col(PokedexPokemonStat::StatId)
                    .to_tbl(PokedexStat::Table)
                    .to_col(PokedexStat::Id)
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
                    .name(FK_POKEDEX_POKEMON_STAT_STAT_ID)
                    .table(PokedexPokemonStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_POKEDEX_POKEMON_STAT_POKEMON_ID)
                    .table(PokedexPokemonStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEDEX_POKEMON_STAT_UNIQUE)
                    .table(PokedexPokemonStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PokedexPokemonStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PokedexPokemonStat {
    Table,
    Id,
    PokemonId,
    StatId,
    BaseStat,
}
