use chrono::Utc;
use entity::prelude::*;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::api::model::PokemonData;

/// Repository for Pokémon rows and their association tables.
pub struct PokemonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokemonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a Pokémon or updates the existing row with the same Pokédex
    /// number. The row identity is the Pokédex number, so re-importing never
    /// duplicates a Pokémon and `created_at` survives updates.
    pub async fn upsert(
        &self,
        pokemon: &PokemonData,
        evolution_chain_id: Option<i32>,
    ) -> Result<entity::pokedex_pokemon::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = entity::pokedex_pokemon::ActiveModel {
            pokedex_id: ActiveValue::Set(pokemon.id),
            name: ActiveValue::Set(pokemon.name.clone()),
            height: ActiveValue::Set(pokemon.height),
            weight: ActiveValue::Set(pokemon.weight),
            base_experience: ActiveValue::Set(pokemon.base_experience),
            sprite_url: ActiveValue::Set(pokemon.sprites.front_default.clone()),
            evolution_chain_id: ActiveValue::Set(evolution_chain_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        PokedexPokemon::insert(model)
            .on_conflict(
                OnConflict::column(entity::pokedex_pokemon::Column::PokedexId)
                    .update_columns([
                        entity::pokedex_pokemon::Column::Name,
                        entity::pokedex_pokemon::Column::Height,
                        entity::pokedex_pokemon::Column::Weight,
                        entity::pokedex_pokemon::Column::BaseExperience,
                        entity::pokedex_pokemon::Column::SpriteUrl,
                        entity::pokedex_pokemon::Column::EvolutionChainId,
                        entity::pokedex_pokemon::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_pokedex_id(
        &self,
        pokedex_id: i64,
    ) -> Result<Option<entity::pokedex_pokemon::Model>, DbErr> {
        PokedexPokemon::find()
            .filter(entity::pokedex_pokemon::Column::PokedexId.eq(pokedex_id))
            .one(self.db)
            .await
    }

    /// Replaces the Pokémon's type links with exactly the given set.
    pub async fn set_types(&self, pokemon_id: i32, type_ids: &[i32]) -> Result<(), DbErr> {
        PokedexPokemonType::delete_many()
            .filter(entity::pokedex_pokemon_type::Column::PokemonId.eq(pokemon_id))
            .exec(self.db)
            .await?;

        if type_ids.is_empty() {
            return Ok(());
        }

        let links = type_ids
            .iter()
            .map(|type_id| entity::pokedex_pokemon_type::ActiveModel {
                pokemon_id: ActiveValue::Set(pokemon_id),
                type_id: ActiveValue::Set(*type_id),
                ..Default::default()
            });

        PokedexPokemonType::insert_many(links).exec(self.db).await?;

        Ok(())
    }

    /// Replaces the Pokémon's ability links with exactly the given set.
    pub async fn set_abilities(&self, pokemon_id: i32, ability_ids: &[i32]) -> Result<(), DbErr> {
        PokedexPokemonAbility::delete_many()
            .filter(entity::pokedex_pokemon_ability::Column::PokemonId.eq(pokemon_id))
            .exec(self.db)
            .await?;

        if ability_ids.is_empty() {
            return Ok(());
        }

        let links = ability_ids
            .iter()
            .map(|ability_id| entity::pokedex_pokemon_ability::ActiveModel {
                pokemon_id: ActiveValue::Set(pokemon_id),
                ability_id: ActiveValue::Set(*ability_id),
                ..Default::default()
            });

        PokedexPokemonAbility::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the Pokémon's stat values with exactly the given
    /// `(stat_id, base_stat)` pairs. Stats no longer reported upstream are
    /// removed rather than left behind with stale values.
    pub async fn replace_stats(
        &self,
        pokemon_id: i32,
        stats: &[(i32, i32)],
    ) -> Result<(), DbErr> {
        PokedexPokemonStat::delete_many()
            .filter(entity::pokedex_pokemon_stat::Column::PokemonId.eq(pokemon_id))
            .exec(self.db)
            .await?;

        if stats.is_empty() {
            return Ok(());
        }

        let rows = stats
            .iter()
            .map(|(stat_id, base_stat)| entity::pokedex_pokemon_stat::ActiveModel {
                pokemon_id: ActiveValue::Set(pokemon_id),
                stat_id: ActiveValue::Set(*stat_id),
                base_stat: ActiveValue::Set(*base_stat),
                ..Default::default()
            });

        PokedexPokemonStat::insert_many(rows).exec(self.db).await?;

        Ok(())
    }
}
