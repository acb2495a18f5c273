use chrono::Utc;
use entity::prelude::*;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Repository for stored evolution chain documents.
///
/// The chain payload is kept verbatim as JSON keyed by the upstream chain ID,
/// so several Pokémon sharing a chain reference a single row.
pub struct EvolutionChainRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EvolutionChainRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a chain document or refreshes the stored document for an
    /// existing chain ID.
    pub async fn upsert(
        &self,
        chain_id: i64,
        document: serde_json::Value,
    ) -> Result<entity::pokedex_evolution_chain::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = entity::pokedex_evolution_chain::ActiveModel {
            chain_id: ActiveValue::Set(chain_id),
            data: ActiveValue::Set(document),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        PokedexEvolutionChain::insert(model)
            .on_conflict(
                OnConflict::column(entity::pokedex_evolution_chain::Column::ChainId)
                    .update_columns([
                        entity::pokedex_evolution_chain::Column::Data,
                        entity::pokedex_evolution_chain::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_chain_id(
        &self,
        chain_id: i64,
    ) -> Result<Option<entity::pokedex_evolution_chain::Model>, DbErr> {
        PokedexEvolutionChain::find()
            .filter(entity::pokedex_evolution_chain::Column::ChainId.eq(chain_id))
            .one(self.db)
            .await
    }
}
