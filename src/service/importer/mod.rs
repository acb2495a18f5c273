//! Pokédex import orchestration.
//!
//! The importer walks Pokédex numbers `1..=bound`, fetches each record from
//! the PokéAPI and persists it inside its own transaction. Failures are
//! isolated per record: a fetch failure skips the record, a mid-import
//! failure rolls only that record back, and the run always carries on to the
//! next number.

#[cfg(test)]
mod tests;

mod cache;

pub use cache::ReferenceCache;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    api::{
        client::PokeApiClient,
        model::{EvolutionChainData, PokemonData},
    },
    data::{evolution_chain::EvolutionChainRepository, pokemon::PokemonRepository},
    error::Error,
    service::evolution::flatten_chain,
};

/// Outcome of an import run.
#[derive(Debug, Default)]
pub struct ImportSummary {
    /// Number of Pokédex entries the run attempted.
    pub total: u64,
    /// Records fetched and committed.
    pub succeeded: u64,
    /// Pokédex numbers whose record fetch failed; nothing was written for them.
    pub skipped: Vec<i64>,
    /// Pokédex numbers that were fetched but failed mid-import and were
    /// rolled back.
    pub failed: Vec<i64>,
}

pub struct PokedexImporter {
    db: DatabaseConnection,
    client: PokeApiClient,
}

impl PokedexImporter {
    /// Creates a new instance of [`PokedexImporter`]
    pub fn new(db: DatabaseConnection, client: PokeApiClient) -> Self {
        Self { db, client }
    }

    /// Imports Pokémon with Pokédex numbers `1..=limit`.
    ///
    /// When `limit` is absent or zero, the bound falls back to the total
    /// count reported by the upstream catalog. Only that fallback lookup is
    /// fatal; individual record failures are recorded in the summary and the
    /// run continues.
    pub async fn import_range(&self, limit: Option<u64>) -> Result<ImportSummary, Error> {
        let total = match limit {
            Some(count) if count > 0 => count,
            _ => self.client.get_total_count().await?,
        };

        tracing::info!("Starting Pokédex import of {} records", total);

        let mut summary = ImportSummary {
            total,
            ..Default::default()
        };
        let mut cache = ReferenceCache::new();

        for pokedex_id in 1..=(total as i64) {
            let pokemon = match self.client.get_pokemon(pokedex_id).await {
                Ok(pokemon) => pokemon,
                Err(e) => {
                    tracing::error!(
                        "Failed to fetch Pokémon {}: {:?}; skipping record",
                        pokedex_id,
                        e
                    );
                    summary.skipped.push(pokedex_id);
                    continue;
                }
            };

            match self.import_record(&pokemon, &mut cache).await {
                Ok(model) => {
                    tracing::info!("Imported {} (#{})", model.name, model.pokedex_id);
                    summary.succeeded += 1;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to import Pokémon {}: {:?}; record rolled back",
                        pokedex_id,
                        e
                    );
                    cache.clear();
                    summary.failed.push(pokedex_id);
                }
            }
        }

        tracing::info!(
            "Pokédex import finished: {}/{} succeeded, {} skipped, {} failed",
            summary.succeeded,
            summary.total,
            summary.skipped.len(),
            summary.failed.len()
        );

        Ok(summary)
    }

    /// Imports one fetched record inside its own transaction.
    async fn import_record(
        &self,
        pokemon: &PokemonData,
        cache: &mut ReferenceCache,
    ) -> Result<entity::pokedex_pokemon::Model, Error> {
        let txn = self.db.begin().await?;

        match self.persist_record(&txn, pokemon, cache).await {
            Ok(model) => {
                txn.commit().await?;
                Ok(model)
            }
            Err(e) => {
                if let Err(rollback_error) = txn.rollback().await {
                    tracing::error!(
                        "Failed to roll back record transaction: {:?}",
                        rollback_error
                    );
                }
                Err(e)
            }
        }
    }

    /// Fetches the record's sub-resources and writes every row for it.
    ///
    /// Runs inside the record transaction: any failure here, including a
    /// species or chain fetch that exhausts its retries, aborts the whole
    /// record.
    async fn persist_record(
        &self,
        txn: &DatabaseTransaction,
        pokemon: &PokemonData,
        cache: &mut ReferenceCache,
    ) -> Result<entity::pokedex_pokemon::Model, Error> {
        let species = self.client.get_species(&pokemon.species.url).await?;

        let evolution_chain_id = match species.evolution_chain {
            Some(link) => {
                let document = self.client.get_evolution_chain(&link.url).await?;
                let chain: EvolutionChainData = serde_json::from_value(document.clone())?;
                flatten_chain(&chain.chain)?;

                let stored = EvolutionChainRepository::new(txn)
                    .upsert(chain.id, document)
                    .await?;

                Some(stored.id)
            }
            None => None,
        };

        let repository = PokemonRepository::new(txn);
        let model = repository.upsert(pokemon, evolution_chain_id).await?;

        let mut type_ids = Vec::new();
        for slot in &pokemon.types {
            let id = cache.resolve_type(txn, &slot.type_ref.name).await?;
            if !type_ids.contains(&id) {
                type_ids.push(id);
            }
        }
        repository.set_types(model.id, &type_ids).await?;

        let mut ability_ids = Vec::new();
        for slot in &pokemon.abilities {
            let id = cache.resolve_ability(txn, &slot.ability.name).await?;
            if !ability_ids.contains(&id) {
                ability_ids.push(id);
            }
        }
        repository.set_abilities(model.id, &ability_ids).await?;

        let mut stat_values = Vec::new();
        for slot in &pokemon.stats {
            let id = cache.resolve_stat(txn, &slot.stat.name).await?;
            if !stat_values.iter().any(|(stat_id, _)| *stat_id == id) {
                stat_values.push((id, slot.base_stat));
            }
        }
        repository.replace_stats(model.id, &stat_values).await?;

        Ok(model)
    }
}
