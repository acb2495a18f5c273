use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr};

use crate::data::tag::TagRepository;

/// Per-run cache of reference tag IDs keyed by upstream name.
///
/// Each tag name costs at most one database round trip per run; later records
/// reuse the cached primary key. Entries resolved inside a transaction that
/// later rolls back would point at rows that no longer exist, so the importer
/// clears the cache whenever a record fails.
#[derive(Debug, Default)]
pub struct ReferenceCache {
    types: HashMap<String, i32>,
    abilities: HashMap<String, i32>,
    stats: HashMap<String, i32>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn resolve_type<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
    ) -> Result<i32, DbErr> {
        if let Some(id) = self.types.get(name) {
            return Ok(*id);
        }

        let model = TagRepository::new(db).find_or_create_type(name).await?;
        self.types.insert(name.to_string(), model.id);

        Ok(model.id)
    }

    pub async fn resolve_ability<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
    ) -> Result<i32, DbErr> {
        if let Some(id) = self.abilities.get(name) {
            return Ok(*id);
        }

        let model = TagRepository::new(db).find_or_create_ability(name).await?;
        self.abilities.insert(name.to_string(), model.id);

        Ok(model.id)
    }

    pub async fn resolve_stat<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
    ) -> Result<i32, DbErr> {
        if let Some(id) = self.stats.get(name) {
            return Ok(*id);
        }

        let model = TagRepository::new(db).find_or_create_stat(name).await?;
        self.stats.insert(name.to_string(), model.id);

        Ok(model.id)
    }

    /// Drops every cached ID so entries created in an aborted transaction
    /// cannot leak into later records.
    pub fn clear(&mut self) {
        self.types.clear();
        self.abilities.clear();
        self.stats.clear();
    }
}
