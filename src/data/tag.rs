use entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Repository for the reference tag tables (types, abilities, stats).
///
/// Tags are identified by name upstream, so every lookup is get-or-create:
/// the returned model always carries the local primary key for the name.
pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_or_create_type(
        &self,
        name: &str,
    ) -> Result<entity::pokedex_type::Model, DbErr> {
        let existing = PokedexType::find()
            .filter(entity::pokedex_type::Column::Name.eq(name))
            .one(self.db)
            .await?;

        if let Some(model) = existing {
            return Ok(model);
        }

        entity::pokedex_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_or_create_ability(
        &self,
        name: &str,
    ) -> Result<entity::pokedex_ability::Model, DbErr> {
        let existing = PokedexAbility::find()
            .filter(entity::pokedex_ability::Column::Name.eq(name))
            .one(self.db)
            .await?;

        if let Some(model) = existing {
            return Ok(model);
        }

        entity::pokedex_ability::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_or_create_stat(
        &self,
        name: &str,
    ) -> Result<entity::pokedex_stat::Model, DbErr> {
        let existing = PokedexStat::find()
            .filter(entity::pokedex_stat::Column::Name.eq(name))
            .one(self.db)
            .await?;

        if let Some(model) = existing {
            return Ok(model);
        }

        entity::pokedex_stat::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
