use mockito::{Server, ServerGuard};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema,
};

use crate::error::TestError;

pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { server, db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Create statements covering every pokedex table, in dependency order.
pub fn pokedex_table_statements() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::PokedexType),
        schema.create_table_from_entity(entity::prelude::PokedexAbility),
        schema.create_table_from_entity(entity::prelude::PokedexStat),
        schema.create_table_from_entity(entity::prelude::PokedexEvolutionChain),
        schema.create_table_from_entity(entity::prelude::PokedexPokemon),
        schema.create_table_from_entity(entity::prelude::PokedexPokemonType),
        schema.create_table_from_entity(entity::prelude::PokedexPokemonAbility),
        schema.create_table_from_entity(entity::prelude::PokedexPokemonStat),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_pokedex_tables {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            setup
                .with_tables($crate::setup::pokedex_table_statements())
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
