//! Application startup helpers for building the API client and database
//! connection from configuration.

use std::time::Duration;

use crate::{
    api::client::{PokeApiClient, PokeApiClientConfig},
    config::Config,
    error::Error,
};

/// Build and configure the PokéAPI client from the application config
pub fn build_api_client(config: &Config) -> Result<PokeApiClient, Error> {
    let client_config = PokeApiClientConfig::new(&config.api_base_url)
        .with_timeout(Duration::from_secs(config.api_timeout_secs))
        .with_max_retries(config.api_max_retries);

    let client = PokeApiClient::new(client_config)?;

    Ok(client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
