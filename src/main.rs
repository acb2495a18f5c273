//! Pokédex importer command-line entry point.
//!
//! Usage:
//!   pokedex import                - Import the first 100 Pokémon
//!   pokedex import --limit 151    - Import the first 151 Pokémon
//!   pokedex import --limit 0      - Import the full upstream catalog

use clap::{Parser, Subcommand};
use pokedex::{config::Config, error::Error, service::importer::PokedexImporter, startup};
use tracing_subscriber::EnvFilter;

/// Number of Pokédex entries an import covers when no limit is given.
const DEFAULT_IMPORT_LIMIT: u64 = 100;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Synchronizes Pokémon data from the PokéAPI into a local database")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import Pokémon records starting from Pokédex number 1
    Import {
        /// Highest Pokédex number to import; 0 imports the full catalog
        #[arg(long, default_value_t = DEFAULT_IMPORT_LIMIT)]
        limit: u64,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Import { limit } => run_import(&config, limit).await,
    };

    if let Err(e) = result {
        eprintln!("Import failed: {}", e);
        std::process::exit(1);
    }
}

async fn run_import(config: &Config, limit: u64) -> Result<(), Error> {
    let client = startup::build_api_client(config)?;
    tracing::info!("Importing from {}", client.base_url());

    let db = startup::connect_to_database(config).await?;

    let importer = PokedexImporter::new(db, client);
    let summary = importer.import_range(Some(limit)).await?;

    println!(
        "Imported {}/{} Pokémon ({} skipped, {} failed)",
        summary.succeeded,
        summary.total,
        summary.skipped.len(),
        summary.failed.len()
    );

    Ok(())
}
