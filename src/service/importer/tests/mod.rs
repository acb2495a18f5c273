mod cache;

use std::time::Duration;

use entity::prelude::*;
use mockito::Mock;
use pokedex_test_utils::constant::TEST_INITIAL_BACKOFF_MS;
use pokedex_test_utils::prelude::*;
use sea_orm::{EntityTrait, TransactionTrait};

use super::*;
use crate::api::client::{PokeApiClient, PokeApiClientConfig};
use crate::api::model::PokemonData;
use crate::data::pokemon::PokemonRepository;

fn api_client(test: &TestSetup) -> PokeApiClient {
    let config = PokeApiClientConfig::new(test.server.url())
        .with_initial_backoff(Duration::from_millis(TEST_INITIAL_BACKOFF_MS));

    PokeApiClient::new(config).unwrap()
}

fn importer(test: &TestSetup) -> PokedexImporter {
    PokedexImporter::new(test.db.clone(), api_client(test))
}

/// Mounts the record, species, and chain endpoints for one Pokémon, each
/// expecting exactly one request.
fn mount_full_record(
    test: &mut TestSetup,
    pokedex_id: i64,
    name: &str,
    chain_id: i64,
) -> (Mock, Mock, Mock) {
    let species_url = test.poke().species_url(pokedex_id);
    let chain_url = test.poke().chain_url(chain_id);

    let record = factory::mock_pokemon(pokedex_id, name, &species_url);
    let pokemon_mock = test.poke().create_pokemon_endpoint(pokedex_id, &record, 1);

    let species = factory::mock_species(Some(&chain_url));
    let species_mock = test.poke().create_species_endpoint(pokedex_id, &species, 1);

    let chain_document = factory::mock_chain(chain_id, factory::chain_node(name, vec![]));
    let chain_mock = test
        .poke()
        .create_evolution_chain_endpoint(chain_id, &chain_document, 1);

    (pokemon_mock, species_mock, chain_mock)
}
