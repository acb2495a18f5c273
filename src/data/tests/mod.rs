mod evolution_chain;

use entity::prelude::*;
use pokedex_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::api::model::PokemonData;
use crate::data::{
    evolution_chain::EvolutionChainRepository, pokemon::PokemonRepository, tag::TagRepository,
};

static SPECIES_URL: &str = "https://pokeapi.test/api/v2/pokemon-species/1/";

fn pokemon_payload(pokedex_id: i64, name: &str) -> PokemonData {
    serde_json::from_value(factory::mock_pokemon(pokedex_id, name, SPECIES_URL)).unwrap()
}
