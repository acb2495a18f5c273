//! PokéAPI payload factories.
//!
//! Every factory returns a `serde_json::Value` shaped like the corresponding real
//! PokéAPI response, including fields the importer ignores, so tests exercise the
//! same partial deserialization the production pipeline performs. Tests that need
//! a different type, ability, or stat mix can replace the corresponding array on
//! the returned value before mounting it.

use serde_json::{json, Value};

/// Create a mock Pokémon record payload with default test values.
///
/// The record carries one type ("grass"), one ability ("overgrow"), and one stat
/// ("hp" at 45). The species link points at `species_url`.
///
/// # Arguments
/// - `pokemon_id` - Pokédex number for the record
/// - `name` - API name of the Pokémon
/// - `species_url` - Fully-qualified species URL to embed in the payload
pub fn mock_pokemon(pokemon_id: i64, name: &str, species_url: &str) -> Value {
    json!({
        "id": pokemon_id,
        "name": name,
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "is_default": true,
        "order": pokemon_id,
        "sprites": {
            "front_default": format!("https://sprites.example/{}.png", pokemon_id),
            "back_default": null
        },
        "types": [ type_entry("grass") ],
        "abilities": [ ability_entry("overgrow") ],
        "stats": [ stat_entry("hp", 45) ],
        "species": {
            "name": name,
            "url": species_url
        }
    })
}

/// One entry of a record's `types` array.
pub fn type_entry(name: &str) -> Value {
    json!({
        "slot": 1,
        "type": { "name": name, "url": format!("https://pokeapi.example/type/{}/", name) }
    })
}

/// One entry of a record's `abilities` array.
pub fn ability_entry(name: &str) -> Value {
    json!({
        "is_hidden": false,
        "slot": 1,
        "ability": { "name": name, "url": format!("https://pokeapi.example/ability/{}/", name) }
    })
}

/// One entry of a record's `stats` array.
pub fn stat_entry(name: &str, base_stat: i64) -> Value {
    json!({
        "base_stat": base_stat,
        "effort": 0,
        "stat": { "name": name, "url": format!("https://pokeapi.example/stat/{}/", name) }
    })
}

/// Create a mock species payload.
///
/// # Arguments
/// - `evolution_chain_url` - Chain URL to embed, or `None` for a chainless species
pub fn mock_species(evolution_chain_url: Option<&str>) -> Value {
    match evolution_chain_url {
        Some(url) => json!({
            "is_legendary": false,
            "evolution_chain": { "url": url }
        }),
        None => json!({
            "is_legendary": false,
            "evolution_chain": null
        }),
    }
}

/// Create a mock evolution-chain document wrapping the given root node.
pub fn mock_chain(chain_id: i64, chain: Value) -> Value {
    json!({
        "id": chain_id,
        "baby_trigger_item": null,
        "chain": chain
    })
}

/// One node of an evolution-chain document.
///
/// # Arguments
/// - `species_name` - API name of the species at this node
/// - `evolves_to` - Child nodes, in upstream order
pub fn chain_node(species_name: &str, evolves_to: Vec<Value>) -> Value {
    json!({
        "is_baby": false,
        "species": {
            "name": species_name,
            "url": format!("https://pokeapi.example/pokemon-species/{}/", species_name)
        },
        "evolves_to": evolves_to
    })
}

/// Create a mock `/pokemon` listing page reporting the given total count.
pub fn mock_listing(count: u64) -> Value {
    json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": []
    })
}
