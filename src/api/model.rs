//! Typed views of PokéAPI payloads.
//!
//! Deserialization is deliberately partial: only the fields the importer persists
//! are declared, everything else in the upstream payload is ignored.

use serde::{Deserialize, Serialize};

/// A named reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// A bare URL reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

/// One page of the paginated `/pokemon` listing; only the total count is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcePage {
    #[serde(default)]
    pub count: Option<u64>,
}

/// A single Pokémon record as returned by `/pokemon/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonData {
    pub id: i64,
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub base_experience: Option<i32>,
    pub sprites: SpriteSet,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    pub species: ResourceLink,
}

/// Sprite URLs for a Pokémon; only the default front sprite is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
}

/// One entry of a Pokémon's type list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// One entry of a Pokémon's ability list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

/// One entry of a Pokémon's stat list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: i32,
    pub stat: NamedResource,
}

/// A species record; only the evolution-chain link is consumed.
///
/// The link is optional because a handful of species upstream have no chain
/// attached at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesData {
    #[serde(default)]
    pub evolution_chain: Option<ResourceLink>,
}

/// Typed view over an evolution-chain document.
///
/// The document itself is stored verbatim; this view exists to pull out the chain
/// ID for upserts and to walk the species graph when flattening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChainData {
    pub id: i64,
    pub chain: ChainNode,
}

/// One node of the evolution graph: a species plus the forms it evolves into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainNode>,
}
