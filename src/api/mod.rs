//! PokéAPI access layer.
//!
//! [`client::PokeApiClient`] wraps a shared `reqwest` client with the retry policy
//! that every request in an import run goes through, including sub-resource fetches
//! for species and evolution chains. [`model`] holds the typed views of the PokéAPI
//! payloads the importer consumes.

pub mod client;
pub mod model;
