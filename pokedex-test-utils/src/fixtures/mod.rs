//! Test fixture modules for HTTP mock creation.
//!
//! The `poke` submodule provides payload factories and mock endpoint helpers that
//! simulate the PokéAPI surface the importer consumes: the paginated listing, the
//! per-Pokémon record, the species record, and the evolution-chain document.

pub mod poke;
