//! Data access layer for the Pokédex schema.
//!
//! Each repository handles one aggregate (Pokémon, reference tags, evolution
//! chains). Repositories are generic over [`sea_orm::ConnectionTrait`] so the same
//! methods run against the shared connection pool or inside a per-record
//! transaction.

pub mod evolution_chain;
pub mod pokemon;
pub mod tag;

#[cfg(test)]
mod tests;
