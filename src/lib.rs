//! Pokédex importer core.
//!
//! This crate synchronizes Pokémon data from the PokéAPI into a local
//! database. The [`api`] module talks to the upstream API with retry-wrapped
//! requests, the [`data`] module persists records through SeaORM
//! repositories, and the [`service`] module orchestrates full import runs
//! with per-record transactions.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod service;
pub mod startup;
