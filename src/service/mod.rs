//! Service layer for import orchestration and evolution chain handling.
//!
//! This module coordinates the PokéAPI client and the repositories: the
//! importer walks a Pokédex number range and persists each record atomically,
//! while the evolution module turns stored chain documents into flat,
//! display-ready species lists.

pub mod evolution;
pub mod importer;
