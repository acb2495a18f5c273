//! PokéAPI HTTP mock endpoint creation utilities.
//!
//! This module provides methods for creating mock HTTP endpoints that simulate
//! PokéAPI responses. Endpoints are registered with the mockito server and verify
//! they were called the expected number of times. Error endpoints for a path must
//! be created before success endpoints for the same path so mockito serves them
//! sequentially.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::poke::PokeFixtures;

impl<'a> PokeFixtures<'a> {
    /// Fully-qualified species URL on the mock server for a Pokémon ID.
    pub fn species_url(&self, pokemon_id: i64) -> String {
        format!("{}/pokemon-species/{}/", self.setup.server.url(), pokemon_id)
    }

    /// Fully-qualified evolution-chain URL on the mock server for a chain ID.
    pub fn chain_url(&self, chain_id: i64) -> String {
        format!("{}/evolution-chain/{}/", self.setup.server.url(), chain_id)
    }

    /// Create a mock HTTP endpoint for the paginated listing.
    ///
    /// Sets up a mock GET endpoint at `/pokemon?limit=1` that reports the given
    /// total count. The mock verifies it was called exactly `expected_requests`
    /// times.
    pub fn create_count_endpoint(&mut self, count: u64, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/pokemon")
            .match_query(Matcher::UrlEncoded("limit".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(super::factory::mock_listing(count).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for a Pokémon record.
    ///
    /// Sets up a mock GET endpoint at `/pokemon/{pokemon_id}` that returns the
    /// given payload as JSON. The mock verifies it was called exactly
    /// `expected_requests` times.
    pub fn create_pokemon_endpoint(
        &mut self,
        pokemon_id: i64,
        payload: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/pokemon/{}", pokemon_id);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(payload.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock Pokémon record endpoint that returns an error status code.
    ///
    /// Useful for testing retry logic and per-record failure isolation.
    pub fn create_pokemon_endpoint_error(
        &mut self,
        pokemon_id: i64,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/pokemon/{}", pokemon_id);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for a species record.
    ///
    /// Sets up a mock GET endpoint at `/pokemon-species/{pokemon_id}/` that
    /// returns the given payload as JSON. The mock verifies it was called exactly
    /// `expected_requests` times.
    pub fn create_species_endpoint(
        &mut self,
        pokemon_id: i64,
        payload: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/pokemon-species/{}/", pokemon_id);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(payload.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock species endpoint that returns an error status code.
    pub fn create_species_endpoint_error(
        &mut self,
        pokemon_id: i64,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/pokemon-species/{}/", pokemon_id);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for an evolution-chain document.
    ///
    /// Sets up a mock GET endpoint at `/evolution-chain/{chain_id}/` that returns
    /// the given payload as JSON. The mock verifies it was called exactly
    /// `expected_requests` times.
    pub fn create_evolution_chain_endpoint(
        &mut self,
        chain_id: i64,
        payload: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/evolution-chain/{}/", chain_id);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(payload.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock evolution-chain endpoint that returns an error status code.
    pub fn create_evolution_chain_endpoint_error(
        &mut self,
        chain_id: i64,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/evolution-chain/{}/", chain_id);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }
}
