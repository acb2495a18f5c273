use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::model::{PokemonData, ResourcePage, SpeciesData},
    error::{api::ApiError, retry::ErrorRetryStrategy},
};

/// Per-attempt request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
/// Retries allowed after the initial request.
const DEFAULT_MAX_RETRIES: u32 = 3;
/// Backoff before the first retry; doubles on each subsequent retry.
const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(300);
/// Upper bound on a single backoff sleep, however large the retry budget.
const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Configuration for [`PokeApiClient`].
#[derive(Debug, Clone)]
pub struct PokeApiClientConfig {
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    initial_backoff: Duration,
}

impl PokeApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Override the per-attempt request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the number of retries allowed after the initial request.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the backoff before the first retry.
    #[must_use]
    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }
}

/// Client for the PokéAPI.
///
/// One instance is shared across an entire import run so every request uses the
/// same connection pool and the same retry policy. Transient upstream failures
/// are retried with exponential backoff; permanent failures surface immediately.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    config: PokeApiClientConfig,
}

impl PokeApiClient {
    pub fn new(config: PokeApiClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { http, config })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch a path relative to the configured base URL.
    pub async fn fetch_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.config.base_url, path.trim_start_matches('/'));

        self.request(&url).await
    }

    /// Fetch a fully-qualified URL taken from a previously fetched payload.
    ///
    /// Sub-resource fetches go through the same retry-wrapped request path as
    /// every other request.
    pub async fn fetch_resource(&self, url: &str) -> Result<Value, ApiError> {
        self.request(url).await
    }

    /// Total number of Pokémon the upstream catalog reports.
    ///
    /// Returns zero when the listing omits the count field.
    pub async fn get_total_count(&self) -> Result<u64, ApiError> {
        let url = format!("{}/pokemon?limit=1", self.config.base_url);
        let page: ResourcePage = self.request(&url).await?;

        Ok(page.count.unwrap_or(0))
    }

    /// Fetch one Pokémon record by its Pokédex number.
    pub async fn get_pokemon(&self, pokemon_id: i64) -> Result<PokemonData, ApiError> {
        let url = format!("{}/pokemon/{}", self.config.base_url, pokemon_id);

        self.request(&url).await
    }

    /// Fetch a species record from the URL carried by a Pokémon payload.
    pub async fn get_species(&self, species_url: &str) -> Result<SpeciesData, ApiError> {
        self.request(species_url).await
    }

    /// Fetch an evolution-chain document from the URL carried by a species payload.
    ///
    /// The document is returned raw so it can be persisted verbatim.
    pub async fn get_evolution_chain(&self, evolution_url: &str) -> Result<Value, ApiError> {
        self.request(evolution_url).await
    }

    /// Execute a GET request with automatic retry logic.
    ///
    /// Errors classified as transient by [`ApiError::to_retry_strategy`] are retried
    /// with exponential backoff until the retry budget is exhausted; permanent
    /// errors are returned immediately.
    async fn request<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let mut retry_count: u32 = 0;

        loop {
            tracing::debug!("GET {}", url);

            match self.try_request(url).await {
                Ok(value) => return Ok(value),
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for GET {}: {:?}", url, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        retry_count += 1;
                        if retry_count > self.config.max_retries {
                            tracing::error!(
                                "Retry budget ({}) exhausted for GET {}: {:?}",
                                self.config.max_retries,
                                url,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.backoff_for_retry(retry_count);

                        tracing::warn!(
                            "Retrying GET {} (retry {}/{}) after {:?}: {:?}",
                            url,
                            retry_count,
                            self.config.max_retries,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }

    /// Backoff before the given retry, counted from one.
    ///
    /// Doubles per retry up to [`MAX_BACKOFF`]; the doubling saturates rather
    /// than overflowing when the configured retry budget is very large.
    fn backoff_for_retry(&self, retry_count: u32) -> Duration {
        self.config
            .initial_backoff
            .saturating_mul(2_u32.saturating_pow(retry_count - 1))
            .min(MAX_BACKOFF)
    }

    /// Perform a single request attempt and decode the response body.
    async fn try_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::ServerGuard;
    use serde_json::json;

    use super::*;

    fn test_client(server: &ServerGuard) -> PokeApiClient {
        let config = PokeApiClientConfig::new(server.url())
            .with_initial_backoff(Duration::from_millis(5));

        PokeApiClient::new(config).unwrap()
    }

    fn pokemon_body(pokemon_id: i64, name: &str, species_url: &str) -> String {
        json!({
            "id": pokemon_id,
            "name": name,
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "sprites": { "front_default": "https://sprites.example/1.png", "back_default": null },
            "types": [ { "slot": 1, "type": { "name": "grass", "url": "https://api.example/type/12/" } } ],
            "abilities": [ { "is_hidden": false, "ability": { "name": "overgrow" } } ],
            "stats": [ { "base_stat": 45, "effort": 0, "stat": { "name": "hp" } } ],
            "species": { "name": name, "url": species_url }
        })
        .to_string()
    }

    /// Expect Ok when a transient server error clears within the retry budget.
    #[tokio::test]
    async fn get_pokemon_retries_transient_server_errors() {
        let mut server = mockito::Server::new_async().await;

        let error_mock = server
            .mock("GET", "/pokemon/1")
            .with_status(503)
            .expect(2)
            .create();
        let ok_mock = server
            .mock("GET", "/pokemon/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(pokemon_body(1, "bulbasaur", "https://api.example/pokemon-species/1/"))
            .expect(1)
            .create();

        let client = test_client(&server);
        let pokemon = client.get_pokemon(1).await.unwrap();

        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(pokemon.types[0].type_ref.name, "grass");
        error_mock.assert();
        ok_mock.assert();
    }

    /// Expect Err without any retry when upstream returns a client error.
    #[tokio::test]
    async fn get_pokemon_fails_fast_on_client_error() {
        let mut server = mockito::Server::new_async().await;

        let not_found_mock = server
            .mock("GET", "/pokemon/99999")
            .with_status(404)
            .expect(1)
            .create();

        let client = test_client(&server);
        let err = client.get_pokemon(99999).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Http { status, .. } if status == reqwest::StatusCode::NOT_FOUND
        ));
        not_found_mock.assert();
    }

    /// Expect Err carrying the last status once the retry budget is exhausted.
    #[tokio::test]
    async fn request_stops_after_retry_budget() {
        let mut server = mockito::Server::new_async().await;

        // Initial request plus three retries.
        let error_mock = server
            .mock("GET", "/pokemon/1")
            .with_status(500)
            .expect(4)
            .create();

        let client = test_client(&server);
        let err = client.get_pokemon(1).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Http { status, .. } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        error_mock.assert();
    }

    /// Expect the backoff to double per retry and stay bounded for retry
    /// counts far beyond any sensible budget.
    #[tokio::test]
    async fn backoff_doubles_then_stays_bounded() {
        let server = mockito::Server::new_async().await;
        let client = test_client(&server);

        assert_eq!(client.backoff_for_retry(1), Duration::from_millis(5));
        assert_eq!(client.backoff_for_retry(2), Duration::from_millis(10));
        assert_eq!(client.backoff_for_retry(3), Duration::from_millis(20));
        assert_eq!(client.backoff_for_retry(33), MAX_BACKOFF);
        assert_eq!(client.backoff_for_retry(u32::MAX), MAX_BACKOFF);
    }

    /// Expect Ok when a sub-resource URL recovers within the retry budget.
    #[tokio::test]
    async fn fetch_resource_retries_transient_server_errors() {
        let mut server = mockito::Server::new_async().await;

        let error_mock = server
            .mock("GET", "/evolution-chain/1/")
            .with_status(503)
            .expect(1)
            .create();
        let ok_mock = server
            .mock("GET", "/evolution-chain/1/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "id": 1, "chain": { "species": { "name": "bulbasaur" }, "evolves_to": [] } }).to_string())
            .expect(1)
            .create();

        let client = test_client(&server);
        let url = format!("{}/evolution-chain/1/", server.url());
        let document = client.fetch_resource(&url).await.unwrap();

        assert_eq!(document["id"], 1);
        error_mock.assert();
        ok_mock.assert();
    }

    /// Expect Err without any retry when the response body is not valid JSON.
    #[tokio::test]
    async fn request_fails_fast_on_undecodable_body() {
        let mut server = mockito::Server::new_async().await;

        let bad_body_mock = server
            .mock("GET", "/pokemon/1")
            .with_status(200)
            .with_body("definitely not json")
            .expect(1)
            .create();

        let client = test_client(&server);
        let err = client.get_pokemon(1).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
        bad_body_mock.assert();
    }

    /// Expect Ok with the reported total when the listing carries a count.
    #[tokio::test]
    async fn get_total_count_reads_listing_count() {
        let mut server = mockito::Server::new_async().await;

        let count_mock = server
            .mock("GET", "/pokemon")
            .match_query(mockito::Matcher::UrlEncoded("limit".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "count": 1302, "results": [] }).to_string())
            .expect(1)
            .create();

        let client = test_client(&server);
        let total = client.get_total_count().await.unwrap();

        assert_eq!(total, 1302);
        count_mock.assert();
    }

    /// Expect Ok(0) when the listing omits the count field.
    #[tokio::test]
    async fn get_total_count_defaults_to_zero() {
        let mut server = mockito::Server::new_async().await;

        let count_mock = server
            .mock("GET", "/pokemon")
            .match_query(mockito::Matcher::UrlEncoded("limit".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "results": [] }).to_string())
            .expect(1)
            .create();

        let client = test_client(&server);
        let total = client.get_total_count().await.unwrap();

        assert_eq!(total, 0);
        count_mock.assert();
    }

    /// Expect Ok when fetching a relative path, regardless of a leading slash
    /// on the path or a trailing slash on the configured base URL.
    #[tokio::test]
    async fn fetch_json_joins_relative_paths() {
        let mut server = mockito::Server::new_async().await;

        let berry_mock = server
            .mock("GET", "/berry/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "id": 1, "name": "cheri" }).to_string())
            .expect(2)
            .create();

        let config = PokeApiClientConfig::new(format!("{}/", server.url()))
            .with_initial_backoff(Duration::from_millis(5));
        let client = PokeApiClient::new(config).unwrap();
        assert_eq!(client.base_url(), server.url());

        let first = client.fetch_json("berry/1").await.unwrap();
        let second = client.fetch_json("/berry/1").await.unwrap();

        assert_eq!(first["name"], "cheri");
        assert_eq!(second, first);
        berry_mock.assert();
    }

    /// Expect Ok with no chain link when the species payload omits one.
    #[tokio::test]
    async fn get_species_tolerates_missing_chain_link() {
        let mut server = mockito::Server::new_async().await;

        let species_mock = server
            .mock("GET", "/pokemon-species/1/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "name": "bulbasaur", "evolution_chain": null }).to_string())
            .expect(1)
            .create();

        let client = test_client(&server);
        let url = format!("{}/pokemon-species/1/", server.url());
        let species = client.get_species(&url).await.unwrap();

        assert!(species.evolution_chain.is_none());
        species_mock.assert();
    }
}
