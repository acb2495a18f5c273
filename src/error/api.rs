use thiserror::Error;

/// Errors produced by the PokéAPI client.
///
/// Each variant carries the request URL so failures deep inside an import run can
/// be traced back to the resource that caused them.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
    /// Upstream answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
    },
    /// The request never produced a response (connection failure, timeout).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The response body was not valid JSON or did not match the expected shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
