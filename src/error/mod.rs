//! Error types for the Pokédex importer.
//!
//! This module provides specialized error types for the different failure domains
//! (configuration, PokéAPI access) plus a unified [`Error`] that aggregates them
//! together with external library errors. All errors use `thiserror` for ergonomic
//! error definitions with automatic `Display` and `Error` trait implementations.

pub mod api;
pub mod config;
pub mod retry;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError};

/// Main error type for the Pokédex importer.
///
/// This enum aggregates the domain-specific error types and external library errors
/// into a single unified error type. It uses `thiserror`'s `#[from]` attribute to
/// enable automatic conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - PokéAPI errors (failed requests, unexpected statuses, undecodable bodies)
/// - Database errors (query failures, connection issues, constraint violations)
/// - Document errors (fetched JSON not matching the expected shape)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// PokéAPI client error (request, status, or body decode failure).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON error (a fetched document did not match the expected shape).
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Malformed evolution chain document (nesting beyond the supported depth).
    #[error("Malformed evolution chain: {0}")]
    MalformedChain(String),
}
