//! Test configuration constants for PokéAPI client setup.
//!
//! These values keep retry-heavy tests fast: the production client backs off for
//! hundreds of milliseconds between attempts, which is pointless against a local
//! mock server.

/// Backoff before the first retry in tests, in milliseconds.
pub static TEST_INITIAL_BACKOFF_MS: u64 = 5;
