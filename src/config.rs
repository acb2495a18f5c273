use crate::error::config::ConfigError;

/// Request timeout applied when `API_TIMEOUT_SECS` is unset.
const DEFAULT_API_TIMEOUT_SECS: u64 = 5;
/// Retry budget applied when `API_MAX_RETRIES` is unset.
const DEFAULT_API_MAX_RETRIES: u32 = 3;

pub struct Config {
    pub api_base_url: String,
    pub database_url: String,
    pub api_timeout_secs: u64,
    pub api_max_retries: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: require_env("API_BASE")?,
            database_url: require_env("DATABASE_URL")?,
            api_timeout_secs: parse_env_or("API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)?,
            api_max_retries: parse_env_or("API_MAX_RETRIES", DEFAULT_API_MAX_RETRIES)?,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected an integer, got '{}'", value),
        }),
        Err(_) => Ok(default),
    }
}
