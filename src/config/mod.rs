use std::env;
use thiserror::Error;

pub mod backend;
pub mod database;
pub mod logging;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Credentials file not found at: {0}")]
    MissingCredentials(String),
    #[error("Invalid credentials file: {0}")]
    InvalidCredentials(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to connect to MongoDB: {0}")]
    ConnectionError(#[from] mongodb::error::Error),
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Reads `key` from the environment, falling back to `default` when unset or empty.
pub fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

pub fn env_usize_or(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_when_unset() {
        assert_eq!(env_or("CONNECT_OPS_TEST_UNSET_KEY", "fallback"), "fallback");
        assert_eq!(env_usize_or("CONNECT_OPS_TEST_UNSET_NUM", 7), 7);
    }
}
