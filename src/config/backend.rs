use std::time::Duration;

use super::env_or;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn load() -> Self {
        Self::new(env_or("CONNECT_API_URL", DEFAULT_BASE_URL))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = BackendConfig::new("http://10.0.0.5:8080/");
        assert_eq!(config.base_url, "http://10.0.0.5:8080");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
