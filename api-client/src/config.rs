// Client configuration

use std::env;

/// Base URL used when nothing else is configured (local development server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable read by [`ClientConfig::from_env`]
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Position service connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Create a config for the given base URL (trailing `/` is dropped)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `API_BASE_URL` once; unset or blank means [`DEFAULT_BASE_URL`]
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ClientConfig::default().base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://api.example.com/v2/");
        assert_eq!(config.base_url(), "https://api.example.com/v2");
    }
}
