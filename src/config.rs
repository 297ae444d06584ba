use serde::Deserialize;
use std::time::Duration;

use crate::models::Catalog;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of catalog lookups in flight per request
    #[serde(default = "default_scan_concurrency")]
    pub scan_concurrency: usize,

    /// Timeout for a single outbound lookup
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,

    /// Wall-clock budget for a whole genre search or recommendation request
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_genre_search_limit")]
    pub genre_search_limit: usize,

    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Comma-separated override for the candidate catalog
    #[serde(default)]
    pub catalog_titles: Option<Vec<String>>,
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_scan_concurrency() -> usize {
    5
}

fn default_lookup_timeout_ms() -> u64 {
    5_000
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_genre_search_limit() -> usize {
    15
}

fn default_recommendation_limit() -> usize {
    20
}

/// Limits applied to every catalog scan and ranking pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    /// Upper bound on concurrent lookups, never zero
    pub concurrency: usize,
    pub request_timeout: Duration,
    pub genre_search_limit: usize,
    pub recommendation_limit: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            concurrency: default_scan_concurrency(),
            request_timeout: Duration::from_millis(default_request_timeout_ms()),
            genre_search_limit: default_genre_search_limit(),
            recommendation_limit: default_recommendation_limit(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            concurrency: self.scan_concurrency.max(1),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            genre_search_limit: self.genre_search_limit,
            recommendation_limit: self.recommendation_limit,
        }
    }

    /// The configured catalog, or the built-in one when none is set
    pub fn catalog(&self) -> Catalog {
        match &self.catalog_titles {
            Some(titles) if titles.iter().any(|t| !t.trim().is_empty()) => {
                Catalog::new(titles.iter().cloned())
            }
            _ => Catalog::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        envy::from_iter::<_, Config>(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("OMDB_API_KEY", "secret")]);
        assert_eq!(config.omdb_api_key, "secret");
        assert_eq!(config.omdb_api_url, "http://www.omdbapi.com/");
        assert_eq!(config.port, 8080);

        let settings = config.scan_settings();
        assert_eq!(settings, ScanSettings::default());
        assert_eq!(config.catalog(), Catalog::default());
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let result = envy::from_iter::<_, Config>(vec![("PORT".to_string(), "9000".to_string())]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config = config_from(&[("OMDB_API_KEY", "k"), ("SCAN_CONCURRENCY", "0")]);
        assert_eq!(config.scan_settings().concurrency, 1);
    }

    #[test]
    fn test_catalog_override() {
        let config = config_from(&[
            ("OMDB_API_KEY", "k"),
            ("CATALOG_TITLES", "Heat,Ronin,The Insider"),
        ]);
        let catalog = config.catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.titles()[2], "The Insider");
    }
}
