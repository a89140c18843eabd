use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_BASE;

const DEFAULT_SITE_URL: &str = "https://devotional-generator.vercel.app";

/// Application configuration loaded from environment variables.
///
/// Nothing here is required at startup: a missing `GEMINI_API_KEY` surfaces as a
/// request-time configuration error, and a missing `DATABASE_URL` selects the
/// in-memory store.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub site_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            database_url: var("DATABASE_URL"),
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_api_base: var("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            site_url: var("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(config.database_url.is_none());
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_api_base, DEFAULT_API_BASE);
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config =
            Config::from_lookup(lookup(&[("GEMINI_API_KEY", "  "), ("DATABASE_URL", "")])).unwrap();
        assert!(config.gemini_api_key.is_none());
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_BASE", "http://127.0.0.1:9000/models/"),
            ("SITE_URL", "https://example.org/"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_base, "http://127.0.0.1:9000/models");
        assert_eq!(config.site_url, "https://example.org");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
