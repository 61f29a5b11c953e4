use std::str::FromStr;
use crate::api::coingecko::MarketDataClient;
use crate::api::newsdata::NewsClient;
use crate::services::chart_service::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::utils::ConfigError;

/// Runtime settings, read from the environment (and `.env` via dotenv)
#[derive(Debug, Clone)]
pub struct Settings {
    pub coingecko_base_url: String,
    pub newsdata_base_url: String,
    pub newsdata_api_key: Option<String>,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            coingecko_base_url: MarketDataClient::DEFAULT_BASE_URL.to_string(),
            newsdata_base_url: NewsClient::DEFAULT_BASE_URL.to_string(),
            newsdata_api_key: None,
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or blank keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Ok(Self {
            coingecko_base_url: get("COINGECKO_BASE_URL").unwrap_or(defaults.coingecko_base_url),
            newsdata_base_url: get("NEWSDATA_BASE_URL").unwrap_or(defaults.newsdata_base_url),
            newsdata_api_key: get("NEWSDATA_API_KEY"),
            chart_width: parse_or("CHART_WIDTH", get("CHART_WIDTH"), defaults.chart_width)?,
            chart_height: parse_or("CHART_HEIGHT", get("CHART_HEIGHT"), defaults.chart_height)?,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value: v,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings.coingecko_base_url, "https://api.coingecko.com/api/v3");
        assert_eq!(settings.newsdata_base_url, "https://newsdata.io/api/1");
        assert!(settings.newsdata_api_key.is_none());
        assert_eq!((settings.chart_width, settings.chart_height), (1000, 500));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("NEWSDATA_API_KEY", "pub_123"),
            ("CHART_WIDTH", "800"),
            ("COINGECKO_BASE_URL", "http://localhost:9000"),
            ("NEWSDATA_BASE_URL", "  "),
        ]
        .into_iter()
        .collect();

        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(settings.newsdata_api_key.as_deref(), Some("pub_123"));
        assert_eq!(settings.chart_width, 800);
        assert_eq!(settings.chart_height, 500);
        assert_eq!(settings.coingecko_base_url, "http://localhost:9000");
        assert_eq!(settings.newsdata_base_url, "https://newsdata.io/api/1");
    }

    #[test]
    fn test_invalid_dimension() {
        let result = Settings::from_lookup(|k| (k == "CHART_HEIGHT").then(|| "tall".to_string()));
        match result {
            Err(ConfigError::Invalid { key, value }) => {
                assert_eq!(key, "CHART_HEIGHT");
                assert_eq!(value, "tall");
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
