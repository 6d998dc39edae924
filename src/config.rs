// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::services::locale::{Locale, LocaleError};
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_CSV: &str = "runtime/data/sample_data.csv";
const DEFAULT_USERS_XML: &str = "runtime/data/users.xml";
const DEFAULT_PORT: u16 = 8080;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Presence log (CSV)
    pub data_csv: PathBuf,
    /// User directory (XML)
    pub users_xml: PathBuf,
    /// Server port
    pub port: u16,
    /// Locale for name collation and weekday labels (Polish unless overridden)
    pub locale: Locale,
    /// Reuse parsed files until they change on disk
    pub cache_enabled: bool,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            data_csv: PathBuf::from("tests/fixtures/test_data.csv"),
            users_xml: PathBuf::from("tests/fixtures/test_users.xml"),
            port: DEFAULT_PORT,
            locale: Locale::default(),
            cache_enabled: false,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let locale = match env::var("PRESENCE_LOCALE") {
            Ok(value) => value.parse()?,
            Err(_) => Locale::default(),
        };

        Ok(Self {
            data_csv: env::var("DATA_CSV")
                .unwrap_or_else(|_| DEFAULT_DATA_CSV.to_string())
                .into(),
            users_xml: env::var("USERS_XML")
                .unwrap_or_else(|_| DEFAULT_USERS_XML.to_string())
                .into(),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            locale,
            cache_enabled: env::var("PRESENCE_CACHE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PRESENCE_LOCALE: {0}")]
    Locale(#[from] LocaleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("DATA_CSV", "/srv/presence/data.csv");
        env::set_var("PRESENCE_LOCALE", "pl_PL.UTF-8");
        env::set_var("PRESENCE_CACHE", "true");
        env::remove_var("PORT");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.data_csv, PathBuf::from("/srv/presence/data.csv"));
        assert_eq!(config.locale, Locale::Pl);
        assert!(config.cache_enabled);
        assert_eq!(config.port, 8080);

        env::set_var("PRESENCE_LOCALE", "en_US.UTF-8");
        assert_eq!(Config::from_env().unwrap().locale, Locale::En);

        env::remove_var("PRESENCE_LOCALE");
        assert_eq!(Config::from_env().unwrap().locale, Locale::Pl);

        env::set_var("PRESENCE_LOCALE", "xx_XX");
        assert!(matches!(Config::from_env(), Err(ConfigError::Locale(_))));

        env::remove_var("DATA_CSV");
        env::remove_var("PRESENCE_LOCALE");
        env::remove_var("PRESENCE_CACHE");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }
}
