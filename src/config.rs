//! Configuration management for the contact resolver.
//!
//! Settings are read from environment variables, optionally seeded from a
//! `.env` file. Nothing is printed to stdout while loading, since the binary
//! reserves stdout for its JSON result.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default cap on the number of contacts returned by one search.
pub const DEFAULT_MAX_RECIPIENT_COUNT: usize = 70;

/// Default prefix identifying mobile numbers.
pub const DEFAULT_MOBILE_PREFIX: &str = "01";

/// Configuration for the contact resolver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of contacts in a match result (default: 70)
    pub max_recipient_count: usize,

    /// Normalized prefix of mobile numbers, preferred when no label filter
    /// is given (default: "01")
    pub mobile_prefix: String,

    /// Address book exported as JSON, used by the binary
    pub contacts_file: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MAX_RECIPIENT_COUNT`: result cap (default: 70)
    /// - `MOBILE_NUMBER_PREFIX`: mobile prefix, digits only (default: "01")
    /// - `CONTACTS_FILE`: path of a JSON address book
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() does not print to stdout
        let _ = dotenvy::dotenv();

        let max_recipient_count =
            Self::parse_env_usize("MAX_RECIPIENT_COUNT", DEFAULT_MAX_RECIPIENT_COUNT)?;
        if max_recipient_count == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_RECIPIENT_COUNT".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let mobile_prefix =
            env::var("MOBILE_NUMBER_PREFIX").unwrap_or_else(|_| DEFAULT_MOBILE_PREFIX.to_string());
        if mobile_prefix.is_empty() || !mobile_prefix.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "MOBILE_NUMBER_PREFIX".to_string(),
                reason: format!("Must be a non-empty run of digits, got: {:?}", mobile_prefix),
            });
        }

        let contacts_file = env::var("CONTACTS_FILE").ok().map(PathBuf::from);
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            max_recipient_count,
            mobile_prefix,
            contacts_file,
            log_level,
        })
    }

    /// The configured address book path, or an error naming the variable.
    pub fn require_contacts_file(&self) -> ConfigResult<PathBuf> {
        self.contacts_file
            .clone()
            .ok_or_else(|| ConfigError::MissingVar("CONTACTS_FILE".to_string()))
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_recipient_count: DEFAULT_MAX_RECIPIENT_COUNT,
            mobile_prefix: DEFAULT_MOBILE_PREFIX.to_string(),
            contacts_file: None,
            log_level: "error".to_string(),
        }
    }
}
