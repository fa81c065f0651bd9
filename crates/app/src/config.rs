//! Environment-driven configuration.

use std::path::PathBuf;

use thiserror::Error;

use minierp_observability::LogFormat;

pub const SEED_DATA_VAR: &str = "MINIERP_SEED_DATA";
pub const STATE_FILE_VAR: &str = "MINIERP_STATE_FILE";
pub const LOG_FORMAT_VAR: &str = "MINIERP_LOG_FORMAT";
pub const TOP_PRODUCTS_VAR: &str = "MINIERP_TOP_PRODUCTS";
pub const RECENT_SALES_VAR: &str = "MINIERP_RECENT_SALES";
pub const RECENT_EXPENSES_VAR: &str = "MINIERP_RECENT_EXPENSES";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Load the sample records into a fresh store.
    pub seed_data: bool,
    /// JSON file backing sessions and registered accounts. `None` keeps them
    /// in memory.
    pub state_file: Option<PathBuf>,
    pub log_format: LogFormat,
    pub top_products: usize,
    pub recent_sales: usize,
    pub recent_expenses: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_data: true,
            state_file: None,
            log_format: LogFormat::Json,
            top_products: 5,
            recent_sales: 5,
            recent_expenses: 3,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable source. Unset or blank
    /// variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let seed_data = match get(SEED_DATA_VAR) {
            Some(raw) => parse_bool(SEED_DATA_VAR, &raw)?,
            None => defaults.seed_data,
        };

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|reason| invalid(LOG_FORMAT_VAR, &raw, reason))?,
            None => defaults.log_format,
        };

        Ok(Self {
            seed_data,
            state_file: get(STATE_FILE_VAR).map(PathBuf::from),
            log_format,
            top_products: parse_count(TOP_PRODUCTS_VAR, get(TOP_PRODUCTS_VAR), defaults.top_products)?,
            recent_sales: parse_count(RECENT_SALES_VAR, get(RECENT_SALES_VAR), defaults.recent_sales)?,
            recent_expenses: parse_count(
                RECENT_EXPENSES_VAR,
                get(RECENT_EXPENSES_VAR),
                defaults.recent_expenses,
            )?,
        })
    }
}

fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, raw, "expected true or false")),
    }
}

fn parse_count(var: &'static str, raw: Option<String>, default: usize) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| invalid(var, &raw, e.to_string())),
    }
}
