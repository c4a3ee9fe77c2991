//! Service configuration read from the Lambda environment
//!
//! Built once in each binary's `main` and passed to the handlers by
//! reference. Every field has a default so an unconfigured function still
//! serves requests.

use crate::growth::RoundingPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_BANKS_RESPONSE_PATH: &str = "BANKS_RESPONSE_PATH";
pub const ENV_ROUNDING: &str = "COMPOUNDING_ROUNDING";
pub const ENV_MAX_YEARS: &str = "COMPOUNDING_MAX_YEARS";
pub const ENV_CORS_ALLOW_ORIGIN: &str = "CORS_ALLOW_ORIGIN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Rounding {
        var: &'static str,
        source: crate::growth::ParseRoundingPolicyError,
    },
    #[error("{var}: expected a non-negative integer, got '{value}'")]
    MaxYears { var: &'static str, value: String },
}

/// Settings shared by the request handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// JSON file returned verbatim by `GET /banks`
    #[serde(default = "default_banks_path")]
    pub banks_response_path: PathBuf,

    /// Rounding applied to computed balances
    #[serde(default)]
    pub rounding: RoundingPolicy,

    /// Largest accepted `years` value
    #[serde(default = "default_max_years")]
    pub max_years: u32,

    /// Value of `Access-Control-Allow-Origin`
    #[serde(default = "default_allow_origin")]
    pub cors_allow_origin: String,
}

fn default_banks_path() -> PathBuf { PathBuf::from("banks-response.json") }
fn default_max_years() -> u32 { 1_000 }
fn default_allow_origin() -> String { "*".to_string() }

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            banks_response_path: default_banks_path(),
            rounding: RoundingPolicy::default(),
            max_years: default_max_years(),
            cors_allow_origin: default_allow_origin(),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset or blank keys keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get(ENV_BANKS_RESPONSE_PATH) {
            config.banks_response_path = PathBuf::from(path);
        }
        if let Some(value) = get(ENV_ROUNDING) {
            config.rounding = value.parse().map_err(|source| ConfigError::Rounding {
                var: ENV_ROUNDING,
                source,
            })?;
        }
        if let Some(value) = get(ENV_MAX_YEARS) {
            config.max_years = value.trim().parse().map_err(|_| ConfigError::MaxYears {
                var: ENV_MAX_YEARS,
                value: value.clone(),
            })?;
        }
        if let Some(origin) = get(ENV_CORS_ALLOW_ORIGIN) {
            config.cors_allow_origin = origin;
        }

        Ok(config)
    }
}
