use std::env;

use url::Url;

use crate::{error::ConfigError, utils::parse_endpoint};

pub const ENDPOINT_VAR: &str = "SHORTLINK_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let endpoint = get_env_or(ENDPOINT_VAR, DEFAULT_ENDPOINT);
        Self::with_endpoint(&endpoint)
    }

    pub fn with_endpoint(raw: &str) -> Result<Self, ConfigError> {
        let endpoint = parse_endpoint(raw).map_err(|reason| ConfigError::InvalidEndpoint {
            value: raw.to_string(),
            reason,
        })?;
        Ok(Self { endpoint })
    }
}

fn get_env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| {
        tracing::warn!(
            "{} environment variable not set, using default: {}",
            var,
            default
        );
        default.to_string()
    })
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
