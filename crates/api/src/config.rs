//! Process configuration read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

pub const ADDR_VAR: &str = "PARTS_API_ADDR";
pub const SEED_VAR: &str = "PARTS_API_SEED";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be true/false/1/0, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Start with the three fixed parts (Wire, Brake Fluid, Engine Oil).
    pub seed_catalog: bool,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(ADDR_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
            })?,
            None => default_addr(),
        };

        let seed_catalog = match lookup(SEED_VAR) {
            Some(value) => parse_flag(SEED_VAR, &value)?,
            None => true,
        };

        Ok(Self {
            bind_addr,
            seed_catalog,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_addr(),
            seed_catalog: true,
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
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
    fn defaults_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ApiConfig::default());
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
        assert!(cfg.seed_catalog);
    }

    #[test]
    fn reads_addr_and_seed_flag() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            (ADDR_VAR, "127.0.0.1:9000"),
            (SEED_VAR, "false"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 9000);
        assert!(!cfg.seed_catalog);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ApiConfig::from_lookup(lookup(&[(ADDR_VAR, "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));

        let err = ApiConfig::from_lookup(lookup(&[(SEED_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { .. }));
    }
}
