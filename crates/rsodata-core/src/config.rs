//! Configuration management for rsodata.
//!
//! All configuration is driven by environment variables.

use std::env;

use crate::error::{RsODataError, RsODataResult};

/// Global configuration for rsodata.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ODataConfig {
    /// Log level.
    pub log_level: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Maximum nesting depth of `$expand` sub-queries (`None` = unbounded).
    pub max_expand_depth: Option<usize>,
}

impl Default for ODataConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            pretty: true,
            max_expand_depth: None,
        }
    }
}

impl ODataConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LOG_LEVEL` | `info` |
    /// | `ODATA_PRETTY` | `true` |
    /// | `ODATA_MAX_EXPAND_DEPTH` | *(unset = unbounded)* |
    pub fn from_env() -> RsODataResult<Self> {
        let mut config = Self::default();

        if let Ok(v) = env::var("LOG_LEVEL") {
            config.log_level = v;
        }
        config.pretty = env_bool("ODATA_PRETTY", config.pretty);
        if let Ok(v) = env::var("ODATA_MAX_EXPAND_DEPTH") {
            config.max_expand_depth = Some(parse_depth(&v)?);
        }

        Ok(config)
    }
}

fn parse_depth(value: &str) -> RsODataResult<usize> {
    match value.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(RsODataError::Config(format!(
            "ODATA_MAX_EXPAND_DEPTH must be a positive integer, got '{value}'"
        ))),
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| {
        matches!(v.as_str(), "1" | "true" | "yes" | "TRUE" | "YES")
    })
}
