//! Runtime configuration
//!
//! Format constants live in [`crate::constants`]. What remains configurable is
//! how a bare payload (no `prefix:` part) is treated, plus the harness's
//! output and log settings.

use serde::{Deserialize, Serialize};
use std::env;

/// Options for [`crate::decode_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Prefix assumed when the address has no `:` separator.
    /// `None` makes a missing separator an error.
    #[serde(default)]
    pub default_prefix: Option<String>,
}

impl DecodeOptions {
    /// Reject addresses without a separator
    pub fn strict() -> Self {
        Self::default()
    }

    /// Assume `prefix` for addresses without a separator
    pub fn with_default_prefix(prefix: impl Into<String>) -> Self {
        Self {
            default_prefix: Some(prefix.into()),
        }
    }
}

/// Harness settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Prefix assumed for bare payloads
    pub default_prefix: Option<String>,

    /// Print the report as JSON instead of text
    pub json_output: bool,

    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            default_prefix: None,
            json_output: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // CASHADDR_DEFAULT_PREFIX
        if let Some(val) = lookup("CASHADDR_DEFAULT_PREFIX") {
            let val = val.trim();
            if !val.is_empty() {
                config.default_prefix = Some(val.to_string());
            }
        }

        // CASHADDR_JSON
        if let Some(val) = lookup("CASHADDR_JSON") {
            let val = val.trim();
            config.json_output = val.eq_ignore_ascii_case("true") || val == "1";
        }

        // CASHADDR_LOG, falling back to RUST_LOG
        if let Some(val) = lookup("CASHADDR_LOG").or_else(|| lookup("RUST_LOG")) {
            if !val.trim().is_empty() {
                config.log_filter = val.trim().to_string();
            }
        }

        config
    }

    /// Decode options implied by this configuration
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            default_prefix: self.default_prefix.clone(),
        }
    }
}
