//! Judge configuration
//!
//! Read from an optional TOML file; command-line flags override it.
//!
//! ```toml
//! lenient_fallback = false
//!
//! [sandbox]
//! endpoint = "http://localhost:2358/submissions"
//! api_key = "secret"
//! timeout_secs = 30
//! max_concurrency = 4
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{JudgeError, JudgeResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SandboxConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Sent as a bearer token when present
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Submissions in flight at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:2358/submissions".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_concurrency() -> usize {
    4
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JudgeConfig {
    #[serde(default)]
    pub sandbox: SandboxConfig,

    /// Fall back to the integer binding for missing scalar bindings
    #[serde(default)]
    pub lenient_fallback: bool,
}

impl JudgeConfig {
    pub fn parse(text: &str) -> JudgeResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| JudgeError::Config(e.to_string()))?;
        if config.sandbox.max_concurrency == 0 {
            return Err(JudgeError::Config("max_concurrency must be at least 1".to_string()));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> JudgeResult<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = JudgeConfig::parse("").unwrap();
        assert_eq!(config, JudgeConfig::default());
        assert_eq!(config.sandbox.timeout_secs, 30);
        assert_eq!(config.sandbox.max_concurrency, 4);
        assert!(!config.lenient_fallback);
    }

    #[test]
    fn test_partial_file() {
        let config = JudgeConfig::parse(
            "lenient_fallback = true\n[sandbox]\nendpoint = \"http://sandbox/run\"\nmax_concurrency = 8\n",
        )
        .unwrap();
        assert!(config.lenient_fallback);
        assert_eq!(config.sandbox.endpoint, "http://sandbox/run");
        assert_eq!(config.sandbox.max_concurrency, 8);
        assert_eq!(config.sandbox.timeout_secs, 30);
        assert_eq!(config.sandbox.api_key, None);
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let err = JudgeConfig::parse("[sandbox]\nmax_concurrency = 0\n").unwrap_err();
        assert!(matches!(err, JudgeError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(matches!(JudgeConfig::parse("sandbox = 3"), Err(JudgeError::Config(_))));
    }
}
