//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the harness.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the signal harness.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HarnessConfig {
    /// Heartbeat loop settings.
    pub heartbeat: HeartbeatConfig,

    /// Run summary destination.
    pub summary: SummaryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Heartbeat loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeartbeatConfig {
    /// Seconds between timestamp lines.
    pub interval_secs: u64,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self { interval_secs: 1 }
    }
}

/// Run summary configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SummaryConfig {
    /// File the summary is appended to. When unset the summary goes to
    /// standard output.
    pub file: Option<PathBuf>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level for diagnostics (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_one_second_stdout_harness() {
        let config = HarnessConfig::default();
        assert_eq!(config.heartbeat.interval_secs, 1);
        assert!(config.summary.file.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: HarnessConfig = toml::from_str("").unwrap();
        assert_eq!(config.heartbeat.interval_secs, 1);
        assert!(config.summary.file.is_none());
    }

    #[test]
    fn full_toml_parses() {
        let config: HarnessConfig = toml::from_str(
            r#"
            [heartbeat]
            interval_secs = 2

            [summary]
            file = "stop.log"

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.heartbeat.interval_secs, 2);
        assert_eq!(config.summary.file.as_deref().unwrap().to_str(), Some("stop.log"));
        assert_eq!(config.observability.log_level, "debug");
    }
}
