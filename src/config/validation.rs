//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (heartbeat interval nonzero)
//! - Reject unusable summary destinations
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HarnessConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::HarnessConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `heartbeat.interval_secs` is zero; the loop would spin.
    ZeroHeartbeatInterval,
    /// `summary.file` is set but empty.
    EmptySummaryPath,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ZeroHeartbeatInterval => {
                write!(f, "heartbeat.interval_secs must be at least 1")
            }
            ValidationError::EmptySummaryPath => {
                write!(f, "summary.file must not be empty when set")
            }
        }
    }
}

/// Check a parsed configuration for semantic problems.
pub fn validate_config(config: &HarnessConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.heartbeat.interval_secs == 0 {
        errors.push(ValidationError::ZeroHeartbeatInterval);
    }

    if let Some(path) = &config.summary.file {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptySummaryPath);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
