//! Error types for boundary validation.
//!
//! The simulation loop itself never fails. Everything that can go wrong is
//! caught once, where input enters the crate: table construction,
//! [`SimConfig::validate`](crate::engine::SimConfig::validate), scenario
//! parsing and workload/sweep configuration.

use thiserror::Error;

/// Errors reported at the input boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The process set or one of its values is unusable.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A configuration parameter is out of range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl SimError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SimError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        SimError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
