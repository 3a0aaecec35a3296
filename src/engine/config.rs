//! Simulation configuration.

use crate::error::SimError;
use crate::process::Time;

/// Configuration for one simulation run.
///
/// # Examples
///
/// ```
/// use u_schedsim::engine::SimConfig;
///
/// let config = SimConfig::new(4).with_trace(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Maximum CPU time granted per dispatch. Must be positive.
    pub time_quantum: Time,

    /// Whether to record every slice and idle period in the result.
    pub record_trace: bool,
}

impl SimConfig {
    /// Creates a configuration with the given time quantum and tracing off.
    pub fn new(time_quantum: Time) -> Self {
        Self {
            time_quantum,
            record_trace: false,
        }
    }

    pub fn with_time_quantum(mut self, quantum: Time) -> Self {
        self.time_quantum = quantum;
        self
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.time_quantum == 0 {
            return Err(SimError::invalid_config("time_quantum must be positive"));
        }
        Ok(())
    }
}
