//! Seeded synthetic workloads.
//!
//! Generates random process tables for benchmarks, sweeps and property
//! checks. With a fixed seed the same table is produced every time.

use crate::error::SimError;
use crate::process::{ProcessTable, Time};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters of a synthetic workload.
///
/// # Examples
///
/// ```
/// use u_schedsim::workload::{generate, WorkloadConfig};
///
/// let config = WorkloadConfig::new(20)
///     .with_max_arrival(50)
///     .with_burst_range(1, 12)
///     .with_priority_range(0, 4)
///     .with_seed(42);
/// let table = generate(&config).unwrap();
/// assert_eq!(table.len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,

    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: Time,

    /// Inclusive burst time range. `min_burst` must be at least 1.
    pub min_burst: Time,
    pub max_burst: Time,

    /// Inclusive priority range.
    pub min_priority: i64,
    pub max_priority: i64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl WorkloadConfig {
    /// Creates a configuration for `count` processes with modest defaults.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            min_priority: 0,
            max_priority: 4,
            seed: None,
        }
    }

    pub fn with_max_arrival(mut self, t: Time) -> Self {
        self.max_arrival = t;
        self
    }

    pub fn with_burst_range(mut self, min: Time, max: Time) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    pub fn with_priority_range(mut self, min: i64, max: i64) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.count == 0 {
            return Err(SimError::invalid_config("count must be at least 1"));
        }
        if self.min_burst == 0 {
            return Err(SimError::invalid_config("min_burst must be at least 1"));
        }
        if self.min_burst > self.max_burst {
            return Err(SimError::invalid_config(format!(
                "min_burst ({}) must be <= max_burst ({})",
                self.min_burst, self.max_burst
            )));
        }
        if self.min_priority > self.max_priority {
            return Err(SimError::invalid_config(format!(
                "min_priority ({}) must be <= max_priority ({})",
                self.min_priority, self.max_priority
            )));
        }
        Ok(())
    }
}

/// Draws a random process table.
pub fn generate(config: &WorkloadConfig) -> Result<ProcessTable, SimError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let params: Vec<(Time, Time, i64)> = (0..config.count)
        .map(|_| {
            (
                rng.random_range(0..=config.max_arrival),
                rng.random_range(config.min_burst..=config.max_burst),
                rng.random_range(config.min_priority..=config.max_priority),
            )
        })
        .collect();

    ProcessTable::from_params(params)
}
