//! Time quantum sweeps.
//!
//! Runs one process table under several time quanta and collects the
//! averages of each run. Every run works on its own clone of the table, so
//! with the `parallel` feature the runs are spread across rayon's pool.

use crate::engine::{RunStats, SimConfig, SimResult, Simulator};
use crate::error::SimError;
use crate::process::{ProcessTable, Time};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Largest number of quanta a single sweep accepts.
pub const MAX_SWEEP_QUANTA: usize = 10_000;

/// Configuration of a quantum sweep.
///
/// # Examples
///
/// ```
/// use u_schedsim::sweep::SweepConfig;
///
/// let config = SweepConfig::new(vec![1, 2, 4, 8]).with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Quanta to evaluate, in reporting order.
    pub quanta: Vec<Time>,

    /// Whether to run the quanta in parallel using rayon. Ignored unless
    /// the `parallel` feature is enabled.
    pub parallel: bool,
}

impl SweepConfig {
    pub fn new(quanta: Vec<Time>) -> Self {
        Self {
            quanta,
            parallel: true,
        }
    }

    /// Quanta `1..=max`, capped at [`MAX_SWEEP_QUANTA`] entries.
    pub fn up_to(max: Time) -> Result<Self, SimError> {
        if max > MAX_SWEEP_QUANTA as Time {
            return Err(SimError::invalid_config(format!(
                "sweep limit {max} exceeds {MAX_SWEEP_QUANTA} quanta"
            )));
        }
        Ok(Self::new((1..=max).collect()))
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.quanta.is_empty() {
            return Err(SimError::invalid_config("sweep needs at least one quantum"));
        }
        if self.quanta.len() > MAX_SWEEP_QUANTA {
            return Err(SimError::invalid_config(format!(
                "sweep has {} quanta, at most {MAX_SWEEP_QUANTA} allowed",
                self.quanta.len()
            )));
        }
        if self.quanta.contains(&0) {
            return Err(SimError::invalid_config("time quanta must be positive"));
        }
        Ok(())
    }
}

/// Outcome of one quantum in a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepPoint {
    pub time_quantum: Time,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    pub stats: RunStats,
}

impl SweepPoint {
    fn from_result(time_quantum: Time, result: &SimResult) -> Self {
        Self {
            time_quantum,
            average_turnaround: result.average_turnaround,
            average_waiting: result.average_waiting,
            stats: result.stats,
        }
    }
}

/// Result of a sweep, one point per configured quantum in the same order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult {
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Point with the lowest average waiting time. Ties go to the earlier
    /// point.
    pub fn best_by_waiting(&self) -> Option<&SweepPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.average_waiting.total_cmp(&b.average_waiting))
    }

    /// Point with the lowest average turnaround time. Ties go to the
    /// earlier point.
    pub fn best_by_turnaround(&self) -> Option<&SweepPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.average_turnaround.total_cmp(&b.average_turnaround))
    }
}

/// Runs `table` once per configured quantum.
pub fn run_sweep(table: &ProcessTable, config: &SweepConfig) -> Result<SweepResult, SimError> {
    config.validate()?;
    debug!(
        "sweeping {} quanta over {} processes",
        config.quanta.len(),
        table.len()
    );

    let run_one = |&quantum: &Time| -> Result<SweepPoint, SimError> {
        let result = Simulator::run(table.clone(), &SimConfig::new(quantum))?;
        Ok(SweepPoint::from_result(quantum, &result))
    };

    #[cfg(feature = "parallel")]
    let points = if config.parallel {
        config
            .quanta
            .par_iter()
            .map(run_one)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        config
            .quanta
            .iter()
            .map(run_one)
            .collect::<Result<Vec<_>, _>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let points = config
        .quanta
        .iter()
        .map(run_one)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SweepResult { points })
}
