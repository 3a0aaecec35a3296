//! Discrete-event simulator for priority round-robin CPU scheduling.
//!
//! Processes are admitted by arrival time and static priority, then share
//! the CPU in fixed time quanta. Before every dispatch the ready queue is
//! re-sorted by priority, so a newly arrived urgent process overtakes queued
//! work at the next slice boundary.
//!
//! - **Process table** ([`process`]): fixed, insertion-ordered set of
//!   process descriptors for one run.
//! - **Engine** ([`engine`]): the simulation loop producing completion,
//!   turnaround and waiting times, averages, run statistics and an optional
//!   dispatch trace.
//! - **Input / report** ([`input`], [`report`]): scenario parsing and
//!   tabular rendering.
//! - **Sweeps** ([`sweep`]): one table under many quanta, optionally in
//!   parallel.
//! - **Workloads** ([`workload`]): seeded random process tables.
//!
//! # Example
//!
//! ```
//! use u_schedsim::{process::ProcessTable, simulate};
//!
//! let table = ProcessTable::from_params([(0, 5, 1), (1, 3, 0)]).unwrap();
//! let result = simulate(table, 2).unwrap();
//!
//! assert_eq!(result.metrics[0].turnaround_time, 8);
//! assert_eq!(result.metrics[1].waiting_time, 1);
//! assert!((result.average_waiting - 2.0).abs() < 1e-10);
//! ```

pub mod engine;
pub mod error;
pub mod input;
pub mod process;
pub mod report;
pub mod sweep;
pub mod workload;

pub use engine::{SimConfig, SimResult, Simulator};
pub use error::SimError;
pub use process::{Process, ProcessTable, Time};

/// Runs `table` to completion with the given time quantum.
///
/// Fails only if `time_quantum` is zero; the table was validated when it
/// was built.
pub fn simulate(table: ProcessTable, time_quantum: Time) -> Result<SimResult, SimError> {
    Simulator::run(table, &SimConfig::new(time_quantum))
}
