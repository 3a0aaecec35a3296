//! Process table: the fixed set of process descriptors for one run.
//!
//! A [`Process`] holds its static parameters (arrival, burst, priority) and
//! the two fields the scheduling engine writes: remaining time and
//! completion time. A [`ProcessTable`] owns all processes of a run in input
//! order and validates them once at construction.

mod table;
mod types;

pub use table::ProcessTable;
pub use types::{Process, Time};
