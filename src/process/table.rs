//! Insertion-ordered process table.

use super::types::{Process, Time};
use crate::error::SimError;

/// The fixed set of processes for one simulation run.
///
/// Processes are stored in input order and carry ids `1..=N`. Results are
/// always reported in this order, regardless of the order in which the
/// processes actually finished.
///
/// # Examples
///
/// ```
/// use u_schedsim::process::ProcessTable;
///
/// let table = ProcessTable::from_params([(0, 5, 1), (1, 3, 0)]).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.by_id(2).unwrap().priority(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Builds a table from `(arrival_time, burst_time, priority)` triples,
    /// assigning ids in supplied order starting at 1.
    ///
    /// Fails if the set is empty or any burst time is zero.
    pub fn from_params<I>(params: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = (Time, Time, i64)>,
    {
        let processes: Vec<Process> = params
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| Process::new(i + 1, arrival, burst, priority))
            .collect();

        if processes.is_empty() {
            return Err(SimError::invalid_input("process set is empty"));
        }
        if let Some(p) = processes.iter().find(|p| p.burst_time() == 0) {
            return Err(SimError::invalid_input(format!(
                "process {} has zero burst time",
                p.id()
            )));
        }

        Ok(Self { processes })
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process at `index` in input order.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Process with the given 1-based id.
    pub fn by_id(&self, id: usize) -> Option<&Process> {
        id.checked_sub(1).and_then(|i| self.processes.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    /// Whether every process has a completion time.
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(Process::is_finished)
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> Time {
        self.processes.iter().map(Process::burst_time).sum()
    }

    /// Latest arrival time in the table.
    pub fn max_arrival(&self) -> Time {
        self.processes
            .iter()
            .map(Process::arrival_time)
            .max()
            .unwrap_or(0)
    }

    /// Largest burst time in the table.
    pub fn max_burst(&self) -> Time {
        self.processes
            .iter()
            .map(Process::burst_time)
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Process {
        &mut self.processes[index]
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
