//! Admission ordering and the ready queue.

use crate::process::Process;
use std::collections::VecDeque;

/// Table indices stably sorted by `(arrival_time, priority)`.
///
/// Processes with identical keys keep their input order.
pub(crate) fn admission_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| (processes[i].arrival_time(), processes[i].priority()));
    order
}

/// Admitted, unfinished processes awaiting dispatch, as table indices.
///
/// A process appears at most once at any moment.
#[derive(Debug, Default)]
pub(crate) struct ReadyQueue {
    entries: VecDeque<usize>,
}

impl ReadyQueue {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub(crate) fn push_back(&mut self, index: usize) {
        debug_assert!(!self.entries.contains(&index), "process queued twice");
        self.entries.push_back(index);
    }

    pub(crate) fn pop_front(&mut self) -> Option<usize> {
        self.entries.pop_front()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Stable sort by ascending priority. Equal priorities keep their
    /// current relative order, so a requeued process stays ahead of an
    /// equal-priority process admitted after it.
    pub(crate) fn reprioritize(&mut self, processes: &[Process]) {
        self.entries
            .make_contiguous()
            .sort_by_key(|&i| processes[i].priority());
    }

    #[cfg(test)]
    fn indices(&self) -> Vec<usize> {
        self.entries.iter().copied().collect()
    }
}
