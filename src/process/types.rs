//! Process descriptor.

/// Simulation time, in abstract ticks.
pub type Time = u64;

/// One schedulable unit of work.
///
/// The static fields (`id`, `arrival_time`, `burst_time`, `priority`) are
/// fixed at construction. `remaining_time` and `completion_time` are only
/// mutated by the scheduling engine, and only until the process finishes.
///
/// Lower `priority` values are dispatched first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Process {
    id: usize,
    arrival_time: Time,
    burst_time: Time,
    priority: i64,
    remaining_time: Time,
    completion_time: Option<Time>,
}

impl Process {
    /// Creates an unstarted process with `remaining_time == burst_time`.
    pub fn new(id: usize, arrival_time: Time, burst_time: Time, priority: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            completion_time: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Time {
        self.burst_time
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    /// Time at which the process finished, if it has.
    pub fn completion_time(&self) -> Option<Time> {
        self.completion_time
    }

    pub fn is_finished(&self) -> bool {
        self.completion_time.is_some()
    }

    /// `completion - arrival`, once finished.
    pub fn turnaround_time(&self) -> Option<Time> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// `turnaround - burst`, once finished.
    pub fn waiting_time(&self) -> Option<Time> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Runs the process for at most `quantum` ticks and returns the length
    /// of the slice actually executed.
    pub(crate) fn run_slice(&mut self, quantum: Time) -> Time {
        let run = quantum.min(self.remaining_time);
        self.remaining_time -= run;
        run
    }

    /// Records completion. Called exactly once, when `remaining_time` hits 0.
    pub(crate) fn complete(&mut self, at: Time) {
        debug_assert_eq!(self.remaining_time, 0);
        debug_assert!(self.completion_time.is_none(), "process completed twice");
        self.completion_time = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_is_unstarted() {
        let p = Process::new(1, 3, 5, 2);
        assert_eq!(p.remaining_time(), 5);
        assert!(!p.is_finished());
        assert_eq!(p.turnaround_time(), None);
        assert_eq!(p.waiting_time(), None);
    }

    #[test]
    fn test_run_slice_is_bounded_by_remaining() {
        let mut p = Process::new(1, 0, 3, 0);
        assert_eq!(p.run_slice(2), 2);
        assert_eq!(p.remaining_time(), 1);
        assert_eq!(p.run_slice(2), 1);
        assert_eq!(p.remaining_time(), 0);
    }

    #[test]
    fn test_derived_times() {
        let mut p = Process::new(1, 2, 4, 0);
        p.run_slice(4);
        p.complete(9);
        assert_eq!(p.completion_time(), Some(9));
        assert_eq!(p.turnaround_time(), Some(7));
        assert_eq!(p.waiting_time(), Some(3));
    }
}
