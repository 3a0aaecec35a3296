//! Simulation loop execution.
//!
//! [`Simulator`] drives one run to completion:
//! admission → re-prioritization → dispatch (or skip an idle gap) → repeat.

use super::config::SimConfig;
use super::queue::{admission_order, ReadyQueue};
use crate::error::SimError;
use crate::process::{Process, ProcessTable, Time};
use log::{debug, trace};

/// Final timing figures for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProcessMetrics {
    pub pid: usize,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub priority: i64,
    pub completion_time: Time,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Time,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Time,
}

impl ProcessMetrics {
    /// Metrics of a finished process; `None` while it is still running.
    pub fn of(process: &Process) -> Option<Self> {
        let completion_time = process.completion_time()?;
        let turnaround_time = completion_time - process.arrival_time();
        Some(Self {
            pid: process.id(),
            arrival_time: process.arrival_time(),
            burst_time: process.burst_time(),
            priority: process.priority(),
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time(),
        })
    }
}

/// One entry of the dispatch trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TraceEvent {
    /// Process `pid` ran on `[start, end)` and has `remaining` ticks left.
    Run {
        pid: usize,
        start: Time,
        end: Time,
        remaining: Time,
    },

    /// The CPU was idle on `[start, end)`, up to the next arrival.
    Idle { start: Time, end: Time },
}

/// Aggregate counters of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunStats {
    /// Time at which the last process completed.
    pub makespan: Time,

    /// Number of slices executed.
    pub dispatches: usize,

    /// Slices that ended with the process still unfinished.
    pub preemptions: usize,

    /// Ticks during which no process was ready.
    pub idle_time: Time,
}

impl RunStats {
    /// Fraction of the makespan the CPU spent running processes.
    pub fn cpu_utilization(&self) -> f64 {
        if self.makespan == 0 {
            return 0.0;
        }
        (self.makespan - self.idle_time) as f64 / self.makespan as f64
    }
}

/// Result of a simulation run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimResult {
    /// The table after the run; every process carries its completion time.
    pub table: ProcessTable,

    /// Per-process metrics in input order.
    pub metrics: Vec<ProcessMetrics>,

    /// Arithmetic mean of turnaround times.
    pub average_turnaround: f64,

    /// Arithmetic mean of waiting times.
    pub average_waiting: f64,

    pub stats: RunStats,

    /// Slices and idle periods in execution order. Empty unless
    /// [`SimConfig::record_trace`] was set.
    pub trace: Vec<TraceEvent>,
}

impl SimResult {
    /// Metrics for the process with the given id.
    pub fn metrics_for(&self, pid: usize) -> Option<&ProcessMetrics> {
        pid.checked_sub(1).and_then(|i| self.metrics.get(i))
    }

    pub fn total_turnaround(&self) -> Time {
        self.metrics.iter().map(|m| m.turnaround_time).sum()
    }

    pub fn total_waiting(&self) -> Time {
        self.metrics.iter().map(|m| m.waiting_time).sum()
    }
}

/// Executes the priority round-robin simulation.
pub struct Simulator;

impl Simulator {
    /// Validates `config` and runs `table` to completion.
    ///
    /// The table is consumed: one run owns its processes exclusively, and
    /// the updated table is handed back inside the result.
    pub fn run(table: ProcessTable, config: &SimConfig) -> Result<SimResult, SimError> {
        config.validate()?;
        Ok(RunContext::new(table, config).run())
    }
}

/// Mutable state of a single run.
struct RunContext {
    table: ProcessTable,
    quantum: Time,
    admission: Vec<usize>,
    cursor: usize,
    ready: ReadyQueue,
    current_time: Time,
    stats: RunStats,
    trace: Option<Vec<TraceEvent>>,
}

impl RunContext {
    fn new(table: ProcessTable, config: &SimConfig) -> Self {
        let admission = admission_order(table.as_slice());
        let ready = ReadyQueue::with_capacity(table.len());
        Self {
            table,
            quantum: config.time_quantum,
            admission,
            cursor: 0,
            ready,
            current_time: 0,
            stats: RunStats::default(),
            trace: config.record_trace.then(Vec::new),
        }
    }

    fn run(mut self) -> SimResult {
        debug!(
            "simulating {} processes with time quantum {}",
            self.table.len(),
            self.quantum
        );

        while self.cursor < self.admission.len() || !self.ready.is_empty() {
            self.admit();
            self.ready.reprioritize(self.table.as_slice());
            match self.ready.pop_front() {
                Some(index) => self.dispatch(index),
                None => self.idle_until_next_arrival(),
            }
        }

        self.finish()
    }

    /// Moves every process that has arrived by now into the ready queue.
    fn admit(&mut self) {
        while let Some(&index) = self.admission.get(self.cursor) {
            let process = &self.table.as_slice()[index];
            if process.arrival_time() > self.current_time {
                break;
            }
            trace!(
                "t={}: admit process {} (priority {})",
                self.current_time,
                process.id(),
                process.priority()
            );
            self.ready.push_back(index);
            self.cursor += 1;
        }
    }

    fn dispatch(&mut self, index: usize) {
        let start = self.current_time;
        let quantum = self.quantum;
        let process = self.table.get_mut(index);
        let pid = process.id();
        let run = process.run_slice(quantum);
        let end = start + run;
        let remaining = process.remaining_time();

        if remaining == 0 {
            process.complete(end);
            trace!("t={end}: process {pid} completed");
        } else {
            self.ready.push_back(index);
            self.stats.preemptions += 1;
            trace!(
                "t={end}: process {pid} preempted with {remaining} left, {} ready",
                self.ready.len()
            );
        }

        self.current_time = end;
        self.stats.dispatches += 1;
        if let Some(trace) = self.trace.as_mut() {
            trace.push(TraceEvent::Run {
                pid,
                start,
                end,
                remaining,
            });
        }
    }

    /// Advances the clock to the next pending arrival. Equivalent to
    /// repeating one-tick idle steps until that process is admitted.
    fn idle_until_next_arrival(&mut self) {
        let start = self.current_time;
        let end = self
            .admission
            .get(self.cursor)
            .map(|&i| self.table.as_slice()[i].arrival_time())
            .map_or(start + 1, |arrival| arrival.max(start + 1));

        trace!("t={start}: cpu idle until t={end}");
        self.current_time = end;
        self.stats.idle_time += end - start;

        if let Some(trace) = self.trace.as_mut() {
            trace.push(TraceEvent::Idle { start, end });
        }
    }

    fn finish(mut self) -> SimResult {
        debug_assert!(self.table.all_finished());
        self.stats.makespan = self.current_time;

        let metrics: Vec<ProcessMetrics> =
            self.table.iter().filter_map(ProcessMetrics::of).collect();
        let n = metrics.len().max(1) as f64;
        let average_turnaround =
            metrics.iter().map(|m| m.turnaround_time as f64).sum::<f64>() / n;
        let average_waiting = metrics.iter().map(|m| m.waiting_time as f64).sum::<f64>() / n;

        debug!(
            "simulation finished at t={} after {} dispatches ({} preemptions, {} idle ticks)",
            self.stats.makespan, self.stats.dispatches, self.stats.preemptions, self.stats.idle_time
        );

        SimResult {
            table: self.table,
            metrics,
            average_turnaround,
            average_waiting,
            stats: self.stats,
            trace: self.trace.unwrap_or_default(),
        }
    }
}
