//! Text rendering of simulation results.

use crate::engine::{SimResult, TraceEvent};
use crate::sweep::SweepResult;
use std::fmt;

/// Renders a [`SimResult`] as a tab-separated table followed by the
/// average turnaround and waiting times.
///
/// # Examples
///
/// ```
/// use u_schedsim::{report::Report, simulate, process::ProcessTable};
///
/// let table = ProcessTable::from_params([(0, 5, 1), (1, 3, 0)]).unwrap();
/// let result = simulate(table, 2).unwrap();
/// let text = Report::new(&result).to_string();
/// assert!(text.contains("Average Waiting Time: 2.00"));
/// ```
pub struct Report<'a> {
    result: &'a SimResult,
    show_trace: bool,
    show_stats: bool,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a SimResult) -> Self {
        Self {
            result,
            show_trace: false,
            show_stats: false,
        }
    }

    /// Appends the dispatch trace (only present if it was recorded).
    pub fn with_trace(mut self, show: bool) -> Self {
        self.show_trace = show;
        self
    }

    /// Appends makespan, dispatch counts and CPU utilization.
    pub fn with_stats(mut self, show: bool) -> Self {
        self.show_stats = show;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PID\tArrival\tBurst\tPriority\tCompletion\tTurnaround\tWaiting"
        )?;
        for m in &self.result.metrics {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t\t{}\t\t{}\t\t{}",
                m.pid,
                m.arrival_time,
                m.burst_time,
                m.priority,
                m.completion_time,
                m.turnaround_time,
                m.waiting_time
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Average Turnaround Time: {:.2}",
            self.result.average_turnaround
        )?;
        writeln!(f, "Average Waiting Time: {:.2}", self.result.average_waiting)?;

        if self.show_stats {
            let stats = &self.result.stats;
            writeln!(f)?;
            writeln!(f, "Makespan: {}", stats.makespan)?;
            writeln!(
                f,
                "Dispatches: {} ({} preemptions)",
                stats.dispatches, stats.preemptions
            )?;
            writeln!(f, "Idle Time: {}", stats.idle_time)?;
            writeln!(
                f,
                "CPU Utilization: {:.1}%",
                stats.cpu_utilization() * 100.0
            )?;
        }

        if self.show_trace && !self.result.trace.is_empty() {
            writeln!(f)?;
            writeln!(f, "Dispatch Trace:")?;
            for event in &self.result.trace {
                writeln!(f, "  {event}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TraceEvent::Run {
                pid,
                start,
                end,
                remaining,
            } => {
                if remaining == 0 {
                    write!(f, "[{start}, {end}) P{pid} done")
                } else {
                    write!(f, "[{start}, {end}) P{pid} ({remaining} left)")
                }
            }
            TraceEvent::Idle { start, end } => write!(f, "[{start}, {end}) idle"),
        }
    }
}

/// Renders a [`SweepResult`] as one row per quantum plus the best quantum
/// by average waiting time.
pub struct SweepReport<'a> {
    result: &'a SweepResult,
}

impl<'a> SweepReport<'a> {
    pub fn new(result: &'a SweepResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for SweepReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Quantum\tAvg Turnaround\tAvg Waiting\tDispatches\tPreemptions"
        )?;
        for p in &self.result.points {
            writeln!(
                f,
                "{}\t{:.2}\t\t{:.2}\t\t{}\t\t{}",
                p.time_quantum,
                p.average_turnaround,
                p.average_waiting,
                p.stats.dispatches,
                p.stats.preemptions
            )?;
        }
        if let Some(best) = self.result.best_by_waiting() {
            writeln!(f)?;
            writeln!(
                f,
                "Best Quantum (waiting): {} ({:.2})",
                best.time_quantum, best.average_waiting
            )?;
        }
        Ok(())
    }
}
