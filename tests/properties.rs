//! Property checks of the simulation over random process tables.

use proptest::prelude::*;
use u_schedsim::engine::{SimConfig, SimResult, Simulator, TraceEvent};
use u_schedsim::process::{ProcessTable, Time};

fn params_strategy() -> impl Strategy<Value = Vec<(Time, Time, i64)>> {
    prop::collection::vec((0u64..30, 1u64..15, -3i64..4), 1..25)
}

fn run(params: &[(Time, Time, i64)], quantum: Time) -> SimResult {
    let table = ProcessTable::from_params(params.iter().copied()).unwrap();
    Simulator::run(table, &SimConfig::new(quantum).with_trace(true)).unwrap()
}

/// Non-preemptive priority scheduling: among arrived processes pick the
/// lowest priority value, then the earliest arrival, then input order.
fn non_preemptive_completions(params: &[(Time, Time, i64)]) -> Vec<Time> {
    let mut completion: Vec<Option<Time>> = vec![None; params.len()];
    let mut t = 0;
    while completion.iter().any(Option::is_none) {
        let next = (0..params.len())
            .filter(|&i| completion[i].is_none() && params[i].0 <= t)
            .min_by_key(|&i| (params[i].2, params[i].0, i));
        match next {
            Some(i) => {
                t += params[i].1;
                completion[i] = Some(t);
            }
            None => {
                t = (0..params.len())
                    .filter(|&i| completion[i].is_none())
                    .map(|i| params[i].0)
                    .min()
                    .unwrap();
            }
        }
    }
    completion.into_iter().map(Option::unwrap).collect()
}

proptest! {
    #[test]
    fn every_process_finishes_with_consistent_metrics(
        params in params_strategy(),
        quantum in 1u64..10,
    ) {
        let result = run(&params, quantum);

        prop_assert!(result.table.all_finished());
        prop_assert_eq!(result.metrics.len(), params.len());
        for (i, (p, m)) in result.table.iter().zip(&result.metrics).enumerate() {
            prop_assert_eq!(p.id(), i + 1);
            prop_assert_eq!(m.pid, i + 1);
            prop_assert_eq!(p.remaining_time(), 0);
            prop_assert_eq!(p.completion_time(), Some(m.completion_time));
            prop_assert!(m.completion_time >= m.arrival_time + m.burst_time);
            prop_assert_eq!(m.turnaround_time, m.completion_time - m.arrival_time);
            prop_assert_eq!(m.waiting_time, m.turnaround_time - m.burst_time);
        }
    }

    #[test]
    fn turnaround_sum_identity(params in params_strategy(), quantum in 1u64..10) {
        let result = run(&params, quantum);
        let lhs: Time = result
            .metrics
            .iter()
            .map(|m| m.completion_time - m.arrival_time)
            .sum();
        let rhs: Time = result
            .metrics
            .iter()
            .map(|m| m.waiting_time + m.burst_time)
            .sum();
        prop_assert_eq!(lhs, rhs);
        prop_assert_eq!(result.total_turnaround(), lhs);

        let n = params.len() as f64;
        prop_assert!((result.average_turnaround - lhs as f64 / n).abs() < 1e-9);
        prop_assert!(
            (result.average_waiting - result.total_waiting() as f64 / n).abs() < 1e-9
        );
    }

    #[test]
    fn large_quantum_matches_non_preemptive_priority(params in params_strategy()) {
        let quantum = params.iter().map(|p| p.1).max().unwrap();
        let result = run(&params, quantum);
        let completions: Vec<Time> = result.metrics.iter().map(|m| m.completion_time).collect();
        prop_assert_eq!(completions, non_preemptive_completions(&params));
        prop_assert_eq!(result.stats.preemptions, 0);
    }

    #[test]
    fn single_process_never_waits(
        arrival in 0u64..100,
        burst in 1u64..50,
        priority in -5i64..5,
        quantum in 1u64..10,
    ) {
        let result = run(&[(arrival, burst, priority)], quantum);
        let m = result.metrics[0];
        prop_assert_eq!(m.completion_time, arrival + burst);
        prop_assert_eq!(m.waiting_time, 0);
    }

    #[test]
    fn run_stats_account_for_all_time(params in params_strategy(), quantum in 1u64..10) {
        let result = run(&params, quantum);
        let stats = result.stats;

        let expected_dispatches: usize = params
            .iter()
            .map(|p| p.1.div_ceil(quantum) as usize)
            .sum();
        prop_assert_eq!(stats.dispatches, expected_dispatches);
        prop_assert_eq!(stats.preemptions, expected_dispatches - params.len());

        let total_burst: Time = params.iter().map(|p| p.1).sum();
        prop_assert_eq!(stats.makespan, total_burst + stats.idle_time);
        prop_assert_eq!(
            stats.makespan,
            result.metrics.iter().map(|m| m.completion_time).max().unwrap()
        );
    }

    #[test]
    fn trace_covers_timeline_without_gaps(params in params_strategy(), quantum in 1u64..10) {
        let result = run(&params, quantum);

        let mut clock = 0;
        for event in &result.trace {
            let (start, end) = match *event {
                TraceEvent::Run { start, end, .. } => {
                    prop_assert!(end - start <= quantum);
                    (start, end)
                }
                TraceEvent::Idle { start, end } => (start, end),
            };
            prop_assert_eq!(start, clock);
            prop_assert!(end > start);
            clock = end;
        }
        prop_assert_eq!(clock, result.stats.makespan);
    }

    #[test]
    fn runs_are_deterministic(params in params_strategy(), quantum in 1u64..10) {
        let a = run(&params, quantum);
        let b = run(&params, quantum);
        prop_assert_eq!(a.metrics, b.metrics);
        prop_assert_eq!(a.trace, b.trace);
    }
}
