//! Scenario parsing.
//!
//! A scenario is a whitespace-separated stream of integers:
//!
//! ```text
//! <count> <time_quantum>
//! <arrival> <burst> <priority>    # repeated <count> times
//! ```
//!
//! Line breaks carry no meaning. Process ids are assigned `1..=count` in
//! the order the triples appear. All validation happens here, so a parsed
//! [`Scenario`] always runs.

use crate::engine::SimConfig;
use crate::error::SimError;
use crate::process::{ProcessTable, Time};
use std::str::SplitWhitespace;

/// A validated process table together with its time quantum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub time_quantum: Time,
    pub table: ProcessTable,
}

impl Scenario {
    /// Simulation config for this scenario's quantum.
    pub fn config(&self) -> SimConfig {
        SimConfig::new(self.time_quantum)
    }
}

/// Parses and validates a scenario.
///
/// # Examples
///
/// ```
/// use u_schedsim::input::parse;
///
/// let scenario = parse("2 2\n0 5 1\n1 3 0\n").unwrap();
/// assert_eq!(scenario.time_quantum, 2);
/// assert_eq!(scenario.table.len(), 2);
/// ```
pub fn parse(text: &str) -> Result<Scenario, SimError> {
    let mut tokens = Tokens {
        inner: text.split_whitespace(),
    };

    let count = tokens.next_non_negative("process count")?;
    if count == 0 {
        return Err(SimError::invalid_input("process count must be at least 1"));
    }
    let time_quantum = tokens.next_non_negative("time quantum")?;
    if time_quantum == 0 {
        return Err(SimError::invalid_config("time quantum must be positive"));
    }

    let mut params = Vec::new();
    for pid in 1..=count {
        let arrival = tokens.next_non_negative(&format!("arrival time of process {pid}"))?;
        let burst = tokens.next_non_negative(&format!("burst time of process {pid}"))?;
        let priority = tokens.next_int(&format!("priority of process {pid}"))?;
        params.push((arrival, burst, priority));
    }

    if let Some(extra) = tokens.inner.next() {
        return Err(SimError::invalid_input(format!(
            "unexpected value '{extra}' after {count} processes"
        )));
    }

    let table = ProcessTable::from_params(params)?;
    Ok(Scenario {
        time_quantum,
        table,
    })
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl Tokens<'_> {
    fn next_int(&mut self, what: &str) -> Result<i64, SimError> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| SimError::invalid_input(format!("missing {what}")))?;
        token.parse().map_err(|_| {
            SimError::invalid_input(format!("{what}: expected an integer, got '{token}'"))
        })
    }

    fn next_non_negative(&mut self, what: &str) -> Result<u64, SimError> {
        let value = self.next_int(what)?;
        u64::try_from(value).map_err(|_| {
            SimError::invalid_input(format!("{what} must be non-negative, got {value}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario() {
        let scenario = parse("3 4\n0 5 1\n2 3 -1\n2 1 0").unwrap();
        assert_eq!(scenario.time_quantum, 4);
        assert_eq!(scenario.config(), SimConfig::new(4));
        let p2 = scenario.table.by_id(2).unwrap();
        assert_eq!(p2.arrival_time(), 2);
        assert_eq!(p2.burst_time(), 3);
        assert_eq!(p2.priority(), -1);
    }

    #[test]
    fn test_line_breaks_are_irrelevant() {
        let a = parse("2 2 0 5 1 1 3 0").unwrap();
        let b = parse("2\n2\n0 5\n1\n1 3 0\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_values() {
        let err = parse("2 2\n0 5 1\n1 3").unwrap_err();
        assert_eq!(err, SimError::invalid_input("missing priority of process 2"));
    }

    #[test]
    fn test_non_integer() {
        let err = parse("1 2\n0 x 1").unwrap_err();
        assert_eq!(
            err,
            SimError::invalid_input("burst time of process 1: expected an integer, got 'x'")
        );
    }

    #[test]
    fn test_negative_arrival() {
        let err = parse("1 2\n-1 3 0").unwrap_err();
        assert_eq!(
            err,
            SimError::invalid_input("arrival time of process 1 must be non-negative, got -1")
        );
    }

    #[test]
    fn test_zero_count_and_zero_quantum() {
        assert!(matches!(parse("0 2"), Err(SimError::InvalidInput { .. })));
        assert!(matches!(parse("1 0\n0 1 0"), Err(SimError::InvalidConfig { .. })));
        assert!(matches!(parse(""), Err(SimError::InvalidInput { .. })));
    }

    #[test]
    fn test_zero_burst() {
        assert!(matches!(parse("1 1\n0 0 0"), Err(SimError::InvalidInput { .. })));
    }

    #[test]
    fn test_trailing_values_rejected() {
        let err = parse("1 1\n0 1 0 7").unwrap_err();
        assert_eq!(
            err,
            SimError::invalid_input("unexpected value '7' after 1 processes")
        );
    }
}
