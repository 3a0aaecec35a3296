//! Command-line front end: reads a scenario, simulates it and prints the
//! results table.

use clap::Parser;
use log::info;
use std::error::Error;
use std::io;
use std::path::PathBuf;

use u_schedsim::input::parse;
use u_schedsim::report::{Report, SweepReport};
use u_schedsim::sweep::{run_sweep, SweepConfig, MAX_SWEEP_QUANTA};
use u_schedsim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "u-schedsim",
    version,
    about = "Priority round-robin CPU scheduling simulator",
    long_about = "Reads `count quantum` followed by `count` triples of \
                  `arrival burst priority` (whitespace separated) and prints \
                  completion, turnaround and waiting times."
)]
struct Cli {
    /// Scenario file. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// Override the scenario's time quantum.
    #[arg(short, long)]
    quantum: Option<u64>,

    /// Print the dispatch trace.
    #[arg(short, long)]
    trace: bool,

    /// Print makespan, dispatch counts and CPU utilization.
    #[arg(short, long)]
    stats: bool,

    /// Compare quanta 1..=N instead of a single run.
    #[arg(
        long,
        value_name = "N",
        conflicts_with_all = ["quantum", "trace", "stats"],
        value_parser = clap::value_parser!(u64).range(1..=MAX_SWEEP_QUANTA as u64)
    )]
    sweep: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };

    let mut scenario = parse(&text)?;
    info!(
        "loaded {} processes, time quantum {}",
        scenario.table.len(),
        scenario.time_quantum
    );

    if let Some(max) = cli.sweep {
        let sweep = run_sweep(&scenario.table, &SweepConfig::up_to(max)?)?;
        print!("{}", SweepReport::new(&sweep));
        return Ok(());
    }

    if let Some(quantum) = cli.quantum {
        scenario.time_quantum = quantum;
    }
    let config = scenario.config().with_trace(cli.trace);
    let result = Simulator::run(scenario.table, &config)?;

    print!(
        "{}",
        Report::new(&result)
            .with_trace(cli.trace)
            .with_stats(cli.stats)
    );
    Ok(())
}
