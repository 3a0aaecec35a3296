//! Priority round-robin scheduling engine.
//!
//! Processes are admitted in `(arrival_time, priority)` order as simulated
//! time reaches their arrival. Before every dispatch the ready queue is
//! stably re-sorted by priority, the head runs for at most one time
//! quantum, and an unfinished process goes back to the tail of the queue.
//! When nothing is ready the clock jumps to the next pending arrival.
//!
//! A newly arrived higher-priority process therefore overtakes queued
//! lower-priority work between slices, but never interrupts a slice.
//!
//! # Termination
//!
//! Every dispatch consumes at least one tick of remaining work and idle
//! ticks only occur while some process has not arrived yet, so a run takes
//! `O(total_burst / quantum + max_arrival)` iterations.

mod config;
mod queue;
mod runner;

pub use config::SimConfig;
pub use runner::{ProcessMetrics, RunStats, SimResult, Simulator, TraceEvent};
