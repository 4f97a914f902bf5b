//! Multi-configuration experiments.
//!
//! Runs the annealing controller once per configuration of an
//! [`ExperimentSuite`] and reports every run along with the first one
//! reaching the greatest best score.

mod config;
mod runner;

pub use config::{ExperimentConfig, ExperimentSuite};
pub use runner::{ExperimentReport, ExperimentRun, ExperimentRunner};
