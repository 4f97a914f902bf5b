//! Runs an experiment suite and picks the winning configuration.

use super::config::ExperimentSuite;
use crate::error::Result;
use crate::objective::Score;
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};

/// Outcome of one configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentRun<S: Clone> {
    pub label: String,
    /// The configuration as run, with any suite seed applied.
    pub config: SaConfig,
    pub result: SaResult<S>,
}

/// Outcome of a whole suite.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentReport<S: Clone> {
    /// One run per configuration, in suite order.
    pub runs: Vec<ExperimentRun<S>>,
    /// Index into `runs` of the first run with the greatest best score.
    pub best_index: usize,
}

impl<S: Clone> ExperimentReport<S> {
    /// The winning run.
    pub fn best(&self) -> &ExperimentRun<S> {
        &self.runs[self.best_index]
    }

    /// `(label, best score)` per run, in suite order.
    pub fn scores(&self) -> Vec<(&str, Score)> {
        self.runs
            .iter()
            .map(|r| (r.label.as_str(), r.result.best_score))
            .collect()
    }
}

/// Runs every configuration of a suite in order.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs the suite over `problem`.
    ///
    /// Configurations run sequentially and independently; the problem is
    /// only read.
    #[tracing::instrument(name = "Experiment", skip_all, fields(configs = suite.configs.len()))]
    pub fn run<P: SaProblem>(
        problem: &P,
        suite: &ExperimentSuite,
    ) -> Result<ExperimentReport<P::Solution>> {
        suite.validate()?;

        let mut runs = Vec::with_capacity(suite.configs.len());
        for (k, experiment) in suite.configs.iter().enumerate() {
            let config = suite.resolved(k).unwrap_or_else(|| experiment.sa.clone());
            let result = SaRunner::run(problem, &config)?;
            tracing::info!(
                label = %experiment.label,
                best = %result.best_score,
                iterations = result.iterations(),
                "experiment finished"
            );
            runs.push(ExperimentRun {
                label: experiment.label.clone(),
                config,
                result,
            });
        }

        let scores: Vec<Score> = runs.iter().map(|r| r.result.best_score).collect();
        let best_index = first_max(&scores).unwrap_or(0);
        tracing::info!(
            label = %runs[best_index].label,
            best = %scores[best_index],
            "best configuration"
        );

        Ok(ExperimentReport { runs, best_index })
    }
}

/// Index of the first strictly greatest score.
fn first_max(scores: &[Score]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, score) in scores.iter().enumerate() {
        match best {
            Some(b) if scores[b] >= *score => {}
            _ => best = Some(i),
        }
    }
    best
}
