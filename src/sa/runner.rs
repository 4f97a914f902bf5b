//! SA execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use super::types::{RunHistory, SaProblem, Step};
use crate::error::Result;
use crate::objective::Score;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Temperature reached the final temperature.
    Frozen,
    /// The iteration budget was spent.
    IterationLimit,
    /// Every random start was infeasible. The result is the fallback
    /// solution with score zero.
    NoFeasibleStart,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Score of the best solution.
    pub best_score: Score,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Random starts drawn before a feasible one was found (or all of
    /// them, on failure).
    pub seed_attempts: usize,

    /// Why the run ended.
    pub stop_reason: StopReason,

    /// Per-iteration log and counters.
    pub history: RunHistory,
}

impl<S: Clone> SaResult<S> {
    /// Iterations executed.
    pub fn iterations(&self) -> usize {
        self.history.iterations
    }

    /// Whether the run found a feasible start.
    pub fn found_feasible_start(&self) -> bool {
        self.stop_reason != StopReason::NoFeasibleStart
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with an RNG seeded from `config.seed`, or from a fresh
    /// random seed when unset.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing every random decision from `rng`.
    ///
    /// Two runs over the same problem and configuration with identically
    /// seeded generators produce identical results.
    #[tracing::instrument(
        level = "debug",
        name = "SA Run",
        skip_all,
        fields(t0 = config.initial_temperature, alpha = config.alpha, max_iter = config.max_iterations)
    )]
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        // Feasible start
        let mut current = problem.initial_solution(rng);
        let mut current_score = problem.score(&current);
        let mut seed_attempts = 1usize;
        while !current_score.is_feasible() && seed_attempts <= config.max_seed_attempts {
            current = problem.initial_solution(rng);
            current_score = problem.score(&current);
            seed_attempts += 1;
        }

        if !current_score.is_feasible() {
            tracing::warn!(attempts = seed_attempts, "no feasible starting solution found");
            let score = Score::Feasible(0.0);
            return Ok(SaResult {
                best: problem.fallback_solution(),
                best_score: score,
                final_temperature: config.initial_temperature,
                seed_attempts,
                stop_reason: StopReason::NoFeasibleStart,
                history: RunHistory::new(score, config.initial_temperature),
            });
        }

        let mut best = current.clone();
        let mut best_score = current_score;
        let mut history = RunHistory::new(current_score, config.initial_temperature);

        let mut temperature = config.initial_temperature;
        let mut iteration = 0usize;
        tracing::debug!(score = %current_score, attempts = seed_attempts, "starting anneal");

        while temperature > config.final_temperature && iteration < config.max_iterations {
            let neighbor = problem.neighbor(&current, rng);
            let neighbor_score = problem.score(&neighbor);
            let delta = neighbor_score.delta(current_score);

            // Metropolis acceptance criterion
            let accepted = delta > 0.0 || rng.random::<f64>() < (delta / temperature).exp();

            if accepted {
                current = neighbor;
                current_score = neighbor_score;
                if delta > 0.0 {
                    history.improvements += 1;
                }

                if current_score > best_score {
                    best = current.clone();
                    best_score = current_score;
                    tracing::debug!(iteration, score = %best_score, "new best");
                }
            } else {
                history.rejected += 1;
            }

            history.steps.push(Step {
                score: current_score,
                best: best_score,
                temperature,
                accepted,
            });

            // Cool down
            temperature *= config.alpha;
            iteration += 1;

            if iteration.is_multiple_of(100) {
                tracing::trace!(
                    iteration,
                    temperature,
                    current = %current_score,
                    best = %best_score,
                    "progress"
                );
            }
        }

        history.iterations = iteration;
        let stop_reason = if temperature <= config.final_temperature {
            StopReason::Frozen
        } else {
            StopReason::IterationLimit
        };

        tracing::info!(
            iterations = iteration,
            acceptance_rate = history.acceptance_rate(),
            best = %best_score,
            ?stop_reason,
            "anneal finished"
        );

        Ok(SaResult {
            best,
            best_score,
            final_temperature: temperature,
            seed_attempts,
            stop_reason,
            history,
        })
    }
}
