//! Core trait and run history for Simulated Annealing.

use rand::Rng;

use crate::neighborhood;
use crate::objective::{self, Score};
use crate::problem::{Problem, Selection};

/// Defines a Simulated Annealing problem.
///
/// The implementor supplies random starts, scoring and neighbor
/// generation. The runner handles temperature, acceptance, best-so-far
/// tracking and history.
///
/// # Maximization
///
/// The runner maximizes [`Score`]. An infeasible score is never accepted
/// from a feasible state.
///
/// [`Problem`] implements this trait with the Add/Remove neighborhood.
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Scores a solution. Higher is better.
    fn score(&self, solution: &Self::Solution) -> Score;

    /// Generates a neighbor of the current solution.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;

    /// Solution reported, with score zero, when no feasible start is found.
    fn fallback_solution(&self) -> Self::Solution;
}

impl SaProblem for Problem {
    type Solution = Selection;

    /// Each flag is set independently with probability 0.5.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Selection {
        let flags: Vec<bool> = (0..self.len()).map(|_| rng.random_bool(0.5)).collect();
        Selection::from(flags)
    }

    fn score(&self, solution: &Selection) -> Score {
        objective::evaluate(self, solution)
    }

    fn neighbor<R: Rng>(&self, solution: &Selection, rng: &mut R) -> Selection {
        neighborhood::add_remove(solution, rng)
    }

    fn fallback_solution(&self) -> Selection {
        Selection::empty(self.len())
    }
}

/// One iteration of the annealing loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Current score after the iteration.
    pub score: Score,
    /// Best-so-far score after the iteration.
    pub best: Score,
    /// Temperature the acceptance test ran at (before cooling).
    pub temperature: f64,
    /// Whether the neighbor was accepted.
    pub accepted: bool,
}

/// Append-only log of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunHistory {
    /// Score of the starting solution.
    pub initial_score: Score,
    /// Temperature at the start of the run.
    pub initial_temperature: f64,
    /// One entry per iteration.
    pub steps: Vec<Step>,
    /// Rejected neighbors.
    pub rejected: usize,
    /// Accepted neighbors that strictly improved the current score.
    pub improvements: usize,
    /// Iterations executed.
    pub iterations: usize,
}

impl RunHistory {
    pub(crate) fn new(initial_score: Score, initial_temperature: f64) -> Self {
        Self {
            initial_score,
            initial_temperature,
            steps: Vec::new(),
            rejected: 0,
            improvements: 0,
            iterations: 0,
        }
    }

    /// Accepted neighbors (improving or not).
    pub fn accepted(&self) -> usize {
        self.steps.iter().filter(|s| s.accepted).count()
    }

    /// Fraction of iterations whose neighbor was accepted. 0 for a run
    /// without iterations.
    pub fn acceptance_rate(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.accepted() as f64 / self.steps.len() as f64
        }
    }

    /// Best-so-far score before the first iteration and after each one.
    pub fn best_trace(&self) -> Vec<Score> {
        std::iter::once(self.initial_score)
            .chain(self.steps.iter().map(|s| s.best))
            .collect()
    }

    /// Current score before the first iteration and after each one.
    pub fn score_trace(&self) -> Vec<Score> {
        std::iter::once(self.initial_score)
            .chain(self.steps.iter().map(|s| s.score))
            .collect()
    }
}
