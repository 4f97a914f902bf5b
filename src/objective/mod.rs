//! Quadratic knapsack objective.
//!
//! ```text
//! maximize   Σ v_i x_i + Σ_{i<j} q_ij x_i x_j
//! subject to Σ c_i x_i ≤ B
//! ```
//!
//! A budget violation is not an error: it evaluates to
//! [`Score::Infeasible`], which ranks below every feasible score.

use std::cmp::Ordering;

use crate::problem::{Problem, Selection};

/// Objective value of a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Score {
    /// Within budget, with the given objective value.
    Feasible(f64),
    /// Over budget.
    Infeasible,
}

impl Score {
    /// Numeric form used for deltas. Infeasible maps to negative infinity.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Score::Feasible(v) => v,
            Score::Infeasible => f64::NEG_INFINITY,
        }
    }

    pub fn is_feasible(self) -> bool {
        matches!(self, Score::Feasible(_))
    }

    /// The feasible value, if any.
    pub fn feasible(self) -> Option<f64> {
        match self {
            Score::Feasible(v) => Some(v),
            Score::Infeasible => None,
        }
    }

    /// `self - other` for the Metropolis test.
    ///
    /// Moving to an infeasible score from a feasible one is `-inf`, the
    /// reverse is `+inf`. Two infeasible scores are level (`0.0`) rather
    /// than the NaN that `-inf - -inf` would give.
    #[inline]
    pub fn delta(self, other: Score) -> f64 {
        match (self, other) {
            (Score::Infeasible, Score::Infeasible) => 0.0,
            _ => self.value() - other.value(),
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Score::Infeasible, Score::Infeasible) => Some(Ordering::Equal),
            (Score::Infeasible, Score::Feasible(_)) => Some(Ordering::Less),
            (Score::Feasible(_), Score::Infeasible) => Some(Ordering::Greater),
            (Score::Feasible(a), Score::Feasible(b)) => a.partial_cmp(b),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Feasible(v) => write!(f, "{v:.2}"),
            Score::Infeasible => f.write_str("infeasible"),
        }
    }
}

/// Scores `selection` against `problem`.
///
/// O(k²) in the number `k` of selected items. Pure: neither argument is
/// modified.
///
/// # Panics
///
/// Panics if `selection.len() != problem.len()`.
pub fn evaluate(problem: &Problem, selection: &Selection) -> Score {
    assert_eq!(
        selection.len(),
        problem.len(),
        "selection length does not match item count"
    );

    let chosen = selection.selected_indices();
    let cost: f64 = chosen.iter().map(|&i| problem.cost(i)).sum();
    if cost > problem.budget() {
        return Score::Infeasible;
    }

    let linear: f64 = chosen.iter().map(|&i| problem.value(i)).sum();
    Score::Feasible(linear + synergy(problem, &chosen))
}

/// Sum of `q_ij` over chosen pairs `i < j`. `chosen` must be ascending.
pub(crate) fn synergy(problem: &Problem, chosen: &[usize]) -> f64 {
    let q = problem.interactions();
    let mut total = 0.0;
    for (a, &i) in chosen.iter().enumerate() {
        for &j in &chosen[a + 1..] {
            total += q.get(i, j);
        }
    }
    total
}
