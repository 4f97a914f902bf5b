//! Decomposition of selections and summary statistics of instances.
//!
//! These are data only. Rendering them is left to the caller.

use super::instance::Problem;
use super::types::Selection;
use crate::objective::{self, Score};

/// Term-by-term breakdown of a selection's objective.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionBreakdown {
    /// Chosen item indices, ascending.
    pub selected: Vec<usize>,
    /// Total cost of the chosen items.
    pub total_cost: f64,
    /// `budget - total_cost`. Negative when over budget.
    pub remaining_budget: f64,
    /// `total_cost / budget`, or `0.0` for a zero budget.
    pub budget_utilization: f64,
    /// Sum of the chosen items' values.
    pub linear_value: f64,
    /// Sum of the upper-triangle interactions among chosen items.
    pub synergy_value: f64,
    /// Non-zero interactions among chosen items as `(i, j, q_ij)`, `i < j`.
    pub synergy_pairs: Vec<(usize, usize, f64)>,
    /// The objective score.
    pub score: Score,
}

/// Descriptive statistics of an instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceStats {
    pub item_count: usize,
    pub budget: f64,
    pub mean_cost: f64,
    /// Population standard deviation.
    pub std_cost: f64,
    pub mean_value: f64,
    /// Population standard deviation.
    pub std_value: f64,
    /// `budget / Σ cost`. `None` when every cost is zero.
    pub budget_coverage: Option<f64>,
    /// Fraction of non-zero interaction entries over `n²`.
    pub interaction_density: f64,
}

impl Problem {
    /// Breaks `selection` down into cost, linear and synergy terms.
    ///
    /// # Panics
    ///
    /// Panics if `selection.len() != self.len()`.
    pub fn breakdown(&self, selection: &Selection) -> SelectionBreakdown {
        let score = objective::evaluate(self, selection);
        let selected = selection.selected_indices();

        let total_cost: f64 = selected.iter().map(|&i| self.cost(i)).sum();
        let linear_value: f64 = selected.iter().map(|&i| self.value(i)).sum();

        let q = self.interactions();
        let mut synergy_pairs = Vec::new();
        for (a, &i) in selected.iter().enumerate() {
            for &j in &selected[a + 1..] {
                let v = q.get(i, j);
                if v != 0.0 {
                    synergy_pairs.push((i, j, v));
                }
            }
        }
        let synergy_value = objective::synergy(self, &selected);

        let budget = self.budget();
        SelectionBreakdown {
            selected,
            total_cost,
            remaining_budget: budget - total_cost,
            budget_utilization: if budget > 0.0 { total_cost / budget } else { 0.0 },
            linear_value,
            synergy_value,
            synergy_pairs,
            score,
        }
    }

    /// Summary statistics over costs, values and interactions.
    pub fn stats(&self) -> InstanceStats {
        let n = self.len();
        let costs: Vec<f64> = self.items().iter().map(|it| it.cost).collect();
        let values: Vec<f64> = self.items().iter().map(|it| it.value).collect();
        let (mean_cost, std_cost) = mean_std(&costs);
        let (mean_value, std_value) = mean_std(&values);

        let total_cost: f64 = costs.iter().sum();
        let cells = n * n;

        InstanceStats {
            item_count: n,
            budget: self.budget(),
            mean_cost,
            std_cost,
            mean_value,
            std_value,
            budget_coverage: (total_cost > 0.0).then(|| self.budget() / total_cost),
            interaction_density: if cells == 0 {
                0.0
            } else {
                self.interactions().nonzero_count() as f64 / cells as f64
            },
        }
    }
}

fn mean_std(xs: &[f64]) -> (f64, f64) {
    if xs.is_empty() {
        return (0.0, 0.0);
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}
