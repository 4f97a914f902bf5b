//! Validated problem instances.

use super::types::{InteractionMatrix, Item};
use crate::error::{QkpError, Result};

/// How [`ProblemBuilder::build`] treats an interaction matrix whose size
/// differs from the item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixPolicy {
    /// Reject the mismatch with [`QkpError::DimensionMismatch`].
    #[default]
    Strict,
    /// Pad a smaller matrix with zeros and truncate a larger one, per axis,
    /// so rectangular or ragged rows are accepted as well. Missing pairs
    /// contribute no synergy.
    ZeroPad,
}

/// An immutable quadratic knapsack instance.
///
/// Built once through [`ProblemBuilder`] (which validates every input) and
/// then shared by reference with the objective, the neighborhood operator,
/// and the annealing runner.
///
/// With the `serde` feature, a problem serializes as
/// `{ items, interactions, budget }` with the matrix as nested rows, and
/// deserializing runs the same validation as [`ProblemBuilder::build`].
#[derive(Debug, Clone)]
pub struct Problem {
    items: Vec<Item>,
    interactions: InteractionMatrix,
    budget: f64,
}

impl Problem {
    /// Starts a builder with the given budget.
    pub fn builder(budget: f64) -> ProblemBuilder {
        ProblemBuilder::new(budget)
    }

    /// Builds an instance from parallel cost and value vectors, naming the
    /// items `item-0`, `item-1`, ...
    ///
    /// The matrix must be square and sized to the item count.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_qkp::problem::Problem;
    ///
    /// let problem = Problem::from_vectors(
    ///     &[10.0, 20.0],
    ///     &[5.0, 8.0],
    ///     vec![vec![0.0, 10.0], vec![0.0, 0.0]],
    ///     100.0,
    /// )
    /// .unwrap();
    /// assert_eq!(problem.len(), 2);
    /// ```
    pub fn from_vectors(
        costs: &[f64],
        values: &[f64],
        interactions: Vec<Vec<f64>>,
        budget: f64,
    ) -> Result<Self> {
        if costs.len() != values.len() {
            return Err(QkpError::LengthMismatch {
                costs: costs.len(),
                values: values.len(),
            });
        }
        costs
            .iter()
            .zip(values)
            .enumerate()
            .fold(Problem::builder(budget), |b, (i, (&c, &v))| {
                b.item(format!("item-{i}"), c, v)
            })
            .interactions(interactions)
            .build()
    }

    /// Items in index order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The interaction matrix, sized to the item count.
    pub fn interactions(&self) -> &InteractionMatrix {
        &self.interactions
    }

    /// Budget limit on total selected cost.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    #[inline]
    pub(crate) fn cost(&self, i: usize) -> f64 {
        self.items[i].cost
    }

    #[inline]
    pub(crate) fn value(&self, i: usize) -> f64 {
        self.items[i].value
    }
}

/// Collects and validates the inputs of a [`Problem`].
///
/// # Examples
///
/// ```
/// use u_qkp::problem::{MatrixPolicy, Problem};
///
/// let problem = Problem::builder(100.0)
///     .item("soup", 10.0, 5.0)
///     .item("bread", 20.0, 8.0)
///     .item("roast", 80.0, 50.0)
///     .interactions(vec![vec![0.0, 10.0], vec![10.0, 0.0]])
///     .matrix_policy(MatrixPolicy::ZeroPad)
///     .build()
///     .unwrap();
/// assert_eq!(problem.interactions().size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    items: Vec<Item>,
    interactions: Option<Vec<Vec<f64>>>,
    budget: f64,
    policy: MatrixPolicy,
}

impl ProblemBuilder {
    pub fn new(budget: f64) -> Self {
        Self {
            items: Vec::new(),
            interactions: None,
            budget,
            policy: MatrixPolicy::default(),
        }
    }

    /// Appends an item.
    pub fn item(mut self, name: impl Into<String>, cost: f64, value: f64) -> Self {
        self.items.push(Item::new(name, cost, value));
        self
    }

    /// Appends several items.
    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Sets the interaction matrix as rows. Without one, every pair has
    /// zero synergy.
    pub fn interactions(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.interactions = Some(rows);
        self
    }

    /// Sets the policy for a matrix whose size differs from the item count.
    pub fn matrix_policy(mut self, policy: MatrixPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the inputs and builds the instance.
    pub fn build(self) -> Result<Problem> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(QkpError::InvalidBudget(self.budget));
        }

        for (index, item) in self.items.iter().enumerate() {
            if !item.cost.is_finite() {
                return Err(QkpError::NonFinite {
                    what: "cost",
                    index,
                });
            }
            if !item.value.is_finite() {
                return Err(QkpError::NonFinite {
                    what: "value",
                    index,
                });
            }
            if item.cost < 0.0 {
                return Err(QkpError::NegativeCost {
                    index,
                    cost: item.cost,
                });
            }
        }

        let n = self.items.len();
        let interactions = match self.interactions {
            None => InteractionMatrix::zeros(n),
            Some(rows) => {
                let size = rows.len();
                for (row, values) in rows.iter().enumerate() {
                    if self.policy == MatrixPolicy::Strict && values.len() != size {
                        return Err(QkpError::RaggedMatrix {
                            row,
                            len: values.len(),
                            expected: size,
                        });
                    }
                    if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                        return Err(QkpError::NonFiniteInteraction { row, col });
                    }
                }

                let square = rows.iter().all(|r| r.len() == size);
                if square && size == n {
                    InteractionMatrix::from_square_rows(&rows)
                } else {
                    match self.policy {
                        MatrixPolicy::Strict => {
                            return Err(QkpError::DimensionMismatch { rows: size, items: n });
                        }
                        MatrixPolicy::ZeroPad => {
                            tracing::warn!(
                                rows = size,
                                widest = rows.iter().map(Vec::len).max().unwrap_or(0),
                                to = n,
                                "resizing interaction matrix, missing pairs default to zero"
                            );
                            InteractionMatrix::padded(&rows, n)
                        }
                    }
                }
            }
        };

        Ok(Problem {
            items: self.items,
            interactions,
            budget: self.budget,
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ProblemData {
    items: Vec<Item>,
    interactions: Vec<Vec<f64>>,
    budget: f64,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Problem {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let data = ProblemData {
            items: self.items.clone(),
            interactions: self.interactions.to_rows(),
            budget: self.budget,
        };
        serde::Serialize::serialize(&data, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Problem {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let data: ProblemData = serde::Deserialize::deserialize(deserializer)?;
        ProblemBuilder::new(data.budget)
            .items(data.items)
            .interactions(data.interactions)
            .build()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ProblemBuilder {
        Problem::builder(100.0)
            .item("a", 10.0, 5.0)
            .item("b", 20.0, 8.0)
            .item("c", 80.0, 50.0)
    }

    #[test]
    fn test_build_without_matrix() {
        let p = base().build().unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.interactions().size(), 3);
        assert_eq!(p.interactions().nonzero_count(), 0);
        assert!((p.budget() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_strict_rejects_small_matrix() {
        let err = base()
            .interactions(vec![vec![0.0, 1.0], vec![1.0, 0.0]])
            .build()
            .unwrap_err();
        assert_eq!(err, QkpError::DimensionMismatch { rows: 2, items: 3 });
    }

    #[test]
    fn test_zero_pad_expands_small_matrix() {
        let p = base()
            .interactions(vec![vec![0.0, 1.0], vec![1.0, 0.0]])
            .matrix_policy(MatrixPolicy::ZeroPad)
            .build()
            .unwrap();
        assert_eq!(p.interactions().size(), 3);
        assert_eq!(p.interactions().get(0, 1), 1.0);
        assert_eq!(p.interactions().get(0, 2), 0.0);
    }

    #[test]
    fn test_zero_pad_accepts_rectangular_matrix() {
        // Two rows of four columns for three items: the 2x3 block survives,
        // the extra column is dropped and row 2 is zero.
        let p = base()
            .interactions(vec![vec![0.0, 1.0, 2.0, 9.0], vec![0.0, 0.0, 3.0, 9.0]])
            .matrix_policy(MatrixPolicy::ZeroPad)
            .build()
            .unwrap();
        let q = p.interactions();
        assert_eq!(q.size(), 3);
        assert_eq!(q.get(0, 1), 1.0);
        assert_eq!(q.get(0, 2), 2.0);
        assert_eq!(q.get(1, 2), 3.0);
        assert_eq!(q.nonzero_count(), 3);
    }

    #[test]
    fn test_zero_pad_accepts_ragged_rows() {
        let p = base()
            .interactions(vec![vec![0.0, 4.0, 5.0], vec![0.0], vec![]])
            .matrix_policy(MatrixPolicy::ZeroPad)
            .build()
            .unwrap();
        let q = p.interactions();
        assert_eq!(q.get(0, 1), 4.0);
        assert_eq!(q.get(0, 2), 5.0);
        assert_eq!(q.get(1, 2), 0.0);
        assert_eq!(q.nonzero_count(), 2);
    }

    #[test]
    fn test_zero_pad_still_rejects_non_finite() {
        let err = base()
            .interactions(vec![vec![0.0, 1.0], vec![0.0, f64::NAN, 0.0]])
            .matrix_policy(MatrixPolicy::ZeroPad)
            .build()
            .unwrap_err();
        assert_eq!(err, QkpError::NonFiniteInteraction { row: 1, col: 1 });
    }

    #[test]
    fn test_strict_rejects_rectangular_matrix() {
        let err = base()
            .interactions(vec![vec![0.0, 1.0, 2.0, 9.0]; 3])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            QkpError::RaggedMatrix {
                row: 0,
                len: 4,
                expected: 3
            }
        );
    }

    #[test]
    fn test_ragged_matrix() {
        let err = base()
            .interactions(vec![vec![0.0, 1.0, 0.0], vec![1.0], vec![0.0, 0.0, 0.0]])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            QkpError::RaggedMatrix {
                row: 1,
                len: 1,
                expected: 3
            }
        );
    }

    #[test]
    fn test_invalid_budget() {
        assert!(matches!(
            Problem::builder(-1.0).build(),
            Err(QkpError::InvalidBudget(_))
        ));
        assert!(matches!(
            Problem::builder(f64::NAN).build(),
            Err(QkpError::InvalidBudget(_))
        ));
    }

    #[test]
    fn test_invalid_items() {
        let err = Problem::builder(10.0)
            .item("x", -1.0, 1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, QkpError::NegativeCost { index: 0, .. }));

        let err = Problem::builder(10.0)
            .item("x", 1.0, 1.0)
            .item("y", 1.0, f64::INFINITY)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            QkpError::NonFinite {
                what: "value",
                index: 1
            }
        );
    }

    #[test]
    fn test_non_finite_interaction() {
        let err = Problem::from_vectors(
            &[1.0, 1.0],
            &[1.0, 1.0],
            vec![vec![0.0, f64::NAN], vec![0.0, 0.0]],
            5.0,
        )
        .unwrap_err();
        assert_eq!(err, QkpError::NonFiniteInteraction { row: 0, col: 1 });
    }

    #[test]
    fn test_from_vectors_length_mismatch() {
        let err = Problem::from_vectors(&[1.0, 2.0], &[1.0], vec![], 5.0).unwrap_err();
        assert_eq!(
            err,
            QkpError::LengthMismatch {
                costs: 2,
                values: 1
            }
        );
    }

    #[test]
    fn test_from_vectors_names() {
        let p = Problem::from_vectors(&[1.0], &[2.0], vec![vec![0.0]], 5.0).unwrap();
        assert_eq!(p.items()[0].name, "item-0");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_preserves_matrix() {
        let p = base()
            .interactions(vec![
                vec![0.0, 10.0, 0.0],
                vec![0.0, 0.0, -2.0],
                vec![0.0, 0.0, 0.0],
            ])
            .build()
            .unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items(), p.items());
        assert_eq!(back.interactions(), p.interactions());
        assert_eq!(back.budget(), p.budget());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_problem() {
        let item = r#"{"name":"a","cost":1.0,"value":1.0}"#;

        // 1 item with a 2x2 matrix: would index out of bounds if accepted.
        let mismatched = format!(
            r#"{{"items":[{item}],"interactions":[[0.0,1.0],[0.0,0.0]],"budget":5.0}}"#
        );
        assert!(serde_json::from_str::<Problem>(&mismatched).is_err());

        let negative_budget =
            format!(r#"{{"items":[{item}],"interactions":[[0.0]],"budget":-1.0}}"#);
        assert!(serde_json::from_str::<Problem>(&negative_budget).is_err());

        let negative_cost = r#"{"items":[{"name":"a","cost":-1.0,"value":1.0}],"interactions":[[0.0]],"budget":5.0}"#;
        assert!(serde_json::from_str::<Problem>(negative_cost).is_err());
    }
}
