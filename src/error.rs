//! Error types.
//!
//! Only malformed inputs are errors. Infeasible candidates and a failed
//! feasible start are ordinary search outcomes and are reported through
//! [`Score`](crate::objective::Score) and
//! [`StopReason`](crate::sa::StopReason) instead.

use thiserror::Error;

/// Errors raised when building a problem instance or validating a
/// configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QkpError {
    /// An annealing parameter is out of range.
    #[error("invalid annealing config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// The interaction matrix size does not match the item count.
    #[error("interaction matrix is {rows}x{rows} but there are {items} items")]
    DimensionMismatch { rows: usize, items: usize },

    /// Cost and value vectors have different lengths.
    #[error("{costs} costs but {values} values")]
    LengthMismatch { costs: usize, values: usize },

    /// A matrix row has the wrong number of columns.
    #[error("interaction matrix row {row} has {len} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cost or value is NaN or infinite.
    #[error("non-finite {what} at index {index}")]
    NonFinite { what: &'static str, index: usize },

    /// An interaction matrix entry is NaN or infinite.
    #[error("non-finite interaction at ({row}, {col})")]
    NonFiniteInteraction { row: usize, col: usize },

    /// An item cost is negative.
    #[error("item {index} has negative cost {cost}")]
    NegativeCost { index: usize, cost: f64 },

    /// The budget is negative or not finite.
    #[error("budget must be finite and non-negative, got {0}")]
    InvalidBudget(f64),

    /// An experiment suite was run without any configuration.
    #[error("experiment suite has no configurations")]
    NoConfigurations,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QkpError>;

impl QkpError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        QkpError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
