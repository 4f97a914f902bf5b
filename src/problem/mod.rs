//! Problem instances.
//!
//! A [`Problem`] bundles the items, the pairwise [`InteractionMatrix`] and
//! the budget. It is validated once at construction and never mutated, so
//! it can be shared freely between runs.

mod analysis;
mod instance;
mod types;

pub use analysis::{InstanceStats, SelectionBreakdown};
pub use instance::{MatrixPolicy, Problem, ProblemBuilder};
pub use types::{InteractionMatrix, Item, Selection};
