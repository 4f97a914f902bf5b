//! Quadratic knapsack optimization with Simulated Annealing.
//!
//! Selects a subset of items under a budget, maximizing the sum of item
//! values plus pairwise interaction terms between chosen items:
//!
//! - **Problem**: validated, immutable instance (items, interaction
//!   matrix, budget) with solution breakdowns and instance statistics.
//! - **Objective**: scores a selection, reporting budget violations as
//!   [`Score::Infeasible`](objective::Score) rather than as errors.
//! - **Neighborhood**: the Add/Remove operator, a single-flag move whose
//!   direction adapts to empty and full selections.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with geometric
//!   cooling, best-so-far tracking and a full run history.
//! - **Experiment**: runs several annealing configurations over one
//!   problem and reports the best.
//!
//! # Example
//!
//! ```
//! use u_qkp::experiment::{ExperimentRunner, ExperimentSuite};
//! use u_qkp::problem::Problem;
//!
//! let problem = Problem::builder(100.0)
//!     .item("soup", 10.0, 5.0)
//!     .item("bread", 20.0, 8.0)
//!     .item("roast", 80.0, 50.0)
//!     .interactions(vec![
//!         vec![0.0, 10.0, 0.0],
//!         vec![0.0, 0.0, 0.0],
//!         vec![0.0, 0.0, 0.0],
//!     ])
//!     .build()
//!     .unwrap();
//!
//! let report = ExperimentRunner::run(&problem, &ExperimentSuite::reference().with_base_seed(1))
//!     .unwrap();
//! let best = report.best();
//! assert!(best.result.best_score.is_feasible());
//! ```

pub mod error;
pub mod experiment;
pub mod neighborhood;
pub mod objective;
pub mod problem;
pub mod sa;

pub use error::{QkpError, Result};
