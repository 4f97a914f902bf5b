//! SA configuration.

use crate::error::{QkpError, Result};

/// Configuration for the Simulated Annealing controller.
///
/// Temperature follows the geometric schedule `T_{k+1} = alpha * T_k`,
/// applied once per iteration. The run stops when `T <= final_temperature`
/// or after `max_iterations` iterations, whichever comes first.
///
/// # Examples
///
/// ```
/// use u_qkp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(2000.0)
///     .with_final_temperature(1.0)
///     .with_alpha(0.99)
///     .with_max_iterations(1500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Stopping temperature. The loop runs while `T > final_temperature`.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    ///
    /// Typical: 0.95–0.99.
    pub alpha: f64,

    /// Maximum number of iterations (neighbor evaluations). 0 runs no
    /// iterations and returns the starting solution.
    pub max_iterations: usize,

    /// How many fresh random selections to try after the first one turns
    /// out infeasible.
    pub max_seed_attempts: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            final_temperature: 1.0,
            alpha: 0.95,
            max_iterations: 1000,
            max_seed_attempts: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_max_seed_attempts(mut self, n: usize) -> Self {
        self.max_seed_attempts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(QkpError::config(
                "initial_temperature",
                format!("must be positive, got {}", self.initial_temperature),
            ));
        }
        if !self.final_temperature.is_finite() || self.final_temperature <= 0.0 {
            return Err(QkpError::config(
                "final_temperature",
                format!("must be positive, got {}", self.final_temperature),
            ));
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(QkpError::config(
                "final_temperature",
                "must be less than initial_temperature",
            ));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(QkpError::config(
                "alpha",
                format!("must be in (0, 1), got {}", self.alpha),
            ));
        }
        Ok(())
    }
}
