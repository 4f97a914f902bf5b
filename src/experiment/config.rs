//! Experiment suite configuration.

use crate::error::{QkpError, Result};
use crate::sa::SaConfig;

/// A labelled annealing configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Name used in reports.
    pub label: String,
    /// Annealing parameters for this run.
    pub sa: SaConfig,
}

impl ExperimentConfig {
    pub fn new(label: impl Into<String>, sa: SaConfig) -> Self {
        Self {
            label: label.into(),
            sa,
        }
    }
}

/// Ordered set of configurations run one after another over the same
/// problem.
///
/// # Examples
///
/// ```
/// use u_qkp::experiment::ExperimentSuite;
/// use u_qkp::sa::SaConfig;
///
/// let suite = ExperimentSuite::new()
///     .with_config("fast", SaConfig::default().with_alpha(0.9))
///     .with_config("slow", SaConfig::default().with_alpha(0.99))
///     .with_base_seed(7);
/// assert_eq!(suite.configs.len(), 2);
/// assert_eq!(suite.resolved(1).unwrap().seed, Some(8));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentSuite {
    /// Configurations in run order. Ties are resolved by this order.
    pub configs: Vec<ExperimentConfig>,

    /// Seed for configurations without their own: configuration `k` runs
    /// with `base_seed + k`.
    pub base_seed: Option<u64>,
}

impl ExperimentSuite {
    /// Empty suite.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three reference configurations.
    ///
    /// | label       | T₀   | T_f | alpha | max iterations |
    /// |-------------|------|-----|-------|----------------|
    /// | `classic`   | 1000 | 1   | 0.95  | 1000           |
    /// | `cautious`  | 1000 | 1   | 0.99  | 1500           |
    /// | `intensive` | 2000 | 1   | 0.95  | 1000           |
    pub fn reference() -> Self {
        let base = SaConfig::default()
            .with_initial_temperature(1000.0)
            .with_final_temperature(1.0)
            .with_alpha(0.95)
            .with_max_iterations(1000);

        Self::new()
            .with_config("classic", base.clone())
            .with_config(
                "cautious",
                base.clone().with_alpha(0.99).with_max_iterations(1500),
            )
            .with_config("intensive", base.with_initial_temperature(2000.0))
    }

    /// Appends a configuration.
    pub fn with_config(mut self, label: impl Into<String>, sa: SaConfig) -> Self {
        self.configs.push(ExperimentConfig::new(label, sa));
        self
    }

    /// Sets the base seed.
    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Configuration `k` with the base seed applied, if it has no seed of
    /// its own.
    pub fn resolved(&self, k: usize) -> Option<SaConfig> {
        let mut sa = self.configs.get(k)?.sa.clone();
        if sa.seed.is_none() {
            sa.seed = self.base_seed.map(|s| s.wrapping_add(k as u64));
        }
        Some(sa)
    }

    /// Validates the suite and every configuration in it.
    pub fn validate(&self) -> Result<()> {
        if self.configs.is_empty() {
            return Err(QkpError::NoConfigurations);
        }
        for config in &self.configs {
            config.sa.validate()?;
        }
        Ok(())
    }
}
