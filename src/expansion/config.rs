//! Augmentation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RequeryError, Result};
use crate::expansion::Strategy;

/// Default Rocchio weight of the original query vector.
pub const DEFAULT_ALPHA: f64 = 1.0;
/// Default Rocchio weight of the relevant centroid.
pub const DEFAULT_BETA: f64 = 0.75;
/// Default Rocchio weight of the not-relevant centroid.
pub const DEFAULT_GAMMA: f64 = 0.15;
/// Default cap on terms appended per iteration.
pub const DEFAULT_MAX_NEW_TERMS: usize = 2;

/// Options for a single augmentation step.
///
/// `alpha`, `beta` and `gamma` only affect the Rocchio strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentationConfig {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub max_new_terms: usize,
    pub strategy: Strategy,
}

impl Default for AugmentationConfig {
    fn default() -> Self {
        AugmentationConfig {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            gamma: DEFAULT_GAMMA,
            max_new_terms: DEFAULT_MAX_NEW_TERMS,
            strategy: Strategy::default(),
        }
    }
}

impl AugmentationConfig {
    /// Default configuration with the given strategy.
    pub fn with_strategy(strategy: Strategy) -> Self {
        AugmentationConfig {
            strategy,
            ..Default::default()
        }
    }

    /// Check that weights are finite and non-negative and that at least one
    /// term may be appended.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RequeryError::config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if self.max_new_terms == 0 {
            return Err(RequeryError::config("max_new_terms must be at least 1"));
        }

        Ok(())
    }
}
