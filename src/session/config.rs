//! Session configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RequeryError, Result};
use crate::expansion::AugmentationConfig;

/// Default number of search/feedback rounds.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Options of an interactive feedback session.
///
/// # Examples
///
/// ```
/// use requery::session::SessionConfig;
///
/// let config: SessionConfig = serde_json::from_str(
///     r#"{"target_precision": 0.9, "augmentation": {"strategy": "log-odds"}}"#,
/// ).unwrap();
///
/// assert_eq!(config.max_attempts, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Precision@k at which the session stops.
    pub target_precision: f64,
    /// Maximum number of search/feedback rounds.
    pub max_attempts: usize,
    pub augmentation: AugmentationConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            target_precision: 1.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            augmentation: AugmentationConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn new(target_precision: f64) -> Self {
        SessionConfig {
            target_precision,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            RequeryError::config(format!("Cannot open config file {}: {e}", path.display()))
        })?;
        let config: SessionConfig = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.target_precision) {
            return Err(RequeryError::config(format!(
                "target_precision must be within [0, 1], got {}",
                self.target_precision
            )));
        }
        if self.max_attempts == 0 {
            return Err(RequeryError::config("max_attempts must be at least 1"));
        }
        self.augmentation.validate()
    }
}
