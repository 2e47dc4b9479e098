//! Tunables for the metric calculator.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsConfig {
    /// Landmarks below this visibility are unusable for measurements; a
    /// metric whose landmarks are all gated degrades to `Unavailable`.
    pub min_visibility: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { min_visibility: 0.5 }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.min_visibility.is_finite() || !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(AnalysisError::Config(format!(
                "minVisibility must be within [0, 1], got {}",
                self.min_visibility
            )));
        }
        Ok(())
    }
}
