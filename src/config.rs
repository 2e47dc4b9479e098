//! Analyzer configuration: every stage's policy in one serializable bundle.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::feedback::FeedbackRules;
use crate::metrics::MetricsConfig;
use crate::scoring::{PhaseWeights, ScoringRules};
use crate::segmentation::SegmenterConfig;

/// The whole scoring policy as one value.
///
/// `Default` is the house policy. An override file may carry just the
/// sections it changes; missing sections keep their defaults. Analyzers
/// take the config explicitly at construction, so concurrent analyzers can
/// run different policies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerConfig {
    pub segmenter: SegmenterConfig,
    pub metrics: MetricsConfig,
    pub scoring: ScoringRules,
    pub weights: PhaseWeights,
    pub feedback: FeedbackRules,
}

impl AnalyzerConfig {
    /// Read a policy file (JSON).
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            AnalysisError::Config(format!(
                "Failed to read config from {}: {err}",
                path.display()
            ))
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            AnalysisError::Config(format!(
                "Failed to parse config from {}: {err}",
                path.display()
            ))
        })
    }

    /// Write the policy as pretty JSON, the shape `load` reads back.
    pub fn save(&self, path: &Path) -> Result<(), AnalysisError> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|err| AnalysisError::Config(format!("Failed to serialize config: {err}")))?;
        fs::write(path, serialized).map_err(|err| {
            AnalysisError::Config(format!(
                "Failed to write config to {}: {err}",
                path.display()
            ))
        })
    }

    /// Validate every table as one unit.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        self.segmenter.validate()?;
        self.metrics.validate()?;
        self.scoring.validate()?;
        self.weights.validate()?;
        self.feedback.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use assert_matches::assert_matches;
    use uuid::Uuid;

    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = env::temp_dir().join(format!("swing-config-{}.json", Uuid::new_v4()));
        let mut config = AnalyzerConfig::default();
        config.weights.setup = 0.10;
        config.weights.follow_through = 0.15;

        config.save(&path).expect("should save");
        let loaded = AnalyzerConfig::load(&path).expect("should load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.weights.setup, 0.10);
        assert_eq!(loaded.weights.follow_through, 0.15);
        assert_eq!(loaded.scoring.backswing.len(), 3);
    }

    #[test]
    fn partial_file_keeps_defaults_elsewhere() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"metrics":{"minVisibility":0.6}}"#).expect("should parse");
        assert_eq!(config.metrics.min_visibility, 0.6);
        assert_eq!(config.segmenter.min_frames, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let path = env::temp_dir().join(format!("swing-config-{}.json", Uuid::new_v4()));
        assert_matches!(AnalyzerConfig::load(&path), Err(AnalysisError::Config(_)));
    }
}
