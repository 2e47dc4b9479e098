//! Pipeline orchestration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::feedback::{AnalysisFeedback, RuleSynthesizer, Synthesizer};
use crate::metrics::{compute_metrics, MetricsConfig, SwingMetrics};
use crate::pose::PoseSequence;
use crate::scoring::{aggregate, score_phases, PhaseWeights, ScoreBreakdown, ScoringRules};
use crate::segmentation::{segment_swing, SegmenterConfig, SwingPhases};

/// Everything one analysis produces, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingAnalysis {
    pub phases: SwingPhases,
    pub metrics: SwingMetrics,
    pub breakdown: ScoreBreakdown,
    pub feedback: AnalysisFeedback,
    /// True when any metric degraded to `Unavailable`, so callers can
    /// explain a less trustworthy score.
    pub reduced_confidence: bool,
}

/// The assembled pipeline. Build once, analyze any number of sequences;
/// analyses share nothing mutable, so `&self` calls can run concurrently.
pub struct SwingAnalyzer {
    segmenter: SegmenterConfig,
    metrics: MetricsConfig,
    scoring: ScoringRules,
    weights: PhaseWeights,
    synthesizer: Box<dyn Synthesizer + Send + Sync>,
}

/// Hand-written because the boxed synthesizer has no `Debug`.
impl fmt::Debug for SwingAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwingAnalyzer")
            .field("segmenter", &self.segmenter)
            .field("metrics", &self.metrics)
            .field("scoring", &self.scoring)
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

impl SwingAnalyzer {
    /// Validate every policy table and assemble the pipeline. A broken
    /// table fails here, not in the middle of an analysis.
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        let AnalyzerConfig { segmenter, metrics, scoring, weights, feedback } = config;
        segmenter.validate()?;
        metrics.validate()?;
        scoring.validate()?;
        weights.validate()?;
        let synthesizer = RuleSynthesizer::new(feedback)?;
        Ok(Self {
            segmenter,
            metrics,
            scoring,
            weights,
            synthesizer: Box::new(synthesizer),
        })
    }

    /// Replace the feedback stage with another implementation of the
    /// contract, for callers that plug in an external text generator.
    pub fn with_synthesizer(mut self, synthesizer: Box<dyn Synthesizer + Send + Sync>) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// Run the five stages on one sequence.
    pub fn analyze(&self, seq: &PoseSequence) -> Result<SwingAnalysis, AnalysisError> {
        let phases = segment_swing(seq, &self.segmenter)?;

        let missing = seq.missing_landmarks();
        if !missing.is_empty() {
            log::warn!("landmarks never detected: {}", missing.join(", "));
        }

        let metrics = compute_metrics(seq, &phases, &self.metrics);
        let scores = score_phases(&metrics, &self.scoring);
        let breakdown = aggregate(&scores, &self.weights);
        let feedback = self.synthesizer.synthesize(&metrics, &breakdown);
        let reduced_confidence = metrics.any_unavailable();

        log::info!(
            "analysis complete: overall {:.1}, reduced confidence: {}",
            breakdown.overall,
            reduced_confidence
        );

        Ok(SwingAnalysis {
            phases,
            metrics,
            breakdown,
            feedback,
            reduced_confidence,
        })
    }
}
