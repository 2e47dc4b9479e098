//! Job-shaped envelope around an analysis result.
//!
//! The pipeline itself is deterministic; the id and timestamp live here, at
//! the edge, so two runs over the same clip still produce identical
//! `SwingAnalysis` values even though their reports differ.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analyzer::SwingAnalysis;
use crate::metrics::SwingMetrics;
use crate::scoring::{summarize_score, ScoreBreakdown};

/// What a caller gets back for one analyzed clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub job_id: Uuid,
    pub status: String,
    pub analyzed_at: DateTime<Utc>,
    /// Overall score, already rounded to one decimal.
    pub score: f64,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub drills: Vec<String>,
    pub metrics: SwingMetrics,
    pub breakdown: ScoreBreakdown,
    pub reduced_confidence: bool,
}

impl AnalysisReport {
    /// Stamp an analysis with a fresh job id and the current time.
    pub fn from_analysis(analysis: &SwingAnalysis) -> Self {
        Self {
            job_id: Uuid::new_v4(),
            status: "completed".to_string(),
            analyzed_at: Utc::now(),
            score: analysis.breakdown.overall,
            summary: summarize_score(analysis.breakdown.overall).to_string(),
            strengths: analysis.feedback.strengths.clone(),
            improvements: analysis.feedback.improvements.clone(),
            drills: analysis.feedback.drills.clone(),
            metrics: analysis.metrics.clone(),
            breakdown: analysis.breakdown.clone(),
            reduced_confidence: analysis.reduced_confidence,
        }
    }
}
