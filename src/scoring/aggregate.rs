//! Weighted overall score.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

use super::scorer::PhaseScores;

/// Slack allowed when checking that the weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative importance of each phase in the overall score.
///
/// The weights are one policy unit: changing one means renormalizing all,
/// and `validate` enforces the unit sum so a half-edited table fails fast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhaseWeights {
    pub setup: f64,
    pub backswing: f64,
    pub downswing: f64,
    pub impact: f64,
    pub follow_through: f64,
}

impl Default for PhaseWeights {
    fn default() -> Self {
        Self {
            setup: 0.15,
            backswing: 0.20,
            downswing: 0.25,
            impact: 0.30,
            follow_through: 0.10,
        }
    }
}

impl PhaseWeights {
    pub fn sum(&self) -> f64 {
        self.setup + self.backswing + self.downswing + self.impact + self.follow_through
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        let named = [
            ("setup", self.setup),
            ("backswing", self.backswing),
            ("downswing", self.downswing),
            ("impact", self.impact),
            ("followThrough", self.follow_through),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(AnalysisError::Config(format!(
                    "{name} weight must be within [0, 1], got {weight}"
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AnalysisError::Config(format!(
                "phase weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// The published scores: five sub-scores and the weighted overall, all
/// rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub overall: f64,
    pub setup: f64,
    pub backswing: f64,
    pub downswing: f64,
    pub impact: f64,
    pub follow_through: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Combine sub-scores into the overall score.
pub fn aggregate(scores: &PhaseScores, weights: &PhaseWeights) -> ScoreBreakdown {
    let overall = scores.setup * weights.setup
        + scores.backswing * weights.backswing
        + scores.downswing * weights.downswing
        + scores.impact * weights.impact
        + scores.follow_through * weights.follow_through;

    ScoreBreakdown {
        overall: round1(overall.clamp(0.0, 10.0)),
        setup: round1(scores.setup),
        backswing: round1(scores.backswing),
        downswing: round1(scores.downswing),
        impact: round1(scores.impact),
        follow_through: round1(scores.follow_through),
    }
}

/// One-sentence read of the overall score, by band.
pub fn summarize_score(overall: f64) -> &'static str {
    if overall >= 8.0 {
        "Excellent swing mechanics! You're performing well across all phases."
    } else if overall >= 6.0 {
        "Good swing with solid fundamentals. A few refinements will take you to the next level."
    } else if overall >= 4.0 {
        "Decent swing foundation. Focus on the improvement areas to enhance consistency."
    } else {
        "There's room for improvement. Work with a coach on the fundamentals."
    }
}
