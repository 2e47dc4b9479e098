//! Phase scoring against the penalty tables.

use serde::{Deserialize, Serialize};

use crate::log_debug;
use crate::metrics::SwingMetrics;
use crate::segmentation::SwingPhase;

use super::rules::ScoringRules;

const ENABLE_LOGS: bool = true;

/// The five sub-scores, each within [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseScores {
    pub setup: f64,
    pub backswing: f64,
    pub downswing: f64,
    pub impact: f64,
    pub follow_through: f64,
}

impl PhaseScores {
    pub fn get(&self, phase: SwingPhase) -> f64 {
        match phase {
            SwingPhase::Setup => self.setup,
            SwingPhase::Backswing => self.backswing,
            SwingPhase::Downswing => self.downswing,
            SwingPhase::Impact => self.impact,
            SwingPhase::FollowThrough => self.follow_through,
        }
    }

    fn set(&mut self, phase: SwingPhase, value: f64) {
        match phase {
            SwingPhase::Setup => self.setup = value,
            SwingPhase::Backswing => self.backswing = value,
            SwingPhase::Downswing => self.downswing = value,
            SwingPhase::Impact => self.impact = value,
            SwingPhase::FollowThrough => self.follow_through = value,
        }
    }
}

/// Score every phase: start at the base score, subtract each penalty whose
/// trigger the metric breaches, floor at 0.
///
/// An `Unavailable` metric matches no rule; it contributes no penalty and no
/// bonus, so the affected phase keeps whatever its other rules decide.
pub fn score_phases(metrics: &SwingMetrics, rules: &ScoringRules) -> PhaseScores {
    let mut scores = PhaseScores {
        setup: rules.base_score,
        backswing: rules.base_score,
        downswing: rules.base_score,
        impact: rules.base_score,
        follow_through: rules.base_score,
    };

    for phase in SwingPhase::ALL {
        let mut score = scores.get(phase);
        for rule in rules.for_phase(phase) {
            let Some(value) = metrics.get(rule.metric).value() else {
                continue;
            };
            if rule.trigger.matches(value) {
                log_debug!(
                    "scoring: {} fired on {} = {:.2}, -{:.1}",
                    rule.name,
                    rule.metric.as_str(),
                    value,
                    rule.penalty
                );
                score -= rule.penalty;
            }
        }
        scores.set(phase, score.clamp(0.0, 10.0));
    }
    scores
}
