//! Penalty rule tables.
//!
//! Scoring policy lives here as data, not code: every threshold is a named
//! rule that configuration can override without touching the scorer. The
//! defaults encode the house policy for a driver swing.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::metrics::MetricKind;
use crate::segmentation::SwingPhase;

/// A threshold test against a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    /// value < x
    Below(f64),
    /// value > x
    Above(f64),
    /// value <= x
    AtMost(f64),
    /// value >= x
    AtLeast(f64),
    /// min <= value <= max
    Within { min: f64, max: f64 },
    /// value < min or value > max
    Outside { min: f64, max: f64 },
}

impl Trigger {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Trigger::Below(x) => value < x,
            Trigger::Above(x) => value > x,
            Trigger::AtMost(x) => value <= x,
            Trigger::AtLeast(x) => value >= x,
            Trigger::Within { min, max } => value >= min && value <= max,
            Trigger::Outside { min, max } => value < min || value > max,
        }
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        match *self {
            Trigger::Below(x) | Trigger::Above(x) | Trigger::AtMost(x) | Trigger::AtLeast(x) => {
                if !x.is_finite() {
                    return Err(AnalysisError::Config(format!(
                        "trigger threshold must be finite, got {x}"
                    )));
                }
            }
            Trigger::Within { min, max } | Trigger::Outside { min, max } => {
                if !min.is_finite() || !max.is_finite() || min > max {
                    return Err(AnalysisError::Config(format!(
                        "trigger range [{min}, {max}] is invalid"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// One named deduction applied when a metric breaches its trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyRule {
    /// Stable name for logs and config overrides.
    pub name: String,
    pub metric: MetricKind,
    pub trigger: Trigger,
    pub penalty: f64,
}

impl PenaltyRule {
    pub fn new(name: &str, metric: MetricKind, trigger: Trigger, penalty: f64) -> Self {
        Self { name: name.into(), metric, trigger, penalty }
    }
}

/// Per-phase penalty lists plus the score every phase starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringRules {
    pub base_score: f64,
    pub setup: Vec<PenaltyRule>,
    pub backswing: Vec<PenaltyRule>,
    pub downswing: Vec<PenaltyRule>,
    pub impact: Vec<PenaltyRule>,
    pub follow_through: Vec<PenaltyRule>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_score: 10.0,
            setup: vec![PenaltyRule::new(
                "spine_angle_off_ideal",
                MetricKind::SpineAngle,
                Trigger::Outside { min: 25.0, max: 45.0 },
                2.0,
            )],
            backswing: vec![
                PenaltyRule::new(
                    "limited_shoulder_turn",
                    MetricKind::ShoulderTurn,
                    Trigger::Below(80.0),
                    3.0,
                ),
                PenaltyRule::new(
                    "over_rotated_shoulders",
                    MetricKind::ShoulderTurn,
                    Trigger::Above(120.0),
                    2.0,
                ),
                PenaltyRule::new(
                    "head_sway",
                    MetricKind::HeadMovement,
                    Trigger::Above(5.0),
                    2.0,
                ),
            ],
            downswing: vec![PenaltyRule::new(
                "stalled_weight_shift",
                MetricKind::WeightTransfer,
                Trigger::Below(0.6),
                3.0,
            )],
            impact: vec![
                PenaltyRule::new(
                    "head_drift_at_impact",
                    MetricKind::HeadMovement,
                    Trigger::Above(3.0),
                    2.0,
                ),
                PenaltyRule::new(
                    "bent_lead_arm",
                    MetricKind::ArmExtension,
                    Trigger::Below(0.85),
                    2.0,
                ),
            ],
            // A captured finish earns its base score; no penalties defined.
            follow_through: Vec::new(),
        }
    }
}

impl ScoringRules {
    pub fn for_phase(&self, phase: SwingPhase) -> &[PenaltyRule] {
        match phase {
            SwingPhase::Setup => &self.setup,
            SwingPhase::Backswing => &self.backswing,
            SwingPhase::Downswing => &self.downswing,
            SwingPhase::Impact => &self.impact,
            SwingPhase::FollowThrough => &self.follow_through,
        }
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.base_score.is_finite() || !(0.0..=10.0).contains(&self.base_score) {
            return Err(AnalysisError::Config(format!(
                "baseScore must be within [0, 10], got {}",
                self.base_score
            )));
        }
        for phase in SwingPhase::ALL {
            for rule in self.for_phase(phase) {
                if rule.name.is_empty() {
                    return Err(AnalysisError::Config(format!(
                        "a {} penalty rule has an empty name",
                        phase.as_str()
                    )));
                }
                rule.trigger.validate()?;
                if !rule.penalty.is_finite() || rule.penalty < 0.0 {
                    return Err(AnalysisError::Config(format!(
                        "penalty '{}' must be non-negative, got {}",
                        rule.name, rule.penalty
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn trigger_boundaries_are_exact() {
        assert!(!Trigger::Below(80.0).matches(80.0));
        assert!(Trigger::Below(80.0).matches(79.999));
        assert!(!Trigger::Above(3.0).matches(3.0));
        assert!(Trigger::Above(3.0).matches(3.2));
        assert!(Trigger::AtMost(2.0).matches(2.0));
        assert!(Trigger::AtLeast(0.7).matches(0.7));
        assert!(Trigger::Within { min: 45.0, max: 90.0 }.matches(45.0));
        assert!(Trigger::Within { min: 45.0, max: 90.0 }.matches(90.0));
        assert!(!Trigger::Outside { min: 25.0, max: 45.0 }.matches(45.0));
        assert!(Trigger::Outside { min: 25.0, max: 45.0 }.matches(45.001));
    }

    #[test]
    fn default_rules_are_valid() {
        assert!(ScoringRules::default().validate().is_ok());
    }

    #[test]
    fn inverted_range_rejected() {
        let mut rules = ScoringRules::default();
        rules.setup[0].trigger = Trigger::Within { min: 45.0, max: 25.0 };
        assert_matches!(rules.validate(), Err(AnalysisError::Config(_)));
    }

    #[test]
    fn negative_penalty_rejected() {
        let mut rules = ScoringRules::default();
        rules.impact[0].penalty = -1.0;
        assert_matches!(rules.validate(), Err(AnalysisError::Config(_)));
    }

    #[test]
    fn rules_round_trip_through_json() {
        let rules = ScoringRules::default();
        let json = serde_json::to_string(&rules).expect("serialize");
        let back: ScoringRules = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.backswing.len(), 3);
        assert_eq!(back.backswing[0].name, "limited_shoulder_turn");
        assert_eq!(back.backswing[0].trigger, Trigger::Below(80.0));
    }
}
