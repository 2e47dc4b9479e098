//! Feedback rule tables.
//!
//! Like the scoring tables, coaching copy is data: each rule binds a metric
//! band to a message and optionally a drill, and configuration can replace
//! the whole set. The defaults carry the house coaching lines.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::metrics::MetricKind;
use crate::scoring::Trigger;

/// Whether a matched rule praises or corrects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackKind {
    Strength,
    Improvement,
}

/// One metric band mapped to a message, and optionally a drill.
///
/// `message` may contain `{value}`, replaced with the metric value formatted
/// per its unit: degrees and centimeters as plain numbers, fractions as
/// whole percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRule {
    pub metric: MetricKind,
    pub band: Trigger,
    pub kind: FeedbackKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drill: Option<String>,
}

impl FeedbackRule {
    pub fn strength(metric: MetricKind, band: Trigger, message: &str) -> Self {
        Self {
            metric,
            band,
            kind: FeedbackKind::Strength,
            message: message.into(),
            drill: None,
        }
    }

    pub fn improvement(metric: MetricKind, band: Trigger, message: &str) -> Self {
        Self {
            metric,
            band,
            kind: FeedbackKind::Improvement,
            message: message.into(),
            drill: None,
        }
    }

    pub fn with_drill(mut self, drill: &str) -> Self {
        self.drill = Some(drill.into());
        self
    }
}

/// The ordered rule list plus the generic fallbacks.
///
/// Rules are evaluated top to bottom; the first match per metric wins, so
/// overlapping bands for one metric resolve by declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackRules {
    pub rules: Vec<FeedbackRule>,
    /// Appended when fewer than two strengths matched; may contain
    /// `{overall}`.
    pub fallback_strength: String,
    /// Appended when fewer than two improvements matched.
    pub fallback_improvement: String,
    /// Appended when no rule contributed a drill.
    pub fallback_drill: String,
}

impl Default for FeedbackRules {
    fn default() -> Self {
        Self {
            rules: vec![
                FeedbackRule::strength(
                    MetricKind::HipRotation,
                    Trigger::Within { min: 45.0, max: 90.0 },
                    "Excellent hip rotation ({value}°) during the backswing, generating good power potential",
                ),
                FeedbackRule::improvement(
                    MetricKind::HipRotation,
                    Trigger::Above(90.0),
                    "Hip rotation is excessive ({value}°). Try to limit hip turn to 45-60° to maintain stability",
                ),
                FeedbackRule::strength(
                    MetricKind::ShoulderTurn,
                    Trigger::Within { min: 90.0, max: 110.0 },
                    "Great shoulder turn ({value}°), creating excellent coil and torque",
                ),
                FeedbackRule::improvement(
                    MetricKind::ShoulderTurn,
                    Trigger::Below(80.0),
                    "Shoulder turn is limited ({value}°). Work on increasing rotation to 90-110° for more power",
                )
                .with_drill(
                    "Wall drill: Practice turning your lead shoulder to touch a wall behind you to improve rotation",
                ),
                FeedbackRule::strength(
                    MetricKind::HeadMovement,
                    Trigger::AtMost(2.0),
                    "Excellent head stability ({value}cm movement), maintaining your spine angle through impact",
                ),
                FeedbackRule::improvement(
                    MetricKind::HeadMovement,
                    Trigger::Above(3.0),
                    "Head movement ({value}cm) is affecting consistency. Focus on keeping your head steady through the swing",
                )
                .with_drill(
                    "Mirror drill: Practice swings while watching your head position in a mirror to build awareness",
                ),
                FeedbackRule::strength(
                    MetricKind::WeightTransfer,
                    Trigger::AtLeast(0.7),
                    "Strong weight transfer ({value}%), showing good athletic movement",
                ),
                FeedbackRule::improvement(
                    MetricKind::WeightTransfer,
                    Trigger::Below(0.7),
                    "Weight transfer is limited ({value}%). Work on shifting pressure from back foot to front foot during downswing",
                ),
            ],
            fallback_strength: "Good overall swing foundation with a score of {overall}/10".into(),
            fallback_improvement: "Continue working on consistency and tempo to lower your scores"
                .into(),
            fallback_drill:
                "Practice with alignment sticks to reinforce proper swing plane and body angles"
                    .into(),
        }
    }
}

impl FeedbackRules {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for rule in &self.rules {
            rule.band.validate()?;
            if rule.message.is_empty() {
                return Err(AnalysisError::Config(format!(
                    "feedback rule for {} has an empty message",
                    rule.metric.as_str()
                )));
            }
        }
        if self.fallback_strength.is_empty()
            || self.fallback_improvement.is_empty()
            || self.fallback_drill.is_empty()
        {
            return Err(AnalysisError::Config(
                "feedback fallback messages must not be empty".into(),
            ));
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
    fn default_rules_are_valid() {
        assert!(FeedbackRules::default().validate().is_ok());
    }

    #[test]
    fn empty_message_rejected() {
        let mut rules = FeedbackRules::default();
        rules.rules[0].message.clear();
        assert_matches!(rules.validate(), Err(AnalysisError::Config(_)));
    }

    #[test]
    fn empty_fallback_rejected() {
        let mut rules = FeedbackRules::default();
        rules.fallback_drill.clear();
        assert_matches!(rules.validate(), Err(AnalysisError::Config(_)));
    }

    #[test]
    fn drills_survive_a_json_round_trip() {
        let rules = FeedbackRules::default();
        let json = serde_json::to_string(&rules).expect("serialize");
        let back: FeedbackRules = serde_json::from_str(&json).expect("deserialize");
        let wall_drill = back
            .rules
            .iter()
            .find_map(|r| r.drill.as_deref())
            .expect("a drill in the table");
        assert!(wall_drill.starts_with("Wall drill"));
    }
}
