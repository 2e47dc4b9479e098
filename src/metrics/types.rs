//! Metric results.

use serde::{Deserialize, Serialize};

/// One measurement outcome.
///
/// `Unavailable` means the required landmarks were missing or below the
/// visibility gate. It is never a stand-in for zero and never a judgment on
/// the swing; scorers skip it, feedback rules ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Available(f64),
    /// Serializes as JSON `null`.
    Unavailable,
}

impl MetricValue {
    pub fn value(&self) -> Option<f64> {
        match self {
            MetricValue::Available(v) => Some(*v),
            MetricValue::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MetricValue::Available(_))
    }
}

/// The six measurements, for rule tables and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    HipRotation,
    ShoulderTurn,
    HeadMovement,
    SpineAngle,
    ArmExtension,
    WeightTransfer,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::HipRotation,
        MetricKind::ShoulderTurn,
        MetricKind::HeadMovement,
        MetricKind::SpineAngle,
        MetricKind::ArmExtension,
        MetricKind::WeightTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::HipRotation => "hipRotation",
            MetricKind::ShoulderTurn => "shoulderTurn",
            MetricKind::HeadMovement => "headMovement",
            MetricKind::SpineAngle => "spineAngle",
            MetricKind::ArmExtension => "armExtension",
            MetricKind::WeightTransfer => "weightTransfer",
        }
    }
}

/// All measurements for one swing, computed once, immutable after that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingMetrics {
    pub hip_rotation_deg: MetricValue,
    pub shoulder_turn_deg: MetricValue,
    pub head_movement_cm: MetricValue,
    pub spine_angle_deg: MetricValue,
    /// Fraction of the address-posture arm reach, 0 to 1.
    pub arm_extension: MetricValue,
    /// Hip shift as a fraction of stance width, 0 to 1.
    pub weight_transfer: MetricValue,
}

impl SwingMetrics {
    /// The fully degraded record, every metric `Unavailable`.
    pub fn unavailable() -> Self {
        Self {
            hip_rotation_deg: MetricValue::Unavailable,
            shoulder_turn_deg: MetricValue::Unavailable,
            head_movement_cm: MetricValue::Unavailable,
            spine_angle_deg: MetricValue::Unavailable,
            arm_extension: MetricValue::Unavailable,
            weight_transfer: MetricValue::Unavailable,
        }
    }

    pub fn get(&self, kind: MetricKind) -> MetricValue {
        match kind {
            MetricKind::HipRotation => self.hip_rotation_deg,
            MetricKind::ShoulderTurn => self.shoulder_turn_deg,
            MetricKind::HeadMovement => self.head_movement_cm,
            MetricKind::SpineAngle => self.spine_angle_deg,
            MetricKind::ArmExtension => self.arm_extension,
            MetricKind::WeightTransfer => self.weight_transfer,
        }
    }

    /// True when any metric degraded; surfaces as the reduced-confidence flag.
    pub fn any_unavailable(&self) -> bool {
        MetricKind::ALL.iter().any(|kind| !self.get(*kind).is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_serializes_as_number_unavailable_as_null() {
        let json = serde_json::to_string(&MetricValue::Available(3.2)).expect("serialize");
        assert_eq!(json, "3.2");
        let json = serde_json::to_string(&MetricValue::Unavailable).expect("serialize");
        assert_eq!(json, "null");
    }

    #[test]
    fn null_deserializes_as_unavailable() {
        let value: MetricValue = serde_json::from_str("null").expect("deserialize");
        assert_eq!(value, MetricValue::Unavailable);
        let value: MetricValue = serde_json::from_str("87.0").expect("deserialize");
        assert_eq!(value, MetricValue::Available(87.0));
    }

    #[test]
    fn unavailable_record_reports_reduced_confidence() {
        assert!(SwingMetrics::unavailable().any_unavailable());
    }

    #[test]
    fn get_matches_fields() {
        let mut metrics = SwingMetrics::unavailable();
        metrics.shoulder_turn_deg = MetricValue::Available(102.0);
        assert_eq!(
            metrics.get(MetricKind::ShoulderTurn),
            MetricValue::Available(102.0)
        );
        assert_eq!(metrics.get(MetricKind::HipRotation), MetricValue::Unavailable);
    }
}
