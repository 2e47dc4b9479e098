//! The six metric formulas.
//!
//! Everything is measured at three reference frames: address (last setup
//! frame), top (last backswing frame), and impact (middle frame of the
//! impact span). Each formula degrades independently: a missing or gated
//! landmark marks that one metric `Unavailable` and the rest still compute.

use crate::error::AnalysisError;
use crate::log_warn;
use crate::pose::geometry;
use crate::pose::landmarks::{
    HEAD, LEFT_ANKLE, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE, RIGHT_HIP, RIGHT_SHOULDER,
    RIGHT_WRIST,
};
use crate::pose::{PoseFrame, PoseSequence};
use crate::segmentation::{SwingPhase, SwingPhases};

use super::config::MetricsConfig;
use super::types::{MetricKind, MetricValue, SwingMetrics};

const ENABLE_LOGS: bool = true;

/// Shortest length a denominator may have before a ratio is meaningless.
const MIN_EXTENT: f64 = 1e-9;

/// Compute all six metrics for one segmented sequence.
///
/// Never fails; each metric that cannot be measured comes back `Unavailable`
/// with the reason logged.
pub fn compute_metrics(
    seq: &PoseSequence,
    phases: &SwingPhases,
    config: &MetricsConfig,
) -> SwingMetrics {
    let refs = ReferenceFrames::pick(seq, phases);
    SwingMetrics {
        hip_rotation_deg: to_metric(
            MetricKind::HipRotation,
            pair_rotation(&refs, config, LEFT_HIP, RIGHT_HIP),
        ),
        shoulder_turn_deg: to_metric(
            MetricKind::ShoulderTurn,
            pair_rotation(&refs, config, LEFT_SHOULDER, RIGHT_SHOULDER),
        ),
        head_movement_cm: to_metric(
            MetricKind::HeadMovement,
            head_movement(&refs, config, seq.cm_per_unit),
        ),
        spine_angle_deg: to_metric(MetricKind::SpineAngle, spine_angle(&refs, config)),
        arm_extension: to_metric(MetricKind::ArmExtension, arm_extension(&refs, config)),
        weight_transfer: to_metric(MetricKind::WeightTransfer, weight_transfer(&refs, config)),
    }
}

fn to_metric(kind: MetricKind, result: Result<f64, AnalysisError>) -> MetricValue {
    match result {
        Ok(value) => MetricValue::Available(value),
        Err(err) => {
            log_warn!("metrics: {} unavailable: {}", kind.as_str(), err);
            MetricValue::Unavailable
        }
    }
}

/// The three frames every formula samples.
struct ReferenceFrames<'a> {
    address: Option<&'a PoseFrame>,
    top: Option<&'a PoseFrame>,
    impact: Option<&'a PoseFrame>,
}

impl<'a> ReferenceFrames<'a> {
    fn pick(seq: &'a PoseSequence, phases: &SwingPhases) -> Self {
        let impact_frames = phases.frames(seq, SwingPhase::Impact);
        Self {
            address: phases.frames(seq, SwingPhase::Setup).last(),
            top: phases.frames(seq, SwingPhase::Backswing).last(),
            impact: impact_frames.get(impact_frames.len() / 2),
        }
    }

    fn address(&self) -> Result<&'a PoseFrame, AnalysisError> {
        self.address
            .ok_or_else(|| AnalysisError::InsufficientData("setup span has no frames".into()))
    }

    fn top(&self) -> Result<&'a PoseFrame, AnalysisError> {
        self.top
            .ok_or_else(|| AnalysisError::InsufficientData("backswing span has no frames".into()))
    }

    fn impact(&self) -> Result<&'a PoseFrame, AnalysisError> {
        self.impact
            .ok_or_else(|| AnalysisError::InsufficientData("impact span has no frames".into()))
    }
}

/// A landmark position, or the reason it cannot be used.
fn landmark(
    frame: &PoseFrame,
    name: &str,
    min_visibility: f64,
) -> Result<[f64; 3], AnalysisError> {
    frame
        .visible_keypoint(name, min_visibility)
        .map(|kp| kp.position())
        .ok_or_else(|| {
            AnalysisError::InsufficientData(format!(
                "'{}' missing or gated in frame {}",
                name, frame.frame_index
            ))
        })
}

/// Rotation of a left-right landmark pair between address and top, measured
/// in the ground plane, degrees in [0, 180].
fn pair_rotation(
    refs: &ReferenceFrames,
    config: &MetricsConfig,
    left: &str,
    right: &str,
) -> Result<f64, AnalysisError> {
    let address = refs.address()?;
    let top = refs.top()?;

    let at_address = geometry::sub(
        landmark(address, right, config.min_visibility)?,
        landmark(address, left, config.min_visibility)?,
    );
    let at_top = geometry::sub(
        landmark(top, right, config.min_visibility)?,
        landmark(top, left, config.min_visibility)?,
    );

    geometry::angle_between_2d_deg(geometry::horizontal(at_address), geometry::horizontal(at_top))
        .ok_or_else(|| {
            AnalysisError::InsufficientData(format!(
                "{}-{} axis has no horizontal extent",
                left, right
            ))
        })
}

/// 3D head displacement between address and impact, in centimeters.
fn head_movement(
    refs: &ReferenceFrames,
    config: &MetricsConfig,
    cm_per_unit: f64,
) -> Result<f64, AnalysisError> {
    let at_address = landmark(refs.address()?, HEAD, config.min_visibility)?;
    let at_impact = landmark(refs.impact()?, HEAD, config.min_visibility)?;
    Ok(geometry::distance(at_address, at_impact) * cm_per_unit)
}

/// Forward tilt of the hip-to-shoulder line at address, degrees from
/// vertical. Input y grows downward, so "up" is negative y.
fn spine_angle(refs: &ReferenceFrames, config: &MetricsConfig) -> Result<f64, AnalysisError> {
    let address = refs.address()?;
    let hips = geometry::midpoint(
        landmark(address, LEFT_HIP, config.min_visibility)?,
        landmark(address, RIGHT_HIP, config.min_visibility)?,
    );
    let shoulders = geometry::midpoint(
        landmark(address, LEFT_SHOULDER, config.min_visibility)?,
        landmark(address, RIGHT_SHOULDER, config.min_visibility)?,
    );
    geometry::angle_between_deg(geometry::sub(shoulders, hips), [0.0, -1.0, 0.0]).ok_or_else(
        || AnalysisError::InsufficientData("hip and shoulder midpoints coincide".into()),
    )
}

fn arm_reach(frame: &PoseFrame, wrist: &str, shoulder: &str, min_visibility: f64) -> Option<f64> {
    let w = frame.visible_keypoint(wrist, min_visibility)?;
    let s = frame.visible_keypoint(shoulder, min_visibility)?;
    Some(geometry::distance(w.position(), s.position()))
}

/// Wrist-to-shoulder distance at impact as a fraction of the same distance
/// at address (arms hang extended there, giving the anatomical maximum).
/// Averaged over the arms usable in both frames, clamped to [0, 1].
fn arm_extension(refs: &ReferenceFrames, config: &MetricsConfig) -> Result<f64, AnalysisError> {
    let address = refs.address()?;
    let impact = refs.impact()?;

    let mut total = 0.0;
    let mut arms = 0;
    for (wrist, shoulder) in [(LEFT_WRIST, LEFT_SHOULDER), (RIGHT_WRIST, RIGHT_SHOULDER)] {
        let full = arm_reach(address, wrist, shoulder, config.min_visibility);
        let now = arm_reach(impact, wrist, shoulder, config.min_visibility);
        if let (Some(full), Some(now)) = (full, now) {
            if full > MIN_EXTENT {
                total += now / full;
                arms += 1;
            }
        }
    }
    if arms == 0 {
        return Err(AnalysisError::InsufficientData(
            "no arm with a usable wrist and shoulder at both address and impact".into(),
        ));
    }
    Ok((total / arms as f64).clamp(0.0, 1.0))
}

/// Ground-plane shift of the hip midpoint between address and impact, as a
/// fraction of stance width at address, clamped to [0, 1].
fn weight_transfer(refs: &ReferenceFrames, config: &MetricsConfig) -> Result<f64, AnalysisError> {
    let address = refs.address()?;
    let impact = refs.impact()?;

    let hips_address = geometry::midpoint(
        landmark(address, LEFT_HIP, config.min_visibility)?,
        landmark(address, RIGHT_HIP, config.min_visibility)?,
    );
    let hips_impact = geometry::midpoint(
        landmark(impact, LEFT_HIP, config.min_visibility)?,
        landmark(impact, RIGHT_HIP, config.min_visibility)?,
    );
    let stance = geometry::horizontal_distance(
        landmark(address, LEFT_ANKLE, config.min_visibility)?,
        landmark(address, RIGHT_ANKLE, config.min_visibility)?,
    );
    if stance <= MIN_EXTENT {
        return Err(AnalysisError::InsufficientData(
            "stance width at address is zero".into(),
        ));
    }

    let shift = geometry::horizontal_distance(hips_address, hips_impact);
    Ok((shift / stance).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Keypoint, PoseSequence};
    use crate::segmentation::{segment_swing, SegmentStrategy, SegmenterConfig};

    fn kp(name: &str, x: f64, y: f64, z: f64) -> Keypoint {
        Keypoint { name: name.into(), x, y, z, visibility: 1.0 }
    }

    /// Neutral address pose: upright spine, hips and shoulders along x,
    /// arms hanging, half-unit stance.
    fn standard_pose(index: u64, timestamp_secs: f64) -> PoseFrame {
        PoseFrame {
            frame_index: index,
            timestamp_secs,
            keypoints: vec![
                kp(HEAD, 0.0, 0.2, 0.0),
                kp(LEFT_SHOULDER, -0.2, 0.4, 0.0),
                kp(RIGHT_SHOULDER, 0.2, 0.4, 0.0),
                kp(LEFT_HIP, -0.15, 0.9, 0.0),
                kp(RIGHT_HIP, 0.15, 0.9, 0.0),
                kp(LEFT_WRIST, -0.2, 1.0, 0.0),
                kp(RIGHT_WRIST, 0.2, 1.0, 0.0),
                kp(LEFT_ANKLE, -0.25, 1.6, 0.0),
                kp(RIGHT_ANKLE, 0.25, 1.6, 0.0),
            ],
        }
    }

    fn set(frame: &mut PoseFrame, name: &str, x: f64, y: f64, z: f64) {
        let kp = frame
            .keypoints
            .iter_mut()
            .find(|k| k.name == name)
            .expect("landmark present");
        kp.x = x;
        kp.y = y;
        kp.z = z;
    }

    /// Five frames, one per phase under the equal split: frame 0 = address,
    /// frame 1 = top, frame 3 = impact.
    fn five_frame_swing() -> (PoseSequence, SwingPhases) {
        let mut frames: Vec<PoseFrame> =
            (0..5).map(|i| standard_pose(i, i as f64 / 10.0)).collect();

        // Top: hips and shoulders turned a quarter turn into the z axis.
        set(&mut frames[1], LEFT_HIP, 0.0, 0.9, -0.15);
        set(&mut frames[1], RIGHT_HIP, 0.0, 0.9, 0.15);
        set(&mut frames[1], LEFT_SHOULDER, 0.0, 0.4, -0.2);
        set(&mut frames[1], RIGHT_SHOULDER, 0.0, 0.4, 0.2);

        // Impact: head drifts 0.05 units, wrists pull in to 90% reach, hip
        // midpoint shifts 0.1 units toward the target.
        set(&mut frames[3], HEAD, 0.03, 0.16, 0.0);
        set(&mut frames[3], LEFT_WRIST, -0.2, 0.94, 0.0);
        set(&mut frames[3], RIGHT_WRIST, 0.2, 0.94, 0.0);
        set(&mut frames[3], LEFT_HIP, -0.05, 0.9, 0.0);
        set(&mut frames[3], RIGHT_HIP, 0.25, 0.9, 0.0);

        let seq = PoseSequence::new(frames, 100.0);
        let config = SegmenterConfig {
            strategy: SegmentStrategy::EqualSplit,
            ..SegmenterConfig::default()
        };
        let phases = segment_swing(&seq, &config).expect("should segment");
        (seq, phases)
    }

    fn assert_close(value: MetricValue, expected: f64) {
        let v = value.value().expect("metric should be available");
        assert!((v - expected).abs() < 1e-6, "got {v}, expected {expected}");
    }

    #[test]
    fn rotations_measure_the_ground_plane_angle() {
        let (seq, phases) = five_frame_swing();
        let metrics = compute_metrics(&seq, &phases, &MetricsConfig::default());
        assert_close(metrics.hip_rotation_deg, 90.0);
        assert_close(metrics.shoulder_turn_deg, 90.0);
    }

    #[test]
    fn head_movement_is_scaled_to_centimeters() {
        let (seq, phases) = five_frame_swing();
        let metrics = compute_metrics(&seq, &phases, &MetricsConfig::default());
        // 0.05 units at 100 cm per unit.
        assert_close(metrics.head_movement_cm, 5.0);
    }

    #[test]
    fn upright_spine_is_zero_degrees() {
        let (seq, phases) = five_frame_swing();
        let metrics = compute_metrics(&seq, &phases, &MetricsConfig::default());
        assert_close(metrics.spine_angle_deg, 0.0);
    }

    #[test]
    fn tilted_spine_measures_from_vertical() {
        let (mut seq, _) = five_frame_swing();
        // Lean the shoulders half a unit toward the camera at address: the
        // hip-to-shoulder line runs 0.5 up and 0.5 forward, 45 degrees.
        set(&mut seq.frames[0], LEFT_SHOULDER, -0.2, 0.4, 0.5);
        set(&mut seq.frames[0], RIGHT_SHOULDER, 0.2, 0.4, 0.5);
        let config = SegmenterConfig {
            strategy: SegmentStrategy::EqualSplit,
            ..SegmenterConfig::default()
        };
        let phases = segment_swing(&seq, &config).expect("should segment");
        let metrics = compute_metrics(&seq, &phases, &MetricsConfig::default());
        assert_close(metrics.spine_angle_deg, 45.0);
    }

    #[test]
    fn arm_extension_is_the_reach_fraction() {
        let (seq, phases) = five_frame_swing();
        let metrics = compute_metrics(&seq, &phases, &MetricsConfig::default());
        // Reach 0.54 at impact against 0.6 at address, both arms.
        assert_close(metrics.arm_extension, 0.9);
    }

    #[test]
    fn weight_transfer_is_normalized_by_stance() {
        let (seq, phases) = five_frame_swing();
        let metrics = compute_metrics(&seq, &phases, &MetricsConfig::default());
        // Hip midpoint moved 0.1 units over a 0.5-unit stance.
        assert_close(metrics.weight_transfer, 0.2);
    }

    #[test]
    fn gated_landmark_degrades_only_its_metric() {
        let (mut seq, _) = five_frame_swing();
        let head = seq.frames[3]
            .keypoints
            .iter_mut()
            .find(|k| k.name == HEAD)
            .expect("head present");
        head.visibility = 0.3;

        let config = SegmenterConfig {
            strategy: SegmentStrategy::EqualSplit,
            ..SegmenterConfig::default()
        };
        let phases = segment_swing(&seq, &config).expect("should segment");
        let metrics = compute_metrics(&seq, &phases, &MetricsConfig::default());

        assert_eq!(metrics.head_movement_cm, MetricValue::Unavailable);
        assert!(metrics.hip_rotation_deg.is_available());
        assert!(metrics.arm_extension.is_available());
        assert!(metrics.weight_transfer.is_available());
        assert!(metrics.any_unavailable());
    }

    #[test]
    fn empty_reference_span_degrades_every_metric() {
        // Three frames cannot fill five spans; the empty setup span leaves
        // no address frame, which every formula needs.
        let frames: Vec<PoseFrame> = (0..3).map(|i| standard_pose(i, i as f64 / 10.0)).collect();
        let seq = PoseSequence::new(frames, 1.0);
        let phases = segment_swing(&seq, &SegmenterConfig::default()).expect("should segment");
        let metrics = compute_metrics(&seq, &phases, &MetricsConfig::default());
        for kind in MetricKind::ALL {
            assert_eq!(metrics.get(kind), MetricValue::Unavailable, "{}", kind.as_str());
        }
    }
}
