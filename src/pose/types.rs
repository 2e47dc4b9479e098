//! Pose data supplied by the upstream detection collaborator.
//!
//! One swing attempt arrives as a `PoseSequence`: video-ordered frames, each
//! carrying the body landmarks the detector found. The pipeline never mutates
//! these; everything downstream is derived.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::pose::landmarks;

/// A single detected body landmark within one frame.
///
/// Identity is the landmark `name` (see [`crate::pose::landmarks`]); names are
/// unique within a frame's keypoint set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keypoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Detection confidence in [0, 1].
    pub visibility: f64,
}

impl Keypoint {
    /// Position as a vector, for the geometry helpers.
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Whether this landmark is confident enough to measure against.
    pub fn is_visible(&self, min_visibility: f64) -> bool {
        self.visibility >= min_visibility
    }
}

/// One captured pose at a video timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseFrame {
    pub frame_index: u64,
    /// Seconds from the start of the clip.
    pub timestamp_secs: f64,
    pub keypoints: Vec<Keypoint>,
}

impl PoseFrame {
    /// Find a landmark by name.
    pub fn keypoint(&self, name: &str) -> Option<&Keypoint> {
        self.keypoints.iter().find(|kp| kp.name == name)
    }

    /// Find a landmark that clears the visibility gate.
    pub fn visible_keypoint(&self, name: &str, min_visibility: f64) -> Option<&Keypoint> {
        self.keypoint(name).filter(|kp| kp.is_visible(min_visibility))
    }
}

/// Time-ordered frames for one swing attempt, plus the calibration scale the
/// capture side measured (centimeters per input coordinate unit).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseSequence {
    pub frames: Vec<PoseFrame>,
    #[serde(default = "default_cm_per_unit")]
    pub cm_per_unit: f64,
}

fn default_cm_per_unit() -> f64 {
    1.0
}

impl PoseSequence {
    pub fn new(frames: Vec<PoseFrame>, cm_per_unit: f64) -> Self {
        Self { frames, cm_per_unit }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Structural validation, run once at pipeline entry.
    ///
    /// Rejects anything the pipeline cannot reason about: an empty sequence,
    /// timestamps that do not strictly increase, non-finite coordinates,
    /// visibility outside [0, 1], or a non-positive calibration scale. Partial
    /// landmark coverage is fine; that degrades per-metric later instead.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.frames.is_empty() {
            return Err(AnalysisError::InvalidInput("empty pose sequence".into()));
        }
        if !self.cm_per_unit.is_finite() || self.cm_per_unit <= 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "calibration scale must be positive and finite, got {}",
                self.cm_per_unit
            )));
        }

        let mut prev_timestamp = f64::NEG_INFINITY;
        for frame in &self.frames {
            if !frame.timestamp_secs.is_finite() || frame.timestamp_secs <= prev_timestamp {
                return Err(AnalysisError::InvalidInput(format!(
                    "timestamps must strictly increase (frame {} at {}s)",
                    frame.frame_index, frame.timestamp_secs
                )));
            }
            prev_timestamp = frame.timestamp_secs;

            for kp in &frame.keypoints {
                if !(kp.x.is_finite() && kp.y.is_finite() && kp.z.is_finite()) {
                    return Err(AnalysisError::InvalidInput(format!(
                        "non-finite coordinates for '{}' in frame {}",
                        kp.name, frame.frame_index
                    )));
                }
                if !kp.visibility.is_finite() || !(0.0..=1.0).contains(&kp.visibility) {
                    return Err(AnalysisError::InvalidInput(format!(
                        "visibility {} for '{}' in frame {} is outside [0, 1]",
                        kp.visibility, kp.name, frame.frame_index
                    )));
                }
            }
        }
        Ok(())
    }

    /// Measurement landmarks absent from every frame. Metrics that need one
    /// will come back `Unavailable`; this names the gaps in one place.
    pub fn missing_landmarks(&self) -> Vec<&'static str> {
        landmarks::MEASUREMENT_LANDMARKS
            .iter()
            .copied()
            .filter(|&name| !self.frames.iter().any(|frame| frame.keypoint(name).is_some()))
            .collect()
    }

    /// Clip length in seconds (0 for a single frame).
    pub fn duration_secs(&self) -> f64 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) => last.timestamp_secs - first.timestamp_secs,
            _ => 0.0,
        }
    }
}
