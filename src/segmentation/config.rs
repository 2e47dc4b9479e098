//! Tunables for swing phase segmentation.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// How phase boundaries are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentStrategy {
    /// Locate boundaries from wrist motion energy; fall back to an equal
    /// split when the motion profile is too flat to trust.
    MotionEnergy,
    /// Always partition the clip into five equal spans. Useful for fixtures
    /// and for captures known to be pre-trimmed.
    EqualSplit,
}

/// Configuration for [`segment_swing`](crate::segmentation::segment_swing).
///
/// Defaults are tuned for ~30fps captures of a full swing, address through
/// finish, with a second or two of padding either side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmenterConfig {
    pub strategy: SegmentStrategy,

    /// Below this frame count the motion profile is too sparse to place
    /// boundaries, so the segmenter goes straight to the equal split.
    pub min_frames: usize,

    /// Keypoints below this visibility are ignored when computing motion
    /// energy. Matches the gate the metric calculator uses.
    pub min_visibility: f64,

    /// The energy peak must exceed the sequence mean by this factor for the
    /// motion profile to count as a detectable swing.
    pub min_peak_ratio: f64,

    /// Frames within this many seconds of the energy peak belong to the
    /// impact phase.
    pub impact_half_window_secs: f64,

    /// Follow-through ends this many seconds past impact; trailing footage
    /// beyond that belongs to no phase.
    pub follow_through_secs: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            strategy: SegmentStrategy::MotionEnergy,
            min_frames: 15,
            min_visibility: 0.5,
            min_peak_ratio: 2.0,
            impact_half_window_secs: 0.05,
            follow_through_secs: 1.0,
        }
    }
}

impl SegmenterConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.min_frames < 5 {
            return Err(AnalysisError::Config(format!(
                "minFrames must be at least 5 (one frame per phase), got {}",
                self.min_frames
            )));
        }
        if !self.min_visibility.is_finite() || !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(AnalysisError::Config(format!(
                "minVisibility must be within [0, 1], got {}",
                self.min_visibility
            )));
        }
        if !self.min_peak_ratio.is_finite() || self.min_peak_ratio < 1.0 {
            return Err(AnalysisError::Config(format!(
                "minPeakRatio must be at least 1, got {}",
                self.min_peak_ratio
            )));
        }
        if !self.impact_half_window_secs.is_finite() || self.impact_half_window_secs < 0.0 {
            return Err(AnalysisError::Config(format!(
                "impactHalfWindowSecs must be non-negative, got {}",
                self.impact_half_window_secs
            )));
        }
        if !self.follow_through_secs.is_finite() || self.follow_through_secs <= 0.0 {
            return Err(AnalysisError::Config(format!(
                "followThroughSecs must be positive, got {}",
                self.follow_through_secs
            )));
        }
        Ok(())
    }
}
