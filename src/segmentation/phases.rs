//! The five swing phases and their frame spans.

use serde::{Deserialize, Serialize};

use crate::pose::{PoseFrame, PoseSequence};

/// Canonical swing phases, in temporal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwingPhase {
    Setup,
    Backswing,
    Downswing,
    Impact,
    FollowThrough,
}

impl SwingPhase {
    /// All phases in temporal order.
    pub const ALL: [SwingPhase; 5] = [
        SwingPhase::Setup,
        SwingPhase::Backswing,
        SwingPhase::Downswing,
        SwingPhase::Impact,
        SwingPhase::FollowThrough,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SwingPhase::Setup => "setup",
            SwingPhase::Backswing => "backswing",
            SwingPhase::Downswing => "downswing",
            SwingPhase::Impact => "impact",
            SwingPhase::FollowThrough => "followThrough",
        }
    }
}

/// Half-open frame range `[start, end)` assigned to one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseSpan {
    pub phase: SwingPhase,
    pub start: usize,
    pub end: usize,
}

impl PhaseSpan {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Segmentation of one sequence: five chronologically ordered,
/// non-overlapping spans, one per phase.
///
/// Gaps are allowed (trailing footage past the follow-through cap belongs to
/// no phase). A span may be empty only on the equal-split fallback path for
/// sequences shorter than five frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingPhases {
    spans: [PhaseSpan; 5],
}

impl SwingPhases {
    /// Build from ordered spans. Callers (the segmenter) are responsible for
    /// the ordering invariant; this only fixes the phase labels.
    pub(crate) fn from_spans(spans: [PhaseSpan; 5]) -> Self {
        Self { spans }
    }

    pub fn spans(&self) -> &[PhaseSpan; 5] {
        &self.spans
    }

    pub fn span(&self, phase: SwingPhase) -> &PhaseSpan {
        // ALL and spans share the same order, so index by position.
        let idx = SwingPhase::ALL
            .iter()
            .position(|p| *p == phase)
            .unwrap_or(0);
        &self.spans[idx]
    }

    /// The frames of `seq` belonging to `phase`.
    pub fn frames<'a>(&self, seq: &'a PoseSequence, phase: SwingPhase) -> &'a [PoseFrame] {
        let span = self.span(phase);
        let end = span.end.min(seq.frames.len());
        let start = span.start.min(end);
        &seq.frames[start..end]
    }
}
