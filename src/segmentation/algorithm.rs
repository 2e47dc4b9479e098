//! Swing phase boundary detection.
//!
//! The swing leaves a characteristic trace in wrist motion energy: near zero
//! at address, moderate through the backswing, a sharp global peak at impact,
//! then decay through the finish. Boundaries are read off that trace; when
//! the trace is too flat or the boundaries cannot be ordered, the sequence is
//! split into five equal chunks instead so callers always get a full set of
//! phases.

use crate::error::AnalysisError;
use crate::pose::PoseSequence;
use crate::{log_info, log_warn};

use super::config::{SegmentStrategy, SegmenterConfig};
use super::energy;
use super::phases::{PhaseSpan, SwingPhase, SwingPhases};

const ENABLE_LOGS: bool = true;

/// Split a validated sequence into the five swing phases.
///
/// Runs the strategy selected in `config`. The motion-energy strategy falls
/// back to the equal split for sequences shorter than `min_frames`, for flat
/// or noisy energy profiles, and for boundary candidates that cannot be put
/// in chronological order. An empty or structurally broken sequence is an
/// `InvalidInput` error, never a partial result.
pub fn segment_swing(
    seq: &PoseSequence,
    config: &SegmenterConfig,
) -> Result<SwingPhases, AnalysisError> {
    seq.validate()?;
    let n = seq.len();

    if config.strategy == SegmentStrategy::EqualSplit {
        return Ok(SwingPhases::from_spans(equal_split(n)));
    }
    if n < config.min_frames {
        log_info!(
            "segmentation: {} frames is under the {}-frame minimum, using equal split",
            n,
            config.min_frames
        );
        return Ok(SwingPhases::from_spans(equal_split(n)));
    }

    match detect_boundaries(seq, config) {
        Some(spans) => Ok(SwingPhases::from_spans(spans)),
        None => {
            log_warn!("segmentation: motion profile unusable, falling back to equal split");
            Ok(SwingPhases::from_spans(equal_split(n)))
        }
    }
}

/// Five near-equal chronological chunks covering every frame.
///
/// For fewer than five frames some chunks come out empty; that is the
/// documented degraded shape, downstream code treats the affected reference
/// frames as missing data.
fn equal_split(frame_count: usize) -> [PhaseSpan; 5] {
    let mut spans = [PhaseSpan { phase: SwingPhase::Setup, start: 0, end: 0 }; 5];
    for (i, phase) in SwingPhase::ALL.iter().enumerate() {
        spans[i] = PhaseSpan {
            phase: *phase,
            start: i * frame_count / 5,
            end: (i + 1) * frame_count / 5,
        };
    }
    spans
}

/// Place boundaries from the motion-energy trace.
///
/// Returns `None` whenever any placement rule fails; the caller falls back to
/// the equal split rather than emitting a partial or disordered set.
fn detect_boundaries(seq: &PoseSequence, config: &SegmenterConfig) -> Option<[PhaseSpan; 5]> {
    let n = seq.frames.len();
    let energy = energy::motion_energy(seq, config.min_visibility);

    let mean = energy.iter().sum::<f64>() / n as f64;
    if mean <= 0.0 {
        return None;
    }

    // Impact: global energy peak, earliest frame on ties.
    let mut peak = 0;
    for i in 1..n {
        if energy[i] > energy[peak] {
            peak = i;
        }
    }
    if energy[peak] < config.min_peak_ratio * mean {
        log_info!(
            "segmentation: peak energy {:.3} is under {:.1}x the mean {:.3}",
            energy[peak],
            config.min_peak_ratio,
            mean
        );
        return None;
    }
    // The peak needs room on both sides: three earlier phases, one frame of
    // follow-through.
    if peak < 3 || peak + 2 > n {
        return None;
    }

    // Address: quietest frame before the peak, earliest on ties. A pause at
    // the top of the backswing is also near-silent, so later candidates must
    // be strictly quieter to win.
    let mut address = 0;
    for i in 1..peak {
        if energy[i] < energy[address] {
            address = i;
        }
    }

    // Top of backswing: highest hands between takeaway and impact. Input y
    // grows downward, hence the negated signal from `hand_height`. When no
    // wrist is usable in the window, split the difference.
    let heights = energy::hand_height(seq, config.min_visibility);
    let mut top = None;
    let mut top_height = f64::NEG_INFINITY;
    for i in (address + 1)..peak {
        if let Some(h) = heights[i] {
            if h > top_height {
                top_height = h;
                top = Some(i);
            }
        }
    }
    let top = top.unwrap_or((address + peak) / 2);

    // Impact span: every frame within the half window of the peak time,
    // clamped so the downswing and follow-through keep at least one frame.
    let peak_time = seq.frames[peak].timestamp_secs;
    let mut impact_start = peak;
    while impact_start > 0
        && peak_time - seq.frames[impact_start - 1].timestamp_secs
            <= config.impact_half_window_secs
    {
        impact_start -= 1;
    }
    let mut impact_end = peak;
    while impact_end + 1 < n
        && seq.frames[impact_end + 1].timestamp_secs - peak_time <= config.impact_half_window_secs
    {
        impact_end += 1;
    }
    let impact_start = impact_start.max(top + 2);
    let impact_end = impact_end.min(n - 2);
    if peak < impact_start || peak > impact_end {
        return None;
    }

    // Follow-through: at least the frame after impact, extended until the
    // time cap runs out. Anything past the cap belongs to no phase.
    let impact_end_time = seq.frames[impact_end].timestamp_secs;
    let mut follow_end = impact_end + 2;
    while follow_end < n
        && seq.frames[follow_end].timestamp_secs - impact_end_time <= config.follow_through_secs
    {
        follow_end += 1;
    }

    let spans = [
        PhaseSpan { phase: SwingPhase::Setup, start: 0, end: address + 1 },
        PhaseSpan { phase: SwingPhase::Backswing, start: address + 1, end: top + 1 },
        PhaseSpan { phase: SwingPhase::Downswing, start: top + 1, end: impact_start },
        PhaseSpan { phase: SwingPhase::Impact, start: impact_start, end: impact_end + 1 },
        PhaseSpan { phase: SwingPhase::FollowThrough, start: impact_end + 1, end: follow_end },
    ];

    let mut prev_end = 0;
    for span in &spans {
        if span.is_empty() || span.start < prev_end || span.end > n {
            return None;
        }
        prev_end = span.end;
    }

    log_info!(
        "segmentation: address at frame {}, top at {}, impact {}..={}",
        address,
        top,
        impact_start,
        impact_end
    );
    Some(spans)
}
