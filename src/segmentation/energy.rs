//! Per-frame motion signals the boundary detector reads.

use crate::pose::geometry;
use crate::pose::landmarks::{LEFT_WRIST, RIGHT_WRIST};
use crate::pose::PoseSequence;

/// Mean wrist speed per frame, in coordinate units per second.
///
/// Speeds come from central differences over the timestamps (one-sided at the
/// endpoints). A wrist contributes only when it clears the visibility gate in
/// both frames of the difference; a frame where neither wrist is usable gets
/// energy 0.
pub fn motion_energy(seq: &PoseSequence, min_visibility: f64) -> Vec<f64> {
    let n = seq.frames.len();
    let mut energy = vec![0.0; n];
    if n < 2 {
        return energy;
    }

    for i in 0..n {
        let (prev, next) = match i {
            0 => (0, 1),
            _ if i == n - 1 => (n - 2, n - 1),
            _ => (i - 1, i + 1),
        };
        let dt = seq.frames[next].timestamp_secs - seq.frames[prev].timestamp_secs;
        if dt <= 0.0 {
            continue;
        }

        let mut total = 0.0;
        let mut count = 0;
        for name in [LEFT_WRIST, RIGHT_WRIST] {
            let a = seq.frames[prev].visible_keypoint(name, min_visibility);
            let b = seq.frames[next].visible_keypoint(name, min_visibility);
            if let (Some(a), Some(b)) = (a, b) {
                total += geometry::distance(a.position(), b.position()) / dt;
                count += 1;
            }
        }
        if count > 0 {
            energy[i] = total / count as f64;
        }
    }
    energy
}

/// Mean wrist height per frame, `None` where no wrist is usable.
///
/// Input y grows downward, so heights are negated: larger means hands higher.
/// The backswing top shows up as a local maximum of this signal.
pub fn hand_height(seq: &PoseSequence, min_visibility: f64) -> Vec<Option<f64>> {
    seq.frames
        .iter()
        .map(|frame| {
            let mut total = 0.0;
            let mut count = 0;
            for name in [LEFT_WRIST, RIGHT_WRIST] {
                if let Some(kp) = frame.visible_keypoint(name, min_visibility) {
                    total += -kp.y;
                    count += 1;
                }
            }
            if count > 0 {
                Some(total / count as f64)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Keypoint, PoseFrame, PoseSequence};

    fn wrist_frame(index: u64, timestamp_secs: f64, x: f64, y: f64, visibility: f64) -> PoseFrame {
        PoseFrame {
            frame_index: index,
            timestamp_secs,
            keypoints: vec![Keypoint {
                name: "right_wrist".into(),
                x,
                y,
                z: 0.0,
                visibility,
            }],
        }
    }

    #[test]
    fn stationary_wrist_has_zero_energy() {
        let seq = PoseSequence::new(
            (0..4)
                .map(|i| wrist_frame(i, i as f64 / 30.0, 0.5, 0.5, 1.0))
                .collect(),
            1.0,
        );
        let energy = motion_energy(&seq, 0.5);
        assert!(energy.iter().all(|e| *e == 0.0));
    }

    #[test]
    fn fast_frame_dominates_energy() {
        // Wrist jumps between frames 2 and 3: energy should peak there.
        let positions = [0.0, 0.0, 0.0, 0.8, 0.8, 0.8];
        let seq = PoseSequence::new(
            positions
                .iter()
                .enumerate()
                .map(|(i, x)| wrist_frame(i as u64, i as f64 / 30.0, *x, 0.5, 1.0))
                .collect(),
            1.0,
        );
        let energy = motion_energy(&seq, 0.5);
        let peak = energy
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).expect("finite energies"))
            .map(|(i, _)| i)
            .expect("non-empty");
        assert!(peak == 2 || peak == 3, "peak at {peak}, energy {energy:?}");
    }

    #[test]
    fn occluded_wrist_contributes_nothing() {
        let seq = PoseSequence::new(
            (0..4)
                .map(|i| wrist_frame(i, i as f64 / 30.0, i as f64, 0.5, 0.2))
                .collect(),
            1.0,
        );
        assert!(motion_energy(&seq, 0.5).iter().all(|e| *e == 0.0));
        assert!(hand_height(&seq, 0.5).iter().all(|h| h.is_none()));
    }

    #[test]
    fn hand_height_flips_image_y() {
        let seq = PoseSequence::new(vec![wrist_frame(0, 0.0, 0.5, 0.25, 1.0)], 1.0);
        let heights = hand_height(&seq, 0.5);
        assert_eq!(heights[0], Some(-0.25));
    }
}
