//! Vector math over landmark positions.
//!
//! Coordinates follow the detector's image convention: x right, y down,
//! z toward the camera. The ground plane is therefore spanned by x and z,
//! and "up" is negative y.

/// Angle guards: vectors shorter than this have no defined direction.
const EPS: f64 = 1e-9;

pub fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        (a[0] + b[0]) / 2.0,
        (a[1] + b[1]) / 2.0,
        (a[2] + b[2]) / 2.0,
    ]
}

pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let d = sub(a, b);
    (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
}

/// Projection onto the ground plane (drops the vertical axis).
pub fn horizontal(v: [f64; 3]) -> (f64, f64) {
    (v[0], v[2])
}

pub fn horizontal_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let (ax, az) = horizontal(a);
    let (bx, bz) = horizontal(b);
    ((ax - bx).powi(2) + (az - bz).powi(2)).sqrt()
}

/// Unsigned angle between two 3D vectors, in degrees.
///
/// Returns `None` when either vector is (near) zero length, where the angle
/// is undefined. The dot product is clamped to [-1, 1] before `acos` so
/// floating point drift on parallel vectors cannot produce NaN.
pub fn angle_between_deg(a: [f64; 3], b: [f64; 3]) -> Option<f64> {
    let mag_a = (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt();
    let mag_b = (b[0] * b[0] + b[1] * b[1] + b[2] * b[2]).sqrt();
    if mag_a < EPS || mag_b < EPS {
        return None;
    }
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
    let cos = (dot / (mag_a * mag_b)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Unsigned angle between two ground-plane vectors, in degrees.
pub fn angle_between_2d_deg(a: (f64, f64), b: (f64, f64)) -> Option<f64> {
    let mag_a = (a.0 * a.0 + a.1 * a.1).sqrt();
    let mag_b = (b.0 * b.0 + b.1 * b.1).sqrt();
    if mag_a < EPS || mag_b < EPS {
        return None;
    }
    let dot = a.0 * b.0 + a.1 * b.1;
    let cos = (dot / (mag_a * mag_b)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn midpoint_is_halfway() {
        let m = midpoint([0.0, 0.0, 0.0], [2.0, 4.0, -6.0]);
        assert!(close(m[0], 1.0) && close(m[1], 2.0) && close(m[2], -3.0));
    }

    #[test]
    fn distance_is_euclidean() {
        assert!(close(distance([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]), 5.0));
    }

    #[test]
    fn horizontal_distance_ignores_vertical() {
        let a = [0.0, 10.0, 0.0];
        let b = [3.0, -10.0, 4.0];
        assert!(close(horizontal_distance(a, b), 5.0));
    }

    #[test]
    fn right_angle_is_ninety_degrees() {
        let angle = angle_between_deg([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(close(angle.expect("angle should be defined"), 90.0));
    }

    #[test]
    fn parallel_vectors_are_zero_degrees() {
        let angle = angle_between_deg([0.3, 0.3, 0.3], [0.6, 0.6, 0.6]);
        // acos is ill-conditioned near cos = 1, so parallel inputs can come
        // back a microdegree or two above zero.
        assert!(angle.expect("angle should be defined") < 1e-4);
    }

    #[test]
    fn opposite_vectors_are_half_turn() {
        let angle = angle_between_2d_deg((1.0, 0.0), (-1.0, 0.0));
        assert!(close(angle.expect("angle should be defined"), 180.0));
    }

    #[test]
    fn degenerate_vectors_have_no_angle() {
        assert!(angle_between_deg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]).is_none());
        assert!(angle_between_2d_deg((0.0, 0.0), (0.0, 1.0)).is_none());
    }

    #[test]
    fn quarter_turn_in_ground_plane() {
        let angle = angle_between_2d_deg((1.0, 0.0), (0.0, 1.0));
        assert!(close(angle.expect("angle should be defined"), 90.0));
    }
}
