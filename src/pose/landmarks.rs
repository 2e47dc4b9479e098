//! Landmark names the pipeline measures against.
//!
//! Detectors emit many more landmarks than these; anything not listed here is
//! carried through untouched and ignored by the measurement code.

pub const HEAD: &str = "head";
pub const LEFT_SHOULDER: &str = "left_shoulder";
pub const RIGHT_SHOULDER: &str = "right_shoulder";
pub const LEFT_HIP: &str = "left_hip";
pub const RIGHT_HIP: &str = "right_hip";
pub const LEFT_WRIST: &str = "left_wrist";
pub const RIGHT_WRIST: &str = "right_wrist";
pub const LEFT_ANKLE: &str = "left_ankle";
pub const RIGHT_ANKLE: &str = "right_ankle";

/// Every landmark some metric or the segmenter reads.
pub const MEASUREMENT_LANDMARKS: &[&str] = &[
    HEAD,
    LEFT_SHOULDER,
    RIGHT_SHOULDER,
    LEFT_HIP,
    RIGHT_HIP,
    LEFT_WRIST,
    RIGHT_WRIST,
    LEFT_ANKLE,
    RIGHT_ANKLE,
];
