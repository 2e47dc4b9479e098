pub mod geometry;
pub mod landmarks;
pub mod types;

pub use types::{Keypoint, PoseFrame, PoseSequence};
