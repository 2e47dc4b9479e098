pub mod algorithm;
pub mod config;
pub mod energy;
pub mod phases;

pub use algorithm::segment_swing;
pub use config::{SegmentStrategy, SegmenterConfig};
pub use phases::{PhaseSpan, SwingPhase, SwingPhases};
