//! Deterministic golf swing scoring and feedback from pose keypoints.
//!
//! A captured swing comes in as a [`PoseSequence`](pose::PoseSequence); the
//! pipeline segments it into the five swing phases, measures six body
//! mechanics metrics at fixed reference frames, scores each phase against a
//! penalty rule table, aggregates the phase scores into a weighted overall
//! score, and renders coaching feedback from template rules.
//!
//! Every stage is a pure function of its input and the
//! [`AnalyzerConfig`](config::AnalyzerConfig): no clocks, no randomness, no
//! I/O. The same clip with the same config always produces the same
//! [`SwingAnalysis`]. Ids and timestamps exist only in the
//! [`report`](report::AnalysisReport) envelope around a result.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod feedback;
pub mod metrics;
pub mod pose;
pub mod report;
pub mod scoring;
pub mod segmentation;

mod utils;

pub use analyzer::{SwingAnalysis, SwingAnalyzer};
pub use config::AnalyzerConfig;
pub use error::AnalysisError;
