#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Structurally unusable input: empty sequence, non-monotonic timestamps,
    /// non-finite coordinates. Always a hard failure.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Too few usable keypoints to compute a measurement. Degrades the
    /// affected metric to `Unavailable` instead of failing the pipeline.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Rule table or weight misconfiguration, detected at construction.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
