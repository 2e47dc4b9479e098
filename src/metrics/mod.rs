pub mod compute;
pub mod config;
pub mod types;

pub use compute::compute_metrics;
pub use config::MetricsConfig;
pub use types::{MetricKind, MetricValue, SwingMetrics};
