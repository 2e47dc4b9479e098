pub mod rules;
pub mod synthesizer;

pub use rules::{FeedbackKind, FeedbackRule, FeedbackRules};
pub use synthesizer::{AnalysisFeedback, RuleSynthesizer, Synthesizer};
