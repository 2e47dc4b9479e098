pub mod aggregate;
pub mod rules;
pub mod scorer;

pub use aggregate::{aggregate, summarize_score, PhaseWeights, ScoreBreakdown};
pub use rules::{PenaltyRule, ScoringRules, Trigger};
pub use scorer::{score_phases, PhaseScores};
