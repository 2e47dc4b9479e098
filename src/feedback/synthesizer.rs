//! Turning metrics and scores into coaching text.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::metrics::{MetricKind, SwingMetrics};
use crate::scoring::ScoreBreakdown;

use super::rules::{FeedbackKind, FeedbackRules};

pub const MAX_STRENGTHS: usize = 3;
pub const MAX_IMPROVEMENTS: usize = 3;
pub const MAX_DRILLS: usize = 2;

/// Backfill floor: a category with fewer matches than this gets the generic
/// fallback appended once.
const MIN_STRENGTHS: usize = 2;
const MIN_IMPROVEMENTS: usize = 2;

/// Coaching output: what went well, what to fix, what to practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFeedback {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub drills: Vec<String>,
}

/// Anything that can turn an analysis into coaching text.
///
/// `RuleSynthesizer` is the standalone deterministic implementation; a text
/// generation service can stand behind the same contract without the
/// pipeline knowing.
pub trait Synthesizer {
    fn synthesize(&self, metrics: &SwingMetrics, breakdown: &ScoreBreakdown) -> AnalysisFeedback;
}

/// Template synthesizer driven by `FeedbackRules`.
#[derive(Debug, Clone)]
pub struct RuleSynthesizer {
    rules: FeedbackRules,
}

impl RuleSynthesizer {
    pub fn new(rules: FeedbackRules) -> Result<Self, AnalysisError> {
        rules.validate()?;
        Ok(Self { rules })
    }
}

impl Default for RuleSynthesizer {
    fn default() -> Self {
        Self { rules: FeedbackRules::default() }
    }
}

impl Synthesizer for RuleSynthesizer {
    fn synthesize(&self, metrics: &SwingMetrics, breakdown: &ScoreBreakdown) -> AnalysisFeedback {
        let mut strengths = Vec::new();
        let mut improvements = Vec::new();
        let mut drills = Vec::new();
        let mut matched: Vec<MetricKind> = Vec::new();

        for rule in &self.rules.rules {
            if matched.contains(&rule.metric) {
                continue;
            }
            // Unavailable metrics match no rule.
            let Some(value) = metrics.get(rule.metric).value() else {
                continue;
            };
            if !rule.band.matches(value) {
                continue;
            }
            matched.push(rule.metric);

            let message = render(&rule.message, rule.metric, value);
            match rule.kind {
                FeedbackKind::Strength => strengths.push(message),
                FeedbackKind::Improvement => improvements.push(message),
            }
            if let Some(drill) = &rule.drill {
                drills.push(drill.clone());
            }
        }

        // Backfill sparse categories, then truncate to the published caps.
        if strengths.len() < MIN_STRENGTHS {
            let overall = format_number(breakdown.overall);
            strengths.push(self.rules.fallback_strength.replace("{overall}", &overall));
        }
        if improvements.len() < MIN_IMPROVEMENTS {
            improvements.push(self.rules.fallback_improvement.clone());
        }
        if drills.is_empty() {
            drills.push(self.rules.fallback_drill.clone());
        }

        strengths.truncate(MAX_STRENGTHS);
        improvements.truncate(MAX_IMPROVEMENTS);
        drills.truncate(MAX_DRILLS);

        AnalysisFeedback { strengths, improvements, drills }
    }
}

/// Fill the `{value}` placeholder, formatted per the metric's unit.
fn render(template: &str, metric: MetricKind, value: f64) -> String {
    let formatted = match metric {
        MetricKind::ArmExtension | MetricKind::WeightTransfer => {
            format!("{:.0}", value * 100.0)
        }
        _ => format_number(value),
    };
    template.replace("{value}", &formatted)
}

/// One decimal, whole numbers printed bare: 87 stays 87, 3.2 stays 3.2.
fn format_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
