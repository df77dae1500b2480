//! Full assessment: scores, gates, analysis, insights and overlay.

use super::input::AssessmentInput;
use crate::error::Result;
use crate::gates::{TriggeredGate, evaluate_gates};
use crate::insights::{Insight, Priority, generate_insights};
use crate::model::{Pillar, PillarStage, ResponseParseMode};
use crate::overlay::ValueOverlay;
use crate::scoring::{MaturityAnalysis, PillarScores, analyze_maturity, score_pillars};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version of the scoring engine stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Knobs for a single assessment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentOptions {
    /// Build the value overlay when a profile is present
    pub include_overlay: bool,
}

impl Default for AssessmentOptions {
    fn default() -> Self {
        Self {
            include_overlay: true,
        }
    }
}

/// Everything the engine derives from one assessment snapshot.
///
/// Serialization is deterministic: identical inputs produce identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub engine_version: String,
    pub input_fingerprint: String,
    pub scores: PillarScores,
    /// Pillars still waiting for answers
    pub missing_pillars: Vec<Pillar>,
    pub analysis: MaturityAnalysis,
    pub pillar_stages: BTreeMap<Pillar, PillarStage>,
    pub gates: Vec<TriggeredGate>,
    pub insights: Vec<Insight>,
    pub priorities: Vec<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_overlay: Option<ValueOverlay>,
}

impl AssessmentReport {
    /// True when every pillar has been scored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_pillars.is_empty()
    }

    #[must_use]
    pub fn has_gates(&self) -> bool {
        !self.gates.is_empty()
    }
}

/// Run the engine over a validated input.
#[must_use]
pub fn run_assessment(input: &AssessmentInput, options: &AssessmentOptions) -> AssessmentReport {
    let scores = score_pillars(&input.responses);
    let analysis = analyze_maturity(&scores);
    let gates = input
        .profile
        .as_ref()
        .map(evaluate_gates)
        .unwrap_or_default();
    let insight_set = generate_insights(&scores, &gates, input.profile.as_ref());
    let value_overlay = input
        .profile
        .as_ref()
        .filter(|_| options.include_overlay)
        .map(ValueOverlay::from_profile);

    tracing::info!(
        "Assessed {} pillar(s), {} gate(s), {} insight(s)",
        scores.len(),
        gates.len(),
        insight_set.insights.len()
    );

    AssessmentReport {
        engine_version: ENGINE_VERSION.to_string(),
        input_fingerprint: input.fingerprint(),
        missing_pillars: scores.missing().collect(),
        pillar_stages: scores.stages(),
        scores,
        analysis,
        gates,
        insights: insight_set.insights,
        priorities: insight_set.priorities,
        value_overlay,
    }
}

/// Parse, validate and assess a JSON document in one step.
pub fn assess_str(
    text: &str,
    mode: ResponseParseMode,
    options: &AssessmentOptions,
) -> Result<AssessmentReport> {
    let input = AssessmentInput::from_json_str(text, mode)?;
    Ok(run_assessment(&input, options))
}
