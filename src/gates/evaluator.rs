//! Gate evaluation over a validated context profile.

use super::catalog::{Condition, GATE_CATALOG, GateRule, Threshold, gate_rule};
use crate::error::Result;
use crate::model::{ContextField, ContextProfile, FieldValue, Pillar};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A gate whose predicate held for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredGate {
    pub id: String,
    pub title: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pillar: Option<Pillar>,
    pub actions: Vec<String>,
    /// Literal values of the fields whose conditions held, in predicate order
    pub explain: IndexMap<String, FieldValue>,
}

impl TriggeredGate {
    fn from_rule(rule: &GateRule, profile: &ContextProfile) -> Self {
        let explain = rule
            .predicate
            .conditions()
            .iter()
            .filter(|c| c.holds(profile))
            .map(|c| {
                let field = c.field();
                (field.key().to_string(), profile.value(field))
            })
            .collect();

        Self {
            id: rule.id.to_string(),
            title: rule.title.to_string(),
            reason: rule.reason.to_string(),
            pillar: rule.pillar,
            actions: rule.actions.iter().map(ToString::to_string).collect(),
            explain,
        }
    }
}

/// One condition of a gate checked against a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionCheck {
    pub field: ContextField,
    pub actual: FieldValue,
    pub required: Threshold,
    pub met: bool,
}

/// Full breakdown of a gate for a profile, fired or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateExplanation {
    pub id: &'static str,
    pub title: &'static str,
    /// `any` or `all`
    pub combinator: &'static str,
    pub triggered: bool,
    pub conditions: Vec<ConditionCheck>,
}

/// Evaluates a gate rule table against context profiles.
#[derive(Debug, Clone, Copy)]
pub struct GateEvaluator {
    rules: &'static [GateRule],
}

impl Default for GateEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl GateEvaluator {
    /// Evaluator over the built-in catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: GATE_CATALOG,
        }
    }

    /// Evaluator over a custom rule table.
    #[must_use]
    pub const fn with_rules(rules: &'static [GateRule]) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &'static [GateRule] {
        self.rules
    }

    /// Gates whose predicate holds, in table order.
    #[must_use]
    pub fn evaluate(&self, profile: &ContextProfile) -> Vec<TriggeredGate> {
        self.rules
            .iter()
            .filter(|rule| rule.predicate.holds(profile))
            .inspect(|rule| tracing::debug!("Gate {} triggered", rule.id))
            .map(|rule| TriggeredGate::from_rule(rule, profile))
            .collect()
    }

    /// Explain every rule in the table against a profile.
    #[must_use]
    pub fn explain_all(&self, profile: &ContextProfile) -> Vec<GateExplanation> {
        self.rules.iter().map(|r| explain_rule(r, profile)).collect()
    }
}

fn explain_rule(rule: &'static GateRule, profile: &ContextProfile) -> GateExplanation {
    let conditions = rule
        .predicate
        .conditions()
        .iter()
        .map(|c: &Condition| ConditionCheck {
            field: c.field(),
            actual: profile.value(c.field()),
            required: c.threshold(),
            met: c.holds(profile),
        })
        .collect();
    GateExplanation {
        id: rule.id,
        title: rule.title,
        combinator: rule.predicate.combinator(),
        triggered: rule.predicate.holds(profile),
        conditions,
    }
}

/// Triggered gates for a profile, in catalog order.
#[must_use]
pub fn evaluate_gates(profile: &ContextProfile) -> Vec<TriggeredGate> {
    GateEvaluator::new().evaluate(profile)
}

/// Validate a raw profile map, then evaluate.
///
/// An incomplete or invalid profile is rejected; a missing field is never
/// read as `0`.
pub fn evaluate_gates_from_map(raw: &Map<String, Value>) -> Result<Vec<TriggeredGate>> {
    let profile = ContextProfile::from_json_map(raw)?;
    Ok(evaluate_gates(&profile))
}

/// Breakdown of one catalog gate against a profile.
#[must_use]
pub fn explain_gate(gate_id: &str, profile: &ContextProfile) -> Option<GateExplanation> {
    gate_rule(gate_id).map(|rule| explain_rule(rule, profile))
}

/// Threshold a catalog gate requires of a field, by wire keys.
///
/// Returns `None` when the gate is unknown or does not read the field.
#[must_use]
pub fn required_threshold(gate_id: &str, field: &str) -> Option<Threshold> {
    let field = ContextField::from_key(field)?;
    gate_rule(gate_id)?.threshold_for(field)
}

/// The (gate id, field) to threshold lookup, built from the catalog predicates.
#[must_use]
pub fn threshold_table() -> BTreeMap<(&'static str, ContextField), Threshold> {
    GATE_CATALOG
        .iter()
        .flat_map(|rule| {
            rule.predicate
                .conditions()
                .iter()
                .map(move |c| ((rule.id, c.field()), c.threshold()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::Predicate;
    use crate::model::{Dimension, Flag};
    use crate::utils::Level;
    use serde_json::json;

    fn level(n: u8) -> Level {
        Level::new(n).expect("level")
    }

    fn ids(gates: &[TriggeredGate]) -> Vec<&str> {
        gates.iter().map(|g| g.id.as_str()).collect()
    }

    #[test]
    fn test_quiet_profile_fires_nothing() {
        let profile = ContextProfile::uniform(level(2));
        assert!(evaluate_gates(&profile).is_empty());
    }

    #[test]
    fn test_high_regulation_fires_hitl_and_assurance() {
        let profile = ContextProfile::uniform(level(2))
            .with_level(Dimension::RegulatoryIntensity, level(4))
            .with_level(Dimension::SafetyCriticality, level(4));
        let gates = evaluate_gates(&profile);
        assert_eq!(ids(&gates), vec!["human_in_the_loop", "assurance_cadence"]);

        let hitl = &gates[0];
        assert_eq!(hitl.pillar, Some(Pillar::Risk));
        assert_eq!(hitl.explain.len(), 2);
        assert_eq!(
            hitl.explain.get("regulatory_intensity"),
            Some(&FieldValue::Level(level(4)))
        );
        assert!(!hitl.actions.is_empty());
    }

    #[test]
    fn test_explain_lists_only_conditions_that_held() {
        let profile = ContextProfile::uniform(level(0))
            .with_level(Dimension::BuildReadiness, level(3))
            .with_flag(Flag::EdgeOperations, true);
        let gates = evaluate_gates(&profile);
        assert_eq!(ids(&gates), vec!["edge_resilience"]);
        let keys: Vec<&String> = gates[0].explain.keys().collect();
        assert_eq!(keys, vec!["edge_operations"]);
        assert_eq!(
            gates[0].explain.get("edge_operations"),
            Some(&FieldValue::Flag(true))
        );
    }

    #[test]
    fn test_catalog_order_preserved() {
        let profile = ContextProfile::uniform(level(4))
            .with_flag(Flag::EdgeOperations, true)
            .with_flag(Flag::ProcurementConstraints, true)
            .with_level(Dimension::BuildReadiness, level(0));
        let gates = evaluate_gates(&profile);
        let expected: Vec<&str> = GATE_CATALOG.iter().map(|g| g.id).collect();
        assert_eq!(ids(&gates), expected);
    }

    #[test]
    fn test_from_map_rejects_incomplete_profile() {
        let raw = json!({"regulatory_intensity": 4});
        let err = evaluate_gates_from_map(raw.as_object().expect("object")).expect_err("reject");
        assert!(err.is_profile_error());
    }

    #[test]
    fn test_required_threshold_lookup() {
        assert_eq!(
            required_threshold("human_in_the_loop", "safety_criticality"),
            Some(Threshold::AtLeast(3))
        );
        assert_eq!(
            required_threshold("capability_partnering", "build_readiness"),
            Some(Threshold::AtMost(1))
        );
        assert_eq!(
            required_threshold("vendor_due_diligence", "procurement_constraints"),
            Some(Threshold::Equals(true))
        );
        assert_eq!(required_threshold("human_in_the_loop", "clock_speed"), None);
        assert_eq!(required_threshold("no_such_gate", "clock_speed"), None);
        assert_eq!(required_threshold("human_in_the_loop", "team_size"), None);
    }

    /// Sitting exactly on a displayed threshold must satisfy that condition,
    /// and stepping one unit past it must not.
    #[test]
    fn test_threshold_table_agrees_with_predicates() {
        for ((gate_id, field), threshold) in threshold_table() {
            let rule = gate_rule(gate_id).expect("catalog gate");
            let condition = rule
                .predicate
                .conditions()
                .iter()
                .find(|c| c.field() == field)
                .expect("condition for field");

            let (on, off) = match (field, threshold) {
                (ContextField::Dimension(d), Threshold::AtLeast(n)) => {
                    let base = ContextProfile::uniform(level(0));
                    (
                        base.with_level(d, level(n)),
                        n.checked_sub(1).map(|m| base.with_level(d, level(m))),
                    )
                }
                (ContextField::Dimension(d), Threshold::AtMost(n)) => {
                    let base = ContextProfile::uniform(level(4));
                    (
                        base.with_level(d, level(n)),
                        Level::new(n + 1).map(|m| base.with_level(d, m)),
                    )
                }
                (ContextField::Flag(f), Threshold::Equals(v)) => {
                    let base = ContextProfile::uniform(level(0));
                    (base.with_flag(f, v), Some(base.with_flag(f, !v)))
                }
                other => panic!("threshold kind does not match field: {other:?}"),
            };

            assert!(condition.holds(&on), "{gate_id}/{field} at threshold");
            if let Some(off) = off {
                assert!(!condition.holds(&off), "{gate_id}/{field} past threshold");
            }
        }
    }

    #[test]
    fn test_raising_regulation_never_clears_a_gate() {
        let base = ContextProfile::uniform(level(1))
            .with_level(Dimension::RegulatoryIntensity, level(2));
        let raised = base.with_level(Dimension::RegulatoryIntensity, level(3));
        let before = evaluate_gates(&base);
        let after = evaluate_gates(&raised);
        for gate in &before {
            assert!(after.iter().any(|g| g.id == gate.id), "{} stopped firing", gate.id);
        }
        assert!(after.iter().any(|g| g.id == "human_in_the_loop"));
    }

    #[test]
    fn test_explain_gate_reports_unmet_conditions() {
        let profile = ContextProfile::uniform(level(2));
        let explanation = explain_gate("cost_guardrails", &profile).expect("known gate");
        assert!(!explanation.triggered);
        assert_eq!(explanation.combinator, "any");
        assert_eq!(explanation.conditions.len(), 2);
        assert!(explanation.conditions.iter().all(|c| !c.met));
        assert_eq!(explanation.conditions[0].required, Threshold::AtLeast(3));

        assert!(explain_gate("missing", &profile).is_none());
        assert_eq!(
            GateEvaluator::new().explain_all(&profile).len(),
            GATE_CATALOG.len()
        );
    }

    #[test]
    fn test_custom_rule_table() {
        static RULES: &[GateRule] = &[GateRule {
            id: "fast_market",
            title: "Fast market",
            reason: "Clock speed is high",
            pillar: None,
            predicate: Predicate::All(&[Condition::AtLeast(
                Dimension::ClockSpeed,
                4,
            )]),
            actions: &["Shorten review cycles"],
        }];
        let evaluator = GateEvaluator::with_rules(RULES);
        let profile = ContextProfile::uniform(level(4));
        let gates = evaluator.evaluate(&profile);
        assert_eq!(ids(&gates), vec!["fast_market"]);
        let text = serde_json::to_string(&gates[0]).expect("serialize");
        assert!(!text.contains("pillar"));
    }
}
