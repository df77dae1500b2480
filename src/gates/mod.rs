//! Compliance and readiness gates.
//!
//! Gates are a pure function of the context profile. Pulse responses never
//! trigger a gate.

mod catalog;
mod evaluator;

pub use catalog::{Condition, GATE_CATALOG, GateRule, Predicate, Threshold, gate_rule};
pub use evaluator::{
    ConditionCheck, GateEvaluator, GateExplanation, TriggeredGate, evaluate_gates,
    evaluate_gates_from_map, explain_gate, required_threshold, threshold_table,
};
