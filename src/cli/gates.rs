//! Gates command handler.
//!
//! Implements the `gates` subcommand: evaluate one context profile against
//! the gate catalog, optionally explaining every rule.

use crate::config::AppConfig;
use crate::gates::{GateEvaluator, GateExplanation, TriggeredGate};
use crate::pipeline::{OutputTarget, exit_codes, parse_profile_file, write_output};
use crate::reports::ReportFormat;
use anyhow::Result;
use serde_json::json;
use std::path::Path;

/// Run the gates command, returning the desired exit code.
pub fn run_gates(profile_path: &Path, explain: bool, config: &AppConfig) -> Result<i32> {
    let profile = parse_profile_file(profile_path)?;
    let evaluator = GateEvaluator::new();
    let triggered = evaluator.evaluate(&profile);
    tracing::info!("{} of {} gates triggered", triggered.len(), evaluator.rules().len());

    let text = if explain {
        let explanations = evaluator.explain_all(&profile);
        match config.output.format {
            ReportFormat::Json => serde_json::to_string_pretty(&json!({
                "profile": profile,
                "gates": explanations,
            }))?,
            _ => format_explanations(&explanations),
        }
    } else {
        match config.output.format {
            ReportFormat::Json => serde_json::to_string_pretty(&json!({
                "profile": profile,
                "gates": triggered,
            }))?,
            _ => format_triggered(&triggered),
        }
    };

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&text, &target, config.behavior.quiet)?;

    if config.assessment.fail_on_gates && !triggered.is_empty() {
        return Ok(exit_codes::GATES_TRIGGERED);
    }
    Ok(exit_codes::SUCCESS)
}

fn format_triggered(gates: &[TriggeredGate]) -> String {
    if gates.is_empty() {
        return "No gates triggered.".to_string();
    }
    let mut lines = vec![format!("{} gate(s) triggered:", gates.len())];
    for gate in gates {
        let because: Vec<String> = gate
            .explain
            .iter()
            .map(|(field, value)| format!("{field}={value}"))
            .collect();
        lines.push(format!("  {} ({})", gate.title, because.join(", ")));
        lines.push(format!("    {}", gate.reason));
        for action in &gate.actions {
            lines.push(format!("    - {action}"));
        }
    }
    lines.join("\n")
}

fn format_explanations(explanations: &[GateExplanation]) -> String {
    let mut lines = Vec::new();
    for gate in explanations {
        let mark = if gate.triggered { "TRIGGERED" } else { "clear" };
        lines.push(format!("{} [{}] ({} of)", gate.title, mark, gate.combinator));
        for check in &gate.conditions {
            lines.push(format!(
                "  {} {:<24} is {:<5} requires {}",
                if check.met { "x" } else { " " },
                check.field,
                check.actual,
                check.required
            ));
        }
    }
    lines.join("\n")
}
