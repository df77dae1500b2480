//! Catalog command handler.
//!
//! Implements the `catalog` subcommand, which prints the fixed questionnaire,
//! gate rules and metric definitions the engine evaluates against.

use crate::config::AppConfig;
use crate::gates::{GATE_CATALOG, GateRule, Predicate};
use crate::model::{Pillar, QUESTIONS};
use crate::overlay::{Cadence, METRIC_CATALOG, metrics_for};
use crate::pipeline::{OutputTarget, write_output};
use crate::reports::ReportFormat;
use anyhow::Result;
use clap::ValueEnum;
use serde_json::{Value, json};

/// Which part of the catalog to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CatalogSection {
    /// Everything
    #[default]
    All,
    /// The eighteen pulse questions
    Questions,
    /// Gate rules and their thresholds
    Gates,
    /// Value-overlay metric definitions
    Metrics,
}

impl CatalogSection {
    const fn includes(self, other: Self) -> bool {
        matches!(self, Self::All) || self as u8 == other as u8
    }
}

/// Run the catalog command.
pub fn run_catalog(section: CatalogSection, config: &AppConfig) -> Result<()> {
    let text = match config.output.format {
        ReportFormat::Json => serde_json::to_string_pretty(&catalog_json(section))?,
        _ => catalog_text(section),
    };
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&text, &target, config.behavior.quiet)
}

fn gate_json(rule: &GateRule) -> Value {
    let conditions: Vec<Value> = rule
        .predicate
        .conditions()
        .iter()
        .map(|c| json!({ "field": c.field(), "threshold": c.threshold() }))
        .collect();
    json!({
        "id": rule.id,
        "title": rule.title,
        "pillar": rule.pillar,
        "reason": rule.reason,
        "combinator": rule.predicate.combinator(),
        "conditions": conditions,
        "actions": rule.actions,
    })
}

fn catalog_json(section: CatalogSection) -> Value {
    let mut out = serde_json::Map::new();
    if section.includes(CatalogSection::Questions) {
        out.insert("questions".to_string(), json!(QUESTIONS));
    }
    if section.includes(CatalogSection::Gates) {
        let gates: Vec<Value> = GATE_CATALOG.iter().map(gate_json).collect();
        out.insert("gates".to_string(), Value::Array(gates));
    }
    if section.includes(CatalogSection::Metrics) {
        out.insert("metrics".to_string(), json!(METRIC_CATALOG));
    }
    Value::Object(out)
}

fn catalog_text(section: CatalogSection) -> String {
    let mut lines = Vec::new();
    if section.includes(CatalogSection::Questions) {
        lines.push("Questions (answer 0, 0.25, 0.5 or 1):".to_string());
        for question in &QUESTIONS {
            lines.push(format!("  {}  {}", question.id, question.prompt));
        }
        lines.push(String::new());
    }
    if section.includes(CatalogSection::Gates) {
        lines.push("Gates:".to_string());
        for rule in GATE_CATALOG {
            let conditions: Vec<String> = rule
                .predicate
                .conditions()
                .iter()
                .map(|c| format!("{} {}", c.field(), c.threshold()))
                .collect();
            let joiner = match rule.predicate {
                Predicate::Any(_) => " OR ",
                Predicate::All(_) => " AND ",
            };
            lines.push(format!("  {:<24} {}", rule.id, rule.title));
            lines.push(format!("  {:<24} when {}", "", conditions.join(joiner)));
        }
        lines.push(String::new());
    }
    if section.includes(CatalogSection::Metrics) {
        lines.push("Metrics:".to_string());
        for pillar in Pillar::ALL {
            let cadence = Cadence::for_pillar(pillar);
            for def in metrics_for(pillar) {
                lines.push(format!(
                    "  {} {:<26} {} ({}, {cadence})",
                    pillar.letter(),
                    def.id,
                    def.name,
                    def.unit
                ));
            }
        }
    }
    lines.join("\n").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_filter() {
        let gates_only = catalog_json(CatalogSection::Gates);
        assert!(gates_only.get("questions").is_none());
        assert_eq!(gates_only["gates"].as_array().map(Vec::len), Some(GATE_CATALOG.len()));

        let all = catalog_json(CatalogSection::All);
        assert_eq!(all["questions"].as_array().map(Vec::len), Some(18));
        assert_eq!(all["metrics"].as_array().map(Vec::len), Some(METRIC_CATALOG.len()));
    }

    #[test]
    fn test_gate_json_shape() {
        let value = gate_json(&GATE_CATALOG[0]);
        assert_eq!(value["id"], "human_in_the_loop");
        assert_eq!(value["combinator"], "any");
        assert_eq!(value["conditions"][0]["field"], "regulatory_intensity");
        assert_eq!(value["conditions"][0]["threshold"]["op"], "at_least");
        assert_eq!(value["conditions"][0]["threshold"]["value"], 3);
    }

    #[test]
    fn test_text_lists_conditions() {
        let text = catalog_text(CatalogSection::Gates);
        assert!(text.starts_with("Gates:"));
        assert!(text.contains("when regulatory_intensity >= 3 OR safety_criticality >= 3"));
    }
}
