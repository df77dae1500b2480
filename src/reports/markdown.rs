//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table, escape_md_opt};
use super::{BatchRow, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::model::Pillar;
use crate::pipeline::AssessmentReport;
use crate::utils::{format_pillar_score, format_points, format_score};
use std::fmt::Write;

/// Markdown reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn title(metadata: &ReportMetadata, default: &str) -> String {
    escape_markdown_inline(metadata.title.as_deref().unwrap_or(default))
}

fn write_overview(out: &mut String, report: &AssessmentReport) -> std::fmt::Result {
    let analysis = &report.analysis;
    match analysis.band() {
        Some(band) => writeln!(
            out,
            "**Average maturity:** {} ({})  ",
            format_pillar_score(analysis.avg),
            band.name()
        )?,
        None => writeln!(out, "**Average maturity:** not yet scored  ")?,
    }
    writeln!(
        out,
        "**Pillars scored:** {} of {}  ",
        report.scores.len(),
        Pillar::ALL.len()
    )?;
    if analysis.has_data() {
        writeln!(out, "**Spread:** {}  ", format_points(analysis.spread()))?;
    }
    writeln!(out, "**Input fingerprint:** `{}`", report.input_fingerprint)?;
    writeln!(out)
}

fn write_pillars(out: &mut String, report: &AssessmentReport) -> std::fmt::Result {
    writeln!(out, "## Pillar Scores\n")?;
    writeln!(out, "| Pillar | Score | Stage |")?;
    writeln!(out, "|--------|-------|-------|")?;
    for pillar in Pillar::ALL {
        let (score, stage) = match (report.scores.get(pillar), report.pillar_stages.get(&pillar)) {
            (Some(score), Some(stage)) => (format_pillar_score(score), stage.name()),
            _ => ("-".to_string(), "awaiting answers"),
        };
        writeln!(out, "| {} ({}) | {} | {} |", pillar.name(), pillar.letter(), score, stage)?;
    }
    writeln!(out)
}

fn write_gates(out: &mut String, report: &AssessmentReport) -> std::fmt::Result {
    writeln!(out, "## Triggered Gates\n")?;
    if report.gates.is_empty() {
        return writeln!(out, "_No gates triggered._\n");
    }
    writeln!(out, "| Gate | Pillar | Triggered by | Reason |")?;
    writeln!(out, "|------|--------|--------------|--------|")?;
    for gate in &report.gates {
        let because: Vec<String> = gate
            .explain
            .iter()
            .map(|(field, value)| format!("{field} = {value}"))
            .collect();
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            escape_markdown_table(&gate.title),
            gate.pillar.map_or_else(|| "-".to_string(), |p| p.letter().to_string()),
            escape_markdown_table(&because.join(", ")),
            escape_markdown_table(&gate.reason)
        )?;
    }
    writeln!(out)?;
    for gate in &report.gates {
        writeln!(out, "**{}**\n", escape_markdown_inline(&gate.title))?;
        for action in &gate.actions {
            writeln!(out, "- {}", escape_markdown_inline(action))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_guidance(out: &mut String, report: &AssessmentReport) -> std::fmt::Result {
    if !report.insights.is_empty() {
        writeln!(out, "## Executive Insights\n")?;
        for insight in &report.insights {
            writeln!(
                out,
                "### {} ({}, {})\n",
                escape_markdown_inline(&insight.title),
                insight.kind,
                insight.urgency
            )?;
            writeln!(out, "{}\n", insight.description)?;
            writeln!(out, "- **Action:** {}", insight.action)?;
            writeln!(out, "- **Why:** {}", insight.reasoning)?;
            writeln!(out, "- **Impact:** {}\n", insight.business_impact)?;
        }
    }
    if !report.priorities.is_empty() {
        writeln!(out, "## 90-Day Priorities\n")?;
        writeln!(out, "| # | Priority | Timeframe | Urgency |")?;
        writeln!(out, "|---|----------|-----------|---------|")?;
        for (i, p) in report.priorities.iter().enumerate() {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                i + 1,
                escape_markdown_table(&p.title),
                p.timeframe,
                p.urgency
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_overlay(out: &mut String, report: &AssessmentReport) -> std::fmt::Result {
    let Some(overlay) = &report.value_overlay else {
        return Ok(());
    };
    writeln!(out, "## Value Overlay\n")?;
    writeln!(out, "| Pillar | Metric | Unit | Cadence | Baseline | Target |")?;
    writeln!(out, "|--------|--------|------|---------|----------|--------|")?;
    for (pillar, entry) in overlay.iter() {
        let baseline = entry.baseline.map(|v| v.to_string());
        let target = entry.target.map(|v| v.to_string());
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            pillar.letter(),
            escape_markdown_table(&entry.name),
            escape_markdown_table(&entry.unit),
            entry.cadence,
            escape_md_opt(baseline.as_deref()),
            escape_md_opt(target.as_deref())
        )?;
    }
    writeln!(out)
}

impl ReportGenerator for MarkdownReporter {
    fn generate_report(
        &self,
        report: &AssessmentReport,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "# {}\n", title(metadata, "AI Maturity Pulse Report"))?;
        if let Some(path) = &metadata.input_path {
            writeln!(out, "_Input: {}_\n", escape_markdown_inline(path))?;
        }
        write_overview(&mut out, report)?;
        write_pillars(&mut out, report)?;
        write_gates(&mut out, report)?;
        write_guidance(&mut out, report)?;
        write_overlay(&mut out, report)?;
        writeln!(
            out,
            "---\n_Generated by maturity-pulse {}_",
            metadata.tool_version
        )?;
        Ok(out)
    }

    fn generate_batch_report(
        &self,
        rows: &[BatchRow],
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "# {}\n", title(metadata, "AI Maturity Pulse Batch Report"))?;
        writeln!(out, "| Input | Average | Pillars | Gates | Top insight |")?;
        writeln!(out, "|-------|---------|---------|-------|-------------|")?;
        for row in rows {
            match &row.report {
                Some(report) => {
                    let avg = if report.analysis.has_data() {
                        format_score(report.analysis.avg)
                    } else {
                        "-".to_string()
                    };
                    writeln!(
                        out,
                        "| {} | {} | {}/6 | {} | {} |",
                        escape_markdown_table(&row.source),
                        avg,
                        report.scores.len(),
                        report.gates.len(),
                        escape_md_opt(report.insights.first().map(|i| i.title.as_str()))
                    )?;
                }
                None => writeln!(
                    out,
                    "| {} | error | - | - | {} |",
                    escape_markdown_table(&row.source),
                    escape_md_opt(row.error.as_deref())
                )?,
            }
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContextProfile, PulseAnswer, PulseResponses};
    use crate::pipeline::{AssessmentInput, AssessmentOptions, run_assessment};
    use crate::utils::Level;

    fn report() -> AssessmentReport {
        let input = AssessmentInput::new(
            Some(ContextProfile::uniform(Level::new(3).expect("level"))),
            PulseResponses::uniform(PulseAnswer::Mostly),
        );
        run_assessment(&input, &AssessmentOptions::default())
    }

    #[test]
    fn test_sections() {
        let text = MarkdownReporter::new()
            .generate_report(&report(), &ReportMetadata::new())
            .expect("render");
        assert!(text.starts_with("# AI Maturity Pulse Report"));
        assert!(text.contains("| Clarity (C) | 1.5/3 | Emerging |"));
        assert!(text.contains("## Triggered Gates"));
        assert!(text.contains("regulatory_intensity = 3"));
        assert!(text.contains("## Executive Insights"));
        assert!(text.contains("## Value Overlay"));
        assert!(text.contains("| X | Time to learning | days | quarterly | - | - |"));
    }

    #[test]
    fn test_caller_text_is_escaped() {
        let meta = ReportMetadata::new().with_input_path("q3|pulse_*.json");
        let text = MarkdownReporter::new()
            .generate_report(&report(), &meta)
            .expect("render");
        assert!(text.contains("_Input: q3\\|pulse\\_\\*.json_"));

        let rows = vec![BatchRow::failed("a|b.json", "bad")];
        let text = MarkdownReporter::new()
            .generate_batch_report(&rows, &meta)
            .expect("render");
        assert!(text.contains("| a\\|b.json | error | - | - | bad |"));
    }
}
