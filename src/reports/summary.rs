//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{BatchRow, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::insights::Urgency;
use crate::model::Pillar;
use crate::pipeline::AssessmentReport;
use crate::utils::{format_pillar_score, format_points, format_score};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Color for a 0-3 score.
const fn score_color(score: f64) -> &'static str {
    if score >= 2.5 {
        "green"
    } else if score >= 1.5 {
        "yellow"
    } else {
        "red"
    }
}

const fn urgency_color(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::High => "red",
        Urgency::Medium => "yellow",
        Urgency::Low => "green",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));
    }

    fn overview(&self, lines: &mut Vec<String>, report: &AssessmentReport) {
        let analysis = &report.analysis;
        match analysis.band() {
            Some(band) => lines.push(format!(
                "{}  {}  ({})",
                self.color("Average:", "cyan"),
                self.color(&format_pillar_score(analysis.avg), score_color(analysis.avg)),
                band.name()
            )),
            None => lines.push(format!(
                "{}  no pillar fully answered yet",
                self.color("Average:", "cyan")
            )),
        }
        lines.push(format!(
            "{}   {} of {} pillars",
            self.color("Scored:", "cyan"),
            report.scores.len(),
            Pillar::ALL.len()
        ));
        if analysis.has_data() {
            lines.push(format!(
                "{}   {}{}",
                self.color("Spread:", "cyan"),
                format_points(analysis.spread()),
                if analysis.is_unbalanced {
                    " (unbalanced)"
                } else {
                    ""
                }
            ));
        }
    }

    fn pillars(&self, lines: &mut Vec<String>, report: &AssessmentReport) {
        lines.push(self.color("Pillars:", "bold"));
        for pillar in Pillar::ALL {
            let row = match (report.scores.get(pillar), report.pillar_stages.get(&pillar)) {
                (Some(score), Some(stage)) => format!(
                    "{}  {}",
                    self.color(&format_pillar_score(score), score_color(score)),
                    stage.name()
                ),
                _ => self.color("-      awaiting answers", "dim"),
            };
            lines.push(format!("  {} {:<16} {}", pillar.letter(), pillar.name(), row));
        }
    }

    fn gates(&self, lines: &mut Vec<String>, report: &AssessmentReport) {
        if report.gates.is_empty() {
            lines.push(format!("{} none triggered", self.color("Gates:", "bold")));
            return;
        }
        lines.push(self.color(&format!("Gates ({}):", report.gates.len()), "bold"));
        for gate in &report.gates {
            let because: Vec<String> = gate
                .explain
                .iter()
                .map(|(field, value)| format!("{field}={value}"))
                .collect();
            let pillar = gate
                .pillar
                .map(|p| format!(" [{}]", p.letter()))
                .unwrap_or_default();
            lines.push(format!(
                "  {} {}{}  {}",
                self.color("!", "red"),
                gate.title,
                pillar,
                self.color(&because.join(", "), "dim")
            ));
        }
    }

    fn guidance(&self, lines: &mut Vec<String>, report: &AssessmentReport) {
        if !report.insights.is_empty() {
            lines.push(self.color("Insights:", "bold"));
            for insight in &report.insights {
                lines.push(format!(
                    "  {} {}",
                    self.color(&format!("[{}]", insight.urgency), urgency_color(insight.urgency)),
                    insight.title
                ));
                lines.push(format!("         {}", insight.action));
            }
        }
        if !report.priorities.is_empty() {
            lines.push(self.color("90-day priorities:", "bold"));
            for (i, priority) in report.priorities.iter().enumerate() {
                lines.push(format!(
                    "  {}. {} {}",
                    i + 1,
                    priority.title,
                    self.color(&format!("({})", priority.timeframe), "dim")
                ));
            }
        }
    }

    fn overlay(&self, lines: &mut Vec<String>, report: &AssessmentReport) {
        let Some(overlay) = &report.value_overlay else {
            return;
        };
        lines.push(self.color("Value overlay:", "bold"));
        for (pillar, entry) in overlay.iter() {
            lines.push(format!(
                "  {}  {:<40} {}",
                pillar.letter(),
                entry.name,
                self.color(&entry.cadence.to_string(), "dim")
            ));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(
        &self,
        report: &AssessmentReport,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        self.header(
            &mut lines,
            metadata.title.as_deref().unwrap_or("AI Maturity Pulse"),
        );
        if let Some(path) = &metadata.input_path {
            lines.push(format!("{}    {}", self.color("Input:", "cyan"), path));
        }
        self.overview(&mut lines, report);
        lines.push(String::new());
        self.pillars(&mut lines, report);
        lines.push(String::new());
        self.gates(&mut lines, report);
        lines.push(String::new());
        self.guidance(&mut lines, report);
        if report.value_overlay.is_some() {
            lines.push(String::new());
            self.overlay(&mut lines, report);
        }

        Ok(lines.join("\n"))
    }

    fn generate_batch_report(
        &self,
        rows: &[BatchRow],
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(
            &mut lines,
            metadata.title.as_deref().unwrap_or("AI Maturity Pulse: batch"),
        );

        for row in rows {
            match (&row.report, &row.error) {
                (Some(report), _) => {
                    let avg = if report.analysis.has_data() {
                        self.color(
                            &format_score(report.analysis.avg),
                            score_color(report.analysis.avg),
                        )
                    } else {
                        "-".to_string()
                    };
                    let top = report
                        .insights
                        .first()
                        .map_or("", |insight| insight.title.as_str());
                    lines.push(format!(
                        "  {}  avg {}  {}/6 pillars  {} gate(s)  {}",
                        row.source,
                        avg,
                        report.scores.len(),
                        report.gates.len(),
                        self.color(top, "dim")
                    ));
                }
                (None, error) => lines.push(format!(
                    "  {}  {} {}",
                    row.source,
                    self.color("error:", "red"),
                    error.as_deref().unwrap_or("unknown failure")
                )),
            }
        }

        let failed = rows.iter().filter(|r| r.error.is_some()).count();
        lines.push(self.color("─".repeat(48).as_str(), "dim"));
        lines.push(format!(
            "{} assessed, {} failed",
            rows.len() - failed,
            failed
        ));
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
