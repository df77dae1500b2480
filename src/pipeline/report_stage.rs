//! Report output stage.
//!
//! Renders assessments in the configured format and writes them to the
//! configured destination.

use super::{AssessmentReport, OutputTarget, should_use_color, write_output};
use crate::config::AppConfig;
use crate::reports::{BatchRow, ReportMetadata, create_reporter_with_options};
use anyhow::Result;
use std::path::Path;

fn metadata(input_path: Option<&Path>) -> ReportMetadata {
    let metadata = ReportMetadata::new();
    match input_path {
        Some(path) => metadata.with_input_path(path.to_string_lossy()),
        None => metadata,
    }
}

/// Output a single assessment to the configured destination.
pub fn output_report(
    config: &AppConfig,
    report: &AssessmentReport,
    input_path: Option<&Path>,
) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    tracing::debug!("Rendering {} report", reporter.format());

    let text = reporter.generate_report(report, &metadata(input_path))?;
    write_output(&text, &target, config.behavior.quiet)
}

/// Output a batch of assessments to the configured destination.
pub fn output_batch_report(config: &AppConfig, rows: &[BatchRow]) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    tracing::debug!("Rendering {} batch report for {} inputs", reporter.format(), rows.len());

    let text = reporter.generate_batch_report(rows, &metadata(None))?;
    write_output(&text, &target, config.behavior.quiet)
}
