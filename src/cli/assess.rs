//! Assess command handler.
//!
//! Implements the `assess` subcommand: one input document in, one report out.

use crate::config::AppConfig;
use crate::pipeline::{assessment_exit_code, output_report, parse_input_file, run_assessment};
use anyhow::Result;
use std::path::Path;

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(input_path: &Path, config: &AppConfig) -> Result<i32> {
    let input = parse_input_file(input_path, config.assessment.response_mode())?;
    if input.profile.is_none() {
        tracing::info!("No context profile supplied; gates and value overlay are skipped");
    }

    let report = run_assessment(&input, &config.assessment_options());
    if !report.missing_pillars.is_empty() {
        tracing::info!(
            "{} pillar(s) not fully answered yet",
            report.missing_pillars.len()
        );
    }

    output_report(config, &report, Some(input_path))?;

    let code = assessment_exit_code(
        &report,
        config.assessment.fail_on_gates,
        config.assessment.min_average,
    );
    if code != 0 {
        tracing::error!(
            "Assessment failed CI thresholds: {} gate(s), average {:.2}",
            report.gates.len(),
            report.analysis.avg
        );
    }
    Ok(code)
}
