//! Batch command handler.
//!
//! Assesses many input documents in parallel. Each file gets its own row;
//! one malformed file does not stop the others.

use crate::config::AppConfig;
use crate::pipeline::{
    assessment_exit_code, exit_codes, output_batch_report, parse_input_file, run_assessment,
};
use crate::reports::BatchRow;
use anyhow::{Result, bail};
use rayon::prelude::*;
use std::path::PathBuf;

/// Assess every path, preserving input order in the returned rows.
#[must_use]
pub fn assess_batch(paths: &[PathBuf], config: &AppConfig) -> Vec<BatchRow> {
    let mode = config.assessment.response_mode();
    let options = config.assessment_options();
    paths
        .par_iter()
        .map(|path| {
            let source = path.display().to_string();
            match parse_input_file(path, mode) {
                Ok(input) => BatchRow::ok(source, run_assessment(&input, &options)),
                Err(e) => {
                    tracing::warn!("Skipping {source}: {e}");
                    BatchRow::failed(source, e.to_string())
                }
            }
        })
        .collect()
}

/// Run the batch command, returning the desired exit code.
///
/// Any unreadable input yields the error code; otherwise the most severe
/// per-assessment code wins.
pub fn run_batch(paths: &[PathBuf], config: &AppConfig) -> Result<i32> {
    if paths.is_empty() {
        bail!("batch needs at least one input file");
    }
    tracing::info!("Assessing {} inputs", paths.len());

    let rows = assess_batch(paths, config);
    output_batch_report(config, &rows)?;

    if rows.iter().any(|row| row.error.is_some()) {
        return Ok(exit_codes::ERROR);
    }
    Ok(rows
        .iter()
        .filter_map(|row| row.report.as_ref())
        .map(|report| {
            assessment_exit_code(
                report,
                config.assessment.fail_on_gates,
                config.assessment.min_average,
            )
        })
        .max()
        .unwrap_or(exit_codes::SUCCESS))
}
