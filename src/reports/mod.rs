//! Report generation for assessment results.
//!
//! Three output formats:
//! - Summary: compact, colored terminal output
//! - JSON: structured data with a metadata envelope
//! - Markdown: tables for sharing in documents and tickets
//!
//! Batch runs render one row per input file in every format.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{BatchRow, ReportFormat, ReportMetadata};

use crate::pipeline::AssessmentReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a single assessment.
    fn generate_report(
        &self,
        report: &AssessmentReport,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError>;

    /// Render a batch of assessments.
    fn generate_batch_report(
        &self,
        rows: &[BatchRow],
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError>;

    /// Write a single assessment to a writer.
    fn write_report(
        &self,
        report: &AssessmentReport,
        metadata: &ReportMetadata,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let text = self.generate_report(report, metadata)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_formats() {
        for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Markdown] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }
}
