//! JSON report generator.

use super::{BatchRow, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::pipeline::AssessmentReport;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
    /// Stamp `generated_at` into the metadata envelope
    timestamp: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pretty: true,
            timestamp: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Omit the generation timestamp, making output byte-stable.
    #[must_use]
    pub const fn without_timestamp(mut self) -> Self {
        self.timestamp = false;
        self
    }

    fn metadata<'a>(&self, metadata: &'a ReportMetadata) -> JsonReportMetadata<'a> {
        JsonReportMetadata {
            tool: ToolInfo {
                name: "maturity-pulse",
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: self.timestamp.then(|| Utc::now().to_rfc3339()),
            input_path: metadata.input_path.as_deref(),
            title: metadata.title.as_deref(),
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_report(
        &self,
        report: &AssessmentReport,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        self.render(&JsonAssessmentReport {
            metadata: self.metadata(metadata),
            assessment: report,
        })
    }

    fn generate_batch_report(
        &self,
        rows: &[BatchRow],
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let failed = rows.iter().filter(|r| r.error.is_some()).count();
        self.render(&JsonBatchReport {
            metadata: self.metadata(metadata),
            summary: BatchSummary {
                total: rows.len(),
                succeeded: rows.len() - failed,
                failed,
            },
            results: rows,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonAssessmentReport<'a> {
    metadata: JsonReportMetadata<'a>,
    assessment: &'a AssessmentReport,
}

#[derive(Serialize)]
struct JsonBatchReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: BatchSummary,
    results: &'a [BatchRow],
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct BatchSummary {
    total: usize,
    succeeded: usize,
    failed: usize,
}
