//! Configuration types for maturity-pulse.
//!
//! Provides structured configuration for assessment, output and overlay
//! behavior.

use crate::model::ResponseParseMode;
use crate::pipeline::AssessmentOptions;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are merged over file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Assessment parsing and CI thresholds
    pub assessment: AssessmentConfig,
    /// Value overlay generation
    pub overlay: OverlayConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Engine options derived from this configuration.
    #[must_use]
    pub const fn assessment_options(&self) -> AssessmentOptions {
        AssessmentOptions {
            include_overlay: self.overlay.include,
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Reject unknown questions and off-scale answers.
    pub const fn strict_responses(mut self, strict: bool) -> Self {
        self.config.assessment.strict_responses = strict;
        self
    }

    /// Exit with code 2 when any gate fires.
    pub const fn fail_on_gates(mut self, fail: bool) -> Self {
        self.config.assessment.fail_on_gates = fail;
        self
    }

    /// Exit with code 1 when the average maturity is below `min`.
    pub const fn min_average(mut self, min: Option<f64>) -> Self {
        self.config.assessment.min_average = min;
        self
    }

    /// Include the value overlay in reports.
    pub const fn include_overlay(mut self, include: bool) -> Self {
        self.config.overlay.include = include;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            no_color: false,
        }
    }
}

/// Assessment parsing and exit-code thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Reject unknown question ids and off-scale answers instead of skipping them
    pub strict_responses: bool,
    /// Exit with code 2 when any gate fires
    pub fail_on_gates: bool,
    /// Exit with code 1 when the average maturity (0-3) is below this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_average: Option<f64>,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            strict_responses: true,
            fail_on_gates: false,
            min_average: None,
        }
    }
}

impl AssessmentConfig {
    /// Response parsing mode implied by `strict_responses`.
    #[must_use]
    pub const fn response_mode(&self) -> ResponseParseMode {
        if self.strict_responses {
            ResponseParseMode::Strict
        } else {
            ResponseParseMode::Lenient
        }
    }
}

/// Value overlay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OverlayConfig {
    /// Attach the metric overlay to reports when a profile is present
    pub include: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { include: true }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
}
