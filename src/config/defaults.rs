//! Configuration presets for maturity-pulse.
//!
//! Provides named presets for common use cases.

use super::types::{AppConfig, AssessmentConfig, BehaviorConfig, OutputConfig, OverlayConfig};
use crate::reports::ReportFormat;

/// Average maturity below which the `ci` preset fails the run.
pub const DEFAULT_CI_MIN_AVERAGE: f64 = 1.0;

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Interactive defaults: colored summary, strict parsing
    Default,
    /// CI/CD: JSON output, fail on gates and on a low average
    CiCd,
    /// Lenient: skip unknown or off-scale answers in evolving questionnaires
    Lenient,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Lenient => "lenient",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            "lenient" | "permissive" => Some(Self::Lenient),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Colored terminal summary with strict response parsing",
            Self::CiCd => "JSON output that fails the build on gates or a low average",
            Self::Lenient => "Skips unknown questions and off-scale answers with a warning",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Lenient]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
            ConfigPreset::Lenient => Self::lenient_preset(),
        }
    }

    /// CI/CD preset.
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
            },
            assessment: AssessmentConfig {
                strict_responses: true,
                fail_on_gates: true,
                min_average: Some(DEFAULT_CI_MIN_AVERAGE),
            },
            overlay: OverlayConfig::default(),
            behavior: BehaviorConfig { quiet: true },
        }
    }

    /// Lenient preset.
    #[must_use]
    pub fn lenient_preset() -> Self {
        Self {
            assessment: AssessmentConfig {
                strict_responses: false,
                ..AssessmentConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validatable;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in ConfigPreset::all() {
            let config = AppConfig::from_preset(*preset);
            assert!(config.is_valid(), "{preset} preset should validate");
        }
    }

    #[test]
    fn test_ci_preset_fails_builds() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.assessment.fail_on_gates);
        assert_eq!(config.assessment.min_average, Some(DEFAULT_CI_MIN_AVERAGE));
    }
}
