//! Configuration module for maturity-pulse.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use maturity_pulse::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::default();
//! assert!(config.assessment.strict_responses);
//!
//! let ci = AppConfig::from_preset(ConfigPreset::CiCd);
//! assert!(ci.assessment.fail_on_gates);
//! ```
//!
//! # Configuration File
//!
//! Place a `.maturity-pulse.yaml` file in your project root or
//! `~/.config/maturity-pulse/`:
//!
//! ```yaml
//! output:
//!   format: markdown
//! assessment:
//!   fail_on_gates: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_CI_MIN_AVERAGE};
pub use types::{
    AppConfig, AppConfigBuilder, AssessmentConfig, BehaviorConfig, OutputConfig, OverlayConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CliOverrides, ConfigFileError, discover_config_file, generate_full_example_config,
    load_config_file, load_or_default, user_config_dir,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.maturity-pulse.yaml`.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
