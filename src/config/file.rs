//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".maturity-pulse.yaml",
    ".maturity-pulse.yml",
    "maturity-pulse.yaml",
    "maturity-pulse.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/maturity-pulse/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(dir) = user_config_dir()
        && let Some(path) = find_config_in_dir(&dir)
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Per-user configuration directory, e.g. `~/.config/maturity-pulse`.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("maturity-pulse"))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Command-line overrides layered over file configuration.
///
/// `None` leaves the file value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub format: Option<crate::reports::ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
    pub lenient: bool,
    pub fail_on_gates: bool,
    pub min_average: Option<f64>,
    pub no_overlay: bool,
    pub quiet: bool,
}

impl AppConfig {
    /// Apply CLI overrides, which take precedence over file settings.
    pub fn merge(&mut self, cli: &CliOverrides) {
        if let Some(format) = cli.format {
            self.output.format = format;
        }
        if cli.output_file.is_some() {
            self.output.file.clone_from(&cli.output_file);
        }
        if cli.no_color {
            self.output.no_color = true;
        }
        if cli.lenient {
            self.assessment.strict_responses = false;
        }
        if cli.fail_on_gates {
            self.assessment.fail_on_gates = true;
        }
        if cli.min_average.is_some() {
            self.assessment.min_average = cli.min_average;
        }
        if cli.no_overlay {
            self.overlay.include = false;
        }
        if cli.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &CliOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# maturity-pulse configuration
#
# Place this file at:
#   - .maturity-pulse.yaml in your project root
#   - ~/.config/maturity-pulse/maturity-pulse.yaml for global config
#
# CLI arguments always override file settings.

# Output configuration
output:
  # Format: summary, json, markdown
  format: summary
  # Output file path (omit for stdout)
  # file: pulse-report.md
  # Disable colored output
  no_color: false

# Assessment behavior
assessment:
  # Reject unknown question ids and answers outside 0, 0.25, 0.5, 1.
  # When false they are skipped with a warning.
  strict_responses: true
  # Exit with code 2 when any gate fires
  fail_on_gates: false
  # Exit with code 1 when the average maturity (0-3) is below this value
  # min_average: 1.5

# Value overlay
overlay:
  # Attach metric defaults to reports when a profile is present
  include: true

# Behavior flags
behavior:
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}
