//! Metrics command handler.
//!
//! Implements the `metrics` subcommand: context-aware value-overlay defaults
//! for one profile.

use crate::config::AppConfig;
use crate::overlay::{ValueOverlay, metric};
use crate::pipeline::{OutputTarget, parse_profile_file, write_output};
use crate::reports::ReportFormat;
use anyhow::Result;
use std::path::Path;

/// Run the metrics command.
pub fn run_metrics(profile_path: &Path, config: &AppConfig) -> Result<()> {
    let profile = parse_profile_file(profile_path)?;
    let overlay = ValueOverlay::from_profile(&profile);

    let text = match config.output.format {
        ReportFormat::Json => serde_json::to_string_pretty(&overlay)?,
        _ => format_overlay(&overlay),
    };
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&text, &target, config.behavior.quiet)
}

fn format_overlay(overlay: &ValueOverlay) -> String {
    let mut lines = Vec::new();
    for (pillar, entry) in overlay.iter() {
        lines.push(format!(
            "{} {:<16} {} [{}, {}]",
            pillar.letter(),
            pillar.name(),
            entry.name,
            entry.unit,
            entry.cadence
        ));
        if let Some(def) = metric(&entry.metric_id) {
            lines.push(format!("    {}", def.description));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContextProfile, Dimension};
    use crate::utils::Level;

    #[test]
    fn test_overlay_text_lists_every_pillar() {
        let profile = ContextProfile::uniform(Level::MIN).with_level(
            Dimension::ClockSpeed,
            Level::new(3).expect("level"),
        );
        let text = format_overlay(&ValueOverlay::from_profile(&profile));
        assert_eq!(text.lines().filter(|l| !l.starts_with(' ')).count(), 6);
        assert!(text.contains("Time to learning [days, quarterly]"));
    }
}
