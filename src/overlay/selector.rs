//! Context-aware default metric selection and the editable overlay.

use super::catalog::{Cadence, metric};
use crate::error::{OverlayErrorKind, PulseError, Result};
use crate::gates::{Condition, Predicate};
use crate::model::{ContextProfile, Dimension, Flag, Pillar};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Replace a pillar's default metric when the predicate holds.
#[derive(Debug, Clone, Copy)]
pub struct OverrideRule {
    pub pillar: Pillar,
    pub metric: &'static str,
    pub when: Predicate,
}

/// Baseline metric per pillar, before any override.
pub static DEFAULT_METRICS: [(Pillar, &str); 6] = [
    (Pillar::Clarity, "value_case_coverage"),
    (Pillar::Operations, "value_gate_pass_rate"),
    (Pillar::Risk, "control_coverage"),
    (Pillar::Talent, "ai_fluency_rate"),
    (Pillar::Ecosystem, "partner_delivery_rate"),
    (Pillar::Experimentation, "pilot_throughput"),
];

use Condition::{AtLeast, AtMost, FlagIs};

/// Override rules in declaration order. Within a pillar the first match wins.
pub static OVERRIDE_RULES: &[OverrideRule] = &[
    OverrideRule {
        pillar: Pillar::Clarity,
        metric: "exec_sponsor_coverage",
        when: Predicate::All(&[AtLeast(Dimension::BrandExposure, 3)]),
    },
    OverrideRule {
        pillar: Pillar::Operations,
        metric: "latency_availability",
        when: Predicate::Any(&[
            AtLeast(Dimension::ScaleThroughput, 3),
            AtLeast(Dimension::LatencyEdge, 3),
        ]),
    },
    OverrideRule {
        pillar: Pillar::Risk,
        metric: "audit_findings_closed",
        when: Predicate::Any(&[
            AtLeast(Dimension::RegulatoryIntensity, 3),
            AtLeast(Dimension::SafetyCriticality, 3),
        ]),
    },
    OverrideRule {
        pillar: Pillar::Talent,
        metric: "critical_role_fill_rate",
        when: Predicate::All(&[AtMost(Dimension::BuildReadiness, 1)]),
    },
    OverrideRule {
        pillar: Pillar::Ecosystem,
        metric: "vendor_review_cycle_time",
        when: Predicate::All(&[FlagIs(Flag::ProcurementConstraints, true)]),
    },
    OverrideRule {
        pillar: Pillar::Experimentation,
        metric: "time_to_learning",
        when: Predicate::All(&[AtLeast(Dimension::ClockSpeed, 3)]),
    },
];

/// Picks one metric per pillar from defaults and override rules.
#[derive(Debug, Clone, Copy)]
pub struct MetricSelector {
    defaults: &'static [(Pillar, &'static str)],
    rules: &'static [OverrideRule],
}

impl Default for MetricSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSelector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            defaults: &DEFAULT_METRICS,
            rules: OVERRIDE_RULES,
        }
    }

    /// Selector with a custom override table over the standard defaults.
    #[must_use]
    pub const fn with_rules(rules: &'static [OverrideRule]) -> Self {
        Self {
            defaults: &DEFAULT_METRICS,
            rules,
        }
    }

    /// Metric id per pillar for a profile.
    #[must_use]
    pub fn select(&self, profile: &ContextProfile) -> BTreeMap<Pillar, &'static str> {
        self.defaults
            .iter()
            .map(|&(pillar, default)| {
                let chosen = self
                    .rules
                    .iter()
                    .find(|r| r.pillar == pillar && r.when.holds(profile))
                    .map_or(default, |r| {
                        tracing::debug!("Overlay {} overridden to {}", pillar, r.metric);
                        r.metric
                    });
                (pillar, chosen)
            })
            .collect()
    }
}

/// Default metric id per pillar for a profile.
#[must_use]
pub fn select_default_metrics(profile: &ContextProfile) -> BTreeMap<Pillar, &'static str> {
    MetricSelector::new().select(profile)
}

/// One pillar's tracked metric. Baseline and target start unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayEntry {
    pub metric_id: String,
    pub name: String,
    pub baseline: Option<f64>,
    pub target: Option<f64>,
    pub unit: String,
    pub cadence: Cadence,
}

impl OverlayEntry {
    /// Entry for a catalog metric with the pillar's default cadence.
    pub fn for_metric(pillar: Pillar, metric_id: &str) -> Result<Self> {
        let def = metric(metric_id)
            .filter(|m| m.pillar == pillar)
            .ok_or_else(|| {
                PulseError::overlay(
                    "metric not in catalog",
                    OverlayErrorKind::UnknownMetric {
                        pillar: pillar.to_string(),
                        metric: metric_id.to_string(),
                    },
                )
            })?;
        Ok(Self {
            metric_id: def.id.to_string(),
            name: def.name.to_string(),
            baseline: None,
            target: None,
            unit: def.unit.to_string(),
            cadence: Cadence::for_pillar(pillar),
        })
    }
}

/// The editable value overlay: one entry per pillar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueOverlay(BTreeMap<Pillar, OverlayEntry>);

impl ValueOverlay {
    /// Overlay seeded with the default metric selection for a profile.
    #[must_use]
    pub fn from_profile(profile: &ContextProfile) -> Self {
        Self::from_selection(&select_default_metrics(profile))
    }

    /// Overlay seeded from an explicit selection. Ids not in the catalog for
    /// their pillar are skipped.
    #[must_use]
    pub fn from_selection(selection: &BTreeMap<Pillar, &'static str>) -> Self {
        Self(
            selection
                .iter()
                .filter_map(|(&pillar, id)| {
                    OverlayEntry::for_metric(pillar, id)
                        .inspect_err(|e| tracing::warn!("Skipping overlay entry: {e}"))
                        .ok()
                        .map(|entry| (pillar, entry))
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, pillar: Pillar) -> Option<&OverlayEntry> {
        self.0.get(&pillar)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pillar, &OverlayEntry)> + '_ {
        self.0.iter().map(|(p, e)| (*p, e))
    }

    /// Set the baseline value for a pillar's metric.
    pub fn set_baseline(&mut self, pillar: Pillar, value: f64) -> Result<()> {
        let value = finite(pillar, "baseline", value)?;
        self.entry_mut(pillar)?.baseline = Some(value);
        Ok(())
    }

    /// Set the target value for a pillar's metric.
    pub fn set_target(&mut self, pillar: Pillar, value: f64) -> Result<()> {
        let value = finite(pillar, "target", value)?;
        self.entry_mut(pillar)?.target = Some(value);
        Ok(())
    }

    /// Swap a pillar's metric for another catalog metric of the same pillar.
    /// Clears baseline and target.
    pub fn set_metric(&mut self, pillar: Pillar, metric_id: &str) -> Result<()> {
        let entry = OverlayEntry::for_metric(pillar, metric_id)?;
        *self.entry_mut(pillar)? = entry;
        Ok(())
    }

    fn entry_mut(&mut self, pillar: Pillar) -> Result<&mut OverlayEntry> {
        self.0.get_mut(&pillar).ok_or_else(|| {
            PulseError::overlay(
                "pillar has no overlay entry",
                OverlayErrorKind::MissingEntry(pillar.to_string()),
            )
        })
    }
}

fn finite(pillar: Pillar, field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PulseError::overlay(
            "overlay values must be finite",
            OverlayErrorKind::NonFiniteValue {
                pillar: pillar.to_string(),
                field: field.to_string(),
            },
        ))
    }
}

/// Resolve a pillar letter or name, for overlay edits keyed by caller text.
pub fn parse_pillar(code: &str) -> Result<Pillar> {
    Pillar::from_code(code).ok_or_else(|| {
        PulseError::overlay(
            "unrecognized pillar",
            OverlayErrorKind::UnknownPillar(code.to_string()),
        )
    })
}
