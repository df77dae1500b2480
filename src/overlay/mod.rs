//! Value overlay: one tracked business metric per pillar.
//!
//! Defaults depend on the context profile only. Pulse responses never change
//! which metric is selected.

mod catalog;
mod selector;

pub use catalog::{Cadence, METRIC_CATALOG, MetricDefinition, metric, metrics_for};
pub use selector::{
    DEFAULT_METRICS, MetricSelector, OVERRIDE_RULES, OverlayEntry, OverrideRule, ValueOverlay,
    parse_pillar, select_default_metrics,
};
