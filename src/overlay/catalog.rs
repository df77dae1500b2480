//! Value-overlay metric catalog.

use crate::model::Pillar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a metric is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Monthly,
    Quarterly,
}

impl Cadence {
    /// Default cadence for a pillar. Experimentation runs on longer cycles.
    #[must_use]
    pub const fn for_pillar(pillar: Pillar) -> Self {
        match pillar {
            Pillar::Experimentation => Self::Quarterly,
            _ => Self::Monthly,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Quarterly => write!(f, "quarterly"),
        }
    }
}

/// A trackable value metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDefinition {
    pub id: &'static str,
    pub pillar: Pillar,
    pub name: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

pub static METRIC_CATALOG: &[MetricDefinition] = &[
    MetricDefinition {
        id: "value_case_coverage",
        pillar: Pillar::Clarity,
        name: "Value case coverage",
        unit: "%",
        description: "Share of AI initiatives with an approved value case",
    },
    MetricDefinition {
        id: "exec_sponsor_coverage",
        pillar: Pillar::Clarity,
        name: "Executive sponsor coverage",
        unit: "%",
        description: "Share of customer-facing AI initiatives with a named executive sponsor",
    },
    MetricDefinition {
        id: "value_gate_pass_rate",
        pillar: Pillar::Operations,
        name: "Value gate pass rate",
        unit: "%",
        description: "Share of use cases passing their value gate on first review",
    },
    MetricDefinition {
        id: "latency_availability",
        pillar: Pillar::Operations,
        name: "Latency and availability SLO attainment",
        unit: "%",
        description: "Share of AI services meeting latency and availability objectives",
    },
    MetricDefinition {
        id: "control_coverage",
        pillar: Pillar::Risk,
        name: "Control coverage",
        unit: "%",
        description: "Share of production models with required controls in place",
    },
    MetricDefinition {
        id: "audit_findings_closed",
        pillar: Pillar::Risk,
        name: "Audit findings closed",
        unit: "%",
        description: "Share of AI audit findings closed within agreed deadlines",
    },
    MetricDefinition {
        id: "ai_fluency_rate",
        pillar: Pillar::Talent,
        name: "AI fluency rate",
        unit: "%",
        description: "Share of staff who completed role-based AI training",
    },
    MetricDefinition {
        id: "critical_role_fill_rate",
        pillar: Pillar::Talent,
        name: "Critical role fill rate",
        unit: "%",
        description: "Share of critical AI roles filled",
    },
    MetricDefinition {
        id: "partner_delivery_rate",
        pillar: Pillar::Ecosystem,
        name: "Partner delivery rate",
        unit: "%",
        description: "Share of partner milestones delivered on time",
    },
    MetricDefinition {
        id: "vendor_review_cycle_time",
        pillar: Pillar::Ecosystem,
        name: "Vendor review cycle time",
        unit: "days",
        description: "Median days from vendor intake to approved contract",
    },
    MetricDefinition {
        id: "pilot_throughput",
        pillar: Pillar::Experimentation,
        name: "Pilot throughput",
        unit: "pilots",
        description: "Pilots completed with a go/no-go decision",
    },
    MetricDefinition {
        id: "time_to_learning",
        pillar: Pillar::Experimentation,
        name: "Time to learning",
        unit: "days",
        description: "Median days from pilot start to a documented decision",
    },
];

/// Look up a metric by id.
#[must_use]
pub fn metric(id: &str) -> Option<&'static MetricDefinition> {
    METRIC_CATALOG.iter().find(|m| m.id == id)
}

/// Metrics defined for one pillar, in catalog order.
pub fn metrics_for(pillar: Pillar) -> impl Iterator<Item = &'static MetricDefinition> {
    METRIC_CATALOG.iter().filter(move |m| m.pillar == pillar)
}
