//! Declarative gate rule table.
//!
//! Each gate is a predicate over context-profile fields built only from
//! `>=`, `<=` and boolean equality against fixed thresholds. The displayed
//! thresholds are read from these same conditions, so the predicate and what
//! the UI reports as "required" cannot drift apart.

use crate::model::{ContextField, ContextProfile, Dimension, Flag, Pillar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single comparison against one profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// `field >= n`
    AtLeast(Dimension, u8),
    /// `field <= n`
    AtMost(Dimension, u8),
    /// `flag == value`
    FlagIs(Flag, bool),
}

impl Condition {
    /// The profile field this condition reads.
    #[must_use]
    pub const fn field(&self) -> ContextField {
        match self {
            Self::AtLeast(d, _) | Self::AtMost(d, _) => ContextField::Dimension(*d),
            Self::FlagIs(f, _) => ContextField::Flag(*f),
        }
    }

    /// The required threshold, as displayed to users.
    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        match self {
            Self::AtLeast(_, n) => Threshold::AtLeast(*n),
            Self::AtMost(_, n) => Threshold::AtMost(*n),
            Self::FlagIs(_, v) => Threshold::Equals(*v),
        }
    }

    /// Whether the condition holds for a profile.
    #[must_use]
    pub fn holds(&self, profile: &ContextProfile) -> bool {
        match self {
            Self::AtLeast(d, n) => profile.level(*d).get() >= *n,
            Self::AtMost(d, n) => profile.level(*d).get() <= *n,
            Self::FlagIs(f, v) => profile.flag(*f) == *v,
        }
    }
}

/// Threshold required by a gate condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Threshold {
    AtLeast(u8),
    AtMost(u8),
    Equals(bool),
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(n) => write!(f, ">= {n}"),
            Self::AtMost(n) => write!(f, "<= {n}"),
            Self::Equals(v) => write!(f, "= {v}"),
        }
    }
}

/// How a gate's conditions combine.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// Fires when any condition holds.
    Any(&'static [Condition]),
    /// Fires when every condition holds.
    All(&'static [Condition]),
}

impl Predicate {
    #[must_use]
    pub const fn conditions(&self) -> &'static [Condition] {
        match self {
            Self::Any(c) | Self::All(c) => c,
        }
    }

    /// `any` or `all`.
    #[must_use]
    pub const fn combinator(&self) -> &'static str {
        match self {
            Self::Any(_) => "any",
            Self::All(_) => "all",
        }
    }

    #[must_use]
    pub fn holds(&self, profile: &ContextProfile) -> bool {
        match self {
            Self::Any(c) => c.iter().any(|cond| cond.holds(profile)),
            Self::All(c) => c.iter().all(|cond| cond.holds(profile)),
        }
    }
}

/// A stateless gate definition.
#[derive(Debug, Clone, Copy)]
pub struct GateRule {
    pub id: &'static str,
    pub title: &'static str,
    pub reason: &'static str,
    pub pillar: Option<Pillar>,
    pub predicate: Predicate,
    /// Remediation steps, in the order they should be done.
    pub actions: &'static [&'static str],
}

impl GateRule {
    /// Required threshold for one of this gate's fields.
    #[must_use]
    pub fn threshold_for(&self, field: ContextField) -> Option<Threshold> {
        self.predicate
            .conditions()
            .iter()
            .find(|c| c.field() == field)
            .map(Condition::threshold)
    }
}

use Condition::{AtLeast, AtMost, FlagIs};
use Dimension::{
    BrandExposure, BuildReadiness, DataSensitivity, FinopsPriority, LatencyEdge,
    RegulatoryIntensity, SafetyCriticality, ScaleThroughput,
};

/// Gate catalog. Order here is display order.
pub static GATE_CATALOG: &[GateRule] = &[
    GateRule {
        id: "human_in_the_loop",
        title: "Human-in-the-loop review",
        reason: "Regulated or safety-relevant decisions require a named human reviewer \
                 before AI output is acted on.",
        pillar: Some(Pillar::Risk),
        predicate: Predicate::Any(&[AtLeast(RegulatoryIntensity, 3), AtLeast(SafetyCriticality, 3)]),
        actions: &[
            "Identify every decision point where AI output is acted on",
            "Assign an accountable human reviewer and an override path for each",
            "Log reviewer decisions for audit",
        ],
    },
    GateRule {
        id: "assurance_cadence",
        title: "Model assurance cadence",
        reason: "At the highest regulatory or safety exposure, models need scheduled \
                 validation, not one-off sign-off.",
        pillar: Some(Pillar::Risk),
        predicate: Predicate::Any(&[AtLeast(SafetyCriticality, 4), AtLeast(RegulatoryIntensity, 4)]),
        actions: &[
            "Define a validation schedule per model risk tier",
            "Set drift and performance thresholds that trigger revalidation",
            "Report assurance results to the risk committee each quarter",
        ],
    },
    GateRule {
        id: "privacy_by_design",
        title: "Privacy and data-protection controls",
        reason: "Sensitive data in training or prompts requires minimization, access \
                 control and retention rules before scaling.",
        pillar: Some(Pillar::Risk),
        predicate: Predicate::Any(&[AtLeast(DataSensitivity, 3)]),
        actions: &[
            "Classify the data each AI system touches",
            "Apply minimization and masking before data leaves its system of record",
            "Complete a privacy impact assessment for each production use case",
        ],
    },
    GateRule {
        id: "brand_guardrails",
        title: "Content and brand guardrails",
        reason: "Public-facing AI output can damage trust quickly; red-teaming and \
                 content filters are required before launch.",
        pillar: Some(Pillar::Clarity),
        predicate: Predicate::Any(&[AtLeast(BrandExposure, 3)]),
        actions: &[
            "Red-team customer-facing use cases before launch",
            "Deploy output filtering and escalation for harmful content",
            "Agree a public disclosure statement for AI-generated content",
        ],
    },
    GateRule {
        id: "edge_resilience",
        title: "Edge and offline resilience",
        reason: "Workloads at the edge or with hard latency limits need a defined \
                 degraded mode when models or connectivity fail.",
        pillar: Some(Pillar::Operations),
        predicate: Predicate::Any(&[FlagIs(Flag::EdgeOperations, true), AtLeast(LatencyEdge, 4)]),
        actions: &[
            "Define a fallback behavior for every edge inference path",
            "Budget latency end to end and test it under load",
            "Plan model update and rollback for disconnected sites",
        ],
    },
    GateRule {
        id: "vendor_due_diligence",
        title: "Vendor due diligence",
        reason: "Procurement constraints mean AI vendors must clear security, data-rights \
                 and exit reviews before contracts are signed.",
        pillar: Some(Pillar::Ecosystem),
        predicate: Predicate::All(&[FlagIs(Flag::ProcurementConstraints, true)]),
        actions: &[
            "Add AI-specific questions to the vendor security review",
            "Require data-usage and model-change clauses in contracts",
            "Document an exit plan for each strategic AI vendor",
        ],
    },
    GateRule {
        id: "cost_guardrails",
        title: "AI cost guardrails",
        reason: "When spend is scrutinized or volume is high, unit costs must be \
                 tracked and capped before usage scales.",
        pillar: Some(Pillar::Operations),
        predicate: Predicate::Any(&[AtLeast(FinopsPriority, 3), AtLeast(ScaleThroughput, 4)]),
        actions: &[
            "Tag AI spend by use case and owner",
            "Set unit-cost targets and budget alerts",
            "Review model and hosting choices against cost targets each quarter",
        ],
    },
    GateRule {
        id: "capability_partnering",
        title: "Capability partnering",
        reason: "Low build readiness means delivery depends on partners; in-house \
                 builds should wait until core skills exist.",
        pillar: Some(Pillar::Talent),
        predicate: Predicate::All(&[AtMost(BuildReadiness, 1)]),
        actions: &[
            "Select a delivery partner with knowledge-transfer obligations",
            "Pair internal staff with partner engineers on every engagement",
            "Set a date to reassess build readiness",
        ],
    },
];

/// Look up a gate rule by id.
#[must_use]
pub fn gate_rule(id: &str) -> Option<&'static GateRule> {
    GATE_CATALOG.iter().find(|g| g.id == id)
}
