//! Context profile: the organization's operating environment.
//!
//! Ten ordinal dimensions on a 0-4 scale plus two boolean flags. A profile is
//! immutable once built; editing produces a new profile. Every field is
//! required: `0` is a meaningful low value, so an absent field is rejected
//! rather than defaulted.

use crate::error::{ProfileErrorKind, PulseError, Result};
use crate::utils::scale::{Level, describe_value, normalize_flag, normalize_level};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Ordinal context dimensions (0-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    RegulatoryIntensity,
    DataSensitivity,
    SafetyCriticality,
    BrandExposure,
    ClockSpeed,
    LatencyEdge,
    ScaleThroughput,
    DataAdvantage,
    BuildReadiness,
    FinopsPriority,
}

impl Dimension {
    /// All dimensions in catalog order.
    pub const ALL: [Self; 10] = [
        Self::RegulatoryIntensity,
        Self::DataSensitivity,
        Self::SafetyCriticality,
        Self::BrandExposure,
        Self::ClockSpeed,
        Self::LatencyEdge,
        Self::ScaleThroughput,
        Self::DataAdvantage,
        Self::BuildReadiness,
        Self::FinopsPriority,
    ];

    /// Wire key (snake_case).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::RegulatoryIntensity => "regulatory_intensity",
            Self::DataSensitivity => "data_sensitivity",
            Self::SafetyCriticality => "safety_criticality",
            Self::BrandExposure => "brand_exposure",
            Self::ClockSpeed => "clock_speed",
            Self::LatencyEdge => "latency_edge",
            Self::ScaleThroughput => "scale_throughput",
            Self::DataAdvantage => "data_advantage",
            Self::BuildReadiness => "build_readiness",
            Self::FinopsPriority => "finops_priority",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RegulatoryIntensity => "Regulatory intensity",
            Self::DataSensitivity => "Data sensitivity",
            Self::SafetyCriticality => "Safety criticality",
            Self::BrandExposure => "Brand exposure",
            Self::ClockSpeed => "Clock speed",
            Self::LatencyEdge => "Latency at the edge",
            Self::ScaleThroughput => "Scale and throughput",
            Self::DataAdvantage => "Proprietary data advantage",
            Self::BuildReadiness => "Build readiness",
            Self::FinopsPriority => "FinOps priority",
        }
    }

    /// Question shown at intake.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::RegulatoryIntensity => "How heavily regulated are the decisions AI will touch?",
            Self::DataSensitivity => "How sensitive is the data AI systems will process?",
            Self::SafetyCriticality => "Could an AI error cause physical or financial harm?",
            Self::BrandExposure => "How visible are AI outputs to customers and the public?",
            Self::ClockSpeed => "How fast does your market expect change?",
            Self::LatencyEdge => "How latency-sensitive are the target workloads?",
            Self::ScaleThroughput => "How much volume will AI workloads carry?",
            Self::DataAdvantage => "How differentiated is your proprietary data?",
            Self::BuildReadiness => "How ready is the organization to build in-house?",
            Self::FinopsPriority => "How tightly is AI spend scrutinized?",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// Look up a dimension by its wire key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

/// Boolean context flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    ProcurementConstraints,
    EdgeOperations,
}

impl Flag {
    /// All flags in catalog order.
    pub const ALL: [Self; 2] = [Self::ProcurementConstraints, Self::EdgeOperations];

    /// Wire key (snake_case).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ProcurementConstraints => "procurement_constraints",
            Self::EdgeOperations => "edge_operations",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProcurementConstraints => "Procurement constraints",
            Self::EdgeOperations => "Edge operations",
        }
    }

    /// Look up a flag by its wire key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Any of the twelve profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextField {
    Dimension(Dimension),
    Flag(Flag),
}

impl ContextField {
    /// Wire key of the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dimension(d) => d.key(),
            Self::Flag(f) => f.key(),
        }
    }

    /// Human-readable label of the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dimension(d) => d.label(),
            Self::Flag(f) => f.label(),
        }
    }

    /// Look up any field by wire key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Dimension::from_key(key)
            .map(Self::Dimension)
            .or_else(|| Flag::from_key(key).map(Self::Flag))
    }

    /// All twelve fields: dimensions first, then flags.
    pub fn all() -> impl Iterator<Item = Self> {
        Dimension::ALL
            .into_iter()
            .map(Self::Dimension)
            .chain(Flag::ALL.into_iter().map(Self::Flag))
    }
}

impl From<Dimension> for ContextField {
    fn from(d: Dimension) -> Self {
        Self::Dimension(d)
    }
}

impl From<Flag> for ContextField {
    fn from(f: Flag) -> Self {
        Self::Flag(f)
    }
}

impl fmt::Display for ContextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Literal value of a profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Level(Level),
    Flag(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => write!(f, "{level}"),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// A complete, validated context profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ProfileRecord", try_from = "Map<String, Value>")]
pub struct ContextProfile {
    levels: [Level; 10],
    procurement_constraints: bool,
    edge_operations: bool,
}

impl ContextProfile {
    /// Start building a profile field by field.
    pub fn builder() -> ContextProfileBuilder {
        ContextProfileBuilder::default()
    }

    /// A profile with every dimension at `level` and both flags off.
    #[must_use]
    pub const fn uniform(level: Level) -> Self {
        Self {
            levels: [level; 10],
            procurement_constraints: false,
            edge_operations: false,
        }
    }

    /// Level of an ordinal dimension.
    #[must_use]
    pub const fn level(&self, dimension: Dimension) -> Level {
        self.levels[dimension.index()]
    }

    /// Value of a boolean flag.
    #[must_use]
    pub const fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::ProcurementConstraints => self.procurement_constraints,
            Flag::EdgeOperations => self.edge_operations,
        }
    }

    /// Literal value of any field.
    #[must_use]
    pub const fn value(&self, field: ContextField) -> FieldValue {
        match field {
            ContextField::Dimension(d) => FieldValue::Level(self.level(d)),
            ContextField::Flag(f) => FieldValue::Flag(self.flag(f)),
        }
    }

    /// A copy of this profile with one dimension changed.
    #[must_use]
    pub const fn with_level(mut self, dimension: Dimension, level: Level) -> Self {
        self.levels[dimension.index()] = level;
        self
    }

    /// A copy of this profile with one flag changed.
    #[must_use]
    pub const fn with_flag(mut self, flag: Flag, value: bool) -> Self {
        match flag {
            Flag::ProcurementConstraints => self.procurement_constraints = value,
            Flag::EdgeOperations => self.edge_operations = value,
        }
        self
    }

    /// Validate a raw JSON object into a profile.
    ///
    /// Unknown keys, missing fields, off-scale levels and non-boolean flags
    /// are all rejected.
    pub fn from_json_map(map: &Map<String, Value>) -> Result<Self> {
        if let Some(unknown) = map.keys().find(|k| ContextField::from_key(k).is_none()) {
            return Err(PulseError::unknown_dimension(unknown.clone()));
        }

        let mut builder = Self::builder();
        for dimension in Dimension::ALL {
            let raw = present(map, dimension.key())?;
            let level = normalize_level(raw).ok_or_else(|| {
                PulseError::profile(
                    "value outside the 0-4 scale",
                    ProfileErrorKind::OutOfRange {
                        field: dimension.key().to_string(),
                        value: describe_value(raw),
                    },
                )
            })?;
            builder = builder.level(dimension, level.get());
        }
        for flag in Flag::ALL {
            let raw = present(map, flag.key())?;
            let value = normalize_flag(raw).ok_or_else(|| {
                PulseError::profile(
                    "flag is not a boolean",
                    ProfileErrorKind::NotBoolean {
                        field: flag.key().to_string(),
                        value: describe_value(raw),
                    },
                )
            })?;
            builder = builder.flag(flag, value);
        }
        builder.build()
    }

    /// Validate a JSON value (which must be an object) into a profile.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_json_map(map),
            _ => Err(PulseError::profile(
                "expected an object",
                ProfileErrorKind::NotAnObject,
            )),
        }
    }

    /// Parse and validate a profile from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| PulseError::json("context profile", e))?;
        Self::from_json_value(&value)
    }
}

fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    match map.get(key) {
        Some(Value::Null) | None => Err(PulseError::missing_field(key)),
        Some(value) => Ok(value),
    }
}

impl TryFrom<Map<String, Value>> for ContextProfile {
    type Error = PulseError;

    fn try_from(map: Map<String, Value>) -> Result<Self> {
        Self::from_json_map(&map)
    }
}

/// Serialized form of a profile: fields in catalog order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ProfileRecord(IndexMap<&'static str, FieldValue>);

impl From<ContextProfile> for ProfileRecord {
    fn from(profile: ContextProfile) -> Self {
        Self(
            ContextField::all()
                .map(|field| (field.key(), profile.value(field)))
                .collect(),
        )
    }
}

/// Field-by-field builder; [`build`](Self::build) enforces completeness.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ContextProfileBuilder {
    levels: [Option<u8>; 10],
    flags: [Option<bool>; 2],
}

impl ContextProfileBuilder {
    /// Set an ordinal dimension. Range is checked in [`build`](Self::build).
    pub const fn level(mut self, dimension: Dimension, value: u8) -> Self {
        self.levels[dimension.index()] = Some(value);
        self
    }

    /// Set a boolean flag.
    pub const fn flag(mut self, flag: Flag, value: bool) -> Self {
        self.flags[flag as usize] = Some(value);
        self
    }

    /// Set every dimension that is still unset to `value`.
    pub fn fill_levels(mut self, value: u8) -> Self {
        for slot in &mut self.levels {
            slot.get_or_insert(value);
        }
        self
    }

    /// Validate and produce the profile.
    pub fn build(self) -> Result<ContextProfile> {
        let mut levels = [Level::MIN; 10];
        for dimension in Dimension::ALL {
            let raw = self.levels[dimension.index()]
                .ok_or_else(|| PulseError::missing_field(dimension.key()))?;
            levels[dimension.index()] = Level::new(raw).ok_or_else(|| {
                PulseError::profile(
                    "value outside the 0-4 scale",
                    ProfileErrorKind::OutOfRange {
                        field: dimension.key().to_string(),
                        value: raw.to_string(),
                    },
                )
            })?;
        }
        let flag = |f: Flag| {
            self.flags[f as usize].ok_or_else(|| PulseError::missing_field(f.key()))
        };
        Ok(ContextProfile {
            levels,
            procurement_constraints: flag(Flag::ProcurementConstraints)?,
            edge_operations: flag(Flag::EdgeOperations)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_json() -> Value {
        json!({
            "regulatory_intensity": 3,
            "data_sensitivity": 2,
            "safety_criticality": 1,
            "brand_exposure": 0,
            "clock_speed": 4,
            "latency_edge": 2,
            "scale_throughput": 2,
            "data_advantage": 3,
            "build_readiness": 1,
            "finops_priority": 2,
            "procurement_constraints": true,
            "edge_operations": false
        })
    }

    #[test]
    fn test_from_json_valid() {
        let profile = ContextProfile::from_json_value(&full_json()).expect("valid profile");
        assert_eq!(profile.level(Dimension::RegulatoryIntensity).get(), 3);
        assert_eq!(profile.level(Dimension::ClockSpeed), Level::MAX);
        assert!(profile.flag(Flag::ProcurementConstraints));
        assert!(!profile.flag(Flag::EdgeOperations));
    }

    #[test]
    fn test_missing_field_is_rejected_not_defaulted() {
        let mut value = full_json();
        value
            .as_object_mut()
            .expect("object")
            .remove("brand_exposure");
        let err = ContextProfile::from_json_value(&value).expect_err("must reject");
        match err {
            PulseError::Profile { source, .. } => assert_eq!(
                source,
                ProfileErrorKind::MissingField {
                    field: "brand_exposure".to_string()
                }
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut value = full_json();
        value["edge_operations"] = Value::Null;
        let err = ContextProfile::from_json_value(&value).expect_err("must reject");
        assert!(err.is_profile_error());
    }

    #[test]
    fn test_out_of_range_and_non_boolean() {
        let mut value = full_json();
        value["latency_edge"] = json!(5);
        assert!(matches!(
            ContextProfile::from_json_value(&value),
            Err(PulseError::Profile {
                source: ProfileErrorKind::OutOfRange { .. },
                ..
            })
        ));

        let mut value = full_json();
        value["edge_operations"] = json!("sometimes");
        assert!(matches!(
            ContextProfile::from_json_value(&value),
            Err(PulseError::Profile {
                source: ProfileErrorKind::NotBoolean { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_dimension_rejected() {
        let mut value = full_json();
        value["team_size"] = json!(3);
        assert!(matches!(
            ContextProfile::from_json_value(&value),
            Err(PulseError::Profile {
                source: ProfileErrorKind::UnknownDimension(_),
                ..
            })
        ));
    }

    #[test]
    fn test_not_an_object() {
        assert!(ContextProfile::from_json_value(&json!([1, 2])).is_err());
        assert!(ContextProfile::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_builder_requires_every_field() {
        let err = ContextProfile::builder()
            .fill_levels(2)
            .flag(Flag::EdgeOperations, true)
            .build()
            .expect_err("procurement flag missing");
        assert!(err.to_string().contains("profile"));

        let profile = ContextProfile::builder()
            .fill_levels(2)
            .flag(Flag::EdgeOperations, true)
            .flag(Flag::ProcurementConstraints, false)
            .build()
            .expect("complete");
        assert!(profile.flag(Flag::EdgeOperations));

        assert!(
            ContextProfile::builder()
                .level(Dimension::DataAdvantage, 9)
                .fill_levels(0)
                .flag(Flag::EdgeOperations, false)
                .flag(Flag::ProcurementConstraints, false)
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_edits_produce_new_profile() {
        let base = ContextProfile::uniform(Level::MIN);
        let edited = base.with_level(Dimension::SafetyCriticality, Level::MAX);
        assert_eq!(base.level(Dimension::SafetyCriticality), Level::MIN);
        assert_eq!(edited.level(Dimension::SafetyCriticality), Level::MAX);
        assert!(edited.with_flag(Flag::EdgeOperations, true).flag(Flag::EdgeOperations));
    }

    #[test]
    fn test_serde_round_trip_keeps_catalog_order() {
        let profile = ContextProfile::from_json_value(&full_json()).expect("valid");
        let text = serde_json::to_string(&profile).expect("serialize");
        assert!(text.starts_with("{\"regulatory_intensity\":3"));
        assert!(text.ends_with("\"edge_operations\":false}"));
        let back: ContextProfile = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, profile);
    }
}
