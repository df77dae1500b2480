//! The six maturity pillars.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six fixed maturity dimensions.
///
/// Declaration order (C, O, R, T, E, X) is the canonical enumeration order and
/// the tie-break order wherever pillars are ranked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Pillar {
    #[serde(rename = "C")]
    Clarity,
    #[serde(rename = "O")]
    Operations,
    #[serde(rename = "R")]
    Risk,
    #[serde(rename = "T")]
    Talent,
    #[serde(rename = "E")]
    Ecosystem,
    #[serde(rename = "X")]
    Experimentation,
}

impl Pillar {
    /// All pillars in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Clarity,
        Self::Operations,
        Self::Risk,
        Self::Talent,
        Self::Ecosystem,
        Self::Experimentation,
    ];

    /// Single-letter code used in question ids and wire formats.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clarity => 'C',
            Self::Operations => 'O',
            Self::Risk => 'R',
            Self::Talent => 'T',
            Self::Ecosystem => 'E',
            Self::Experimentation => 'X',
        }
    }

    /// Display name used in insight text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clarity => "Clarity",
            Self::Operations => "Operations",
            Self::Risk => "Risk",
            Self::Talent => "Talent",
            Self::Ecosystem => "Ecosystem",
            Self::Experimentation => "Experimentation",
        }
    }

    /// What the pillar measures.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Clarity => "Strategic intent, ownership and value cases for AI",
            Self::Operations => "Data foundations, delivery pipelines and run discipline",
            Self::Risk => "Governance, controls and responsible-use safeguards",
            Self::Talent => "Skills, roles and change adoption",
            Self::Ecosystem => "Partners, vendors and platform leverage",
            Self::Experimentation => "Pilot throughput and learning loops",
        }
    }

    /// Parse a pillar from its letter or display name (case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|p| {
            code.eq_ignore_ascii_case(p.name())
                || (code.len() == 1 && code.eq_ignore_ascii_case(&p.letter().to_string()))
        })
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| format!("unknown pillar '{s}' (expected C, O, R, T, E or X)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let letters: String = Pillar::ALL.iter().map(|p| p.letter()).collect();
        assert_eq!(letters, "CORTEX");

        let mut sorted = Pillar::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, Pillar::ALL);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Pillar::from_code("o"), Some(Pillar::Operations));
        assert_eq!(Pillar::from_code("Talent"), Some(Pillar::Talent));
        assert_eq!(Pillar::from_code("Q"), None);
        assert_eq!(Pillar::from_code(""), None);
        assert!("Z".parse::<Pillar>().is_err());
    }

    #[test]
    fn test_serde_uses_letters() {
        let json = serde_json::to_string(&Pillar::Experimentation).expect("serialize");
        assert_eq!(json, "\"X\"");
        let back: Pillar = serde_json::from_str("\"R\"").expect("deserialize");
        assert_eq!(back, Pillar::Risk);
    }
}
