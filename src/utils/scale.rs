//! Bounded ordinal levels, flag normalization and display formatting.
//!
//! Context dimensions are rated on a 0-4 ordinal scale. Callers tend to post
//! form data, so normalization accepts integral numbers in several spellings
//! but never rounds or clamps: `2.5` and `5` are rejected, not coerced.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Highest value on the ordinal context scale.
pub const MAX_LEVEL: u8 = 4;

/// A validated ordinal level in `0..=4`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(MAX_LEVEL);

    /// Create a level, returning `None` when `value` exceeds the scale.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_LEVEL {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw ordinal value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| format!("level must be between 0 and {MAX_LEVEL}, got {value}"))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalize a JSON value into a [`Level`].
///
/// Accepts integers, integral floats (`3.0`) and integral numeric strings
/// (`"3"`, `" 2 "`). Returns `None` for everything else.
#[must_use]
pub fn normalize_level(value: &Value) -> Option<Level> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u8::try_from(u).ok().and_then(Level::new)
            } else if let Some(f) = n.as_f64() {
                level_from_f64(f)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse::<u8>().ok().and_then(Level::new),
        _ => None,
    }
}

fn level_from_f64(f: f64) -> Option<Level> {
    if !f.is_finite() || f.fract() != 0.0 || !(0.0..=f64::from(MAX_LEVEL)).contains(&f) {
        return None;
    }
    Level::new(f as u8)
}

/// Normalize a JSON value into a boolean flag.
///
/// Accepts booleans, the numbers `0`/`1`, and `true/false/yes/no/1/0`
/// strings (case-insensitive).
#[must_use]
pub fn normalize_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Render a JSON value for inclusion in an error message.
#[must_use]
pub fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}

// ============================================================================
// Display formatting
// ============================================================================

/// Format a score or average to one decimal place.
#[must_use]
pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

/// Format a pillar score against its 0-3 range, e.g. `"2.3/3"`.
#[must_use]
pub fn format_pillar_score(value: f64) -> String {
    format!("{value:.1}/3")
}

/// Format an ordinal level against its 0-4 range, e.g. `"3/4"`.
#[must_use]
pub fn format_level(level: Level) -> String {
    format!("{level}/{MAX_LEVEL}")
}

/// Format a point spread, e.g. `"1.5 points"`.
#[must_use]
pub fn format_points(value: f64) -> String {
    format!("{value:.1} points")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_level_bounds() {
        assert_eq!(Level::new(0), Some(Level::MIN));
        assert_eq!(Level::new(4), Some(Level::MAX));
        assert_eq!(Level::new(5), None);
        assert!(Level::try_from(9).is_err());
    }

    #[test]
    fn test_normalize_level_accepts_integral_spellings() {
        assert_eq!(normalize_level(&json!(3)).map(Level::get), Some(3));
        assert_eq!(normalize_level(&json!(2.0)).map(Level::get), Some(2));
        assert_eq!(normalize_level(&json!("4")).map(Level::get), Some(4));
        assert_eq!(normalize_level(&json!(" 1 ")).map(Level::get), Some(1));
    }

    #[test]
    fn test_normalize_level_rejects_without_coercion() {
        assert_eq!(normalize_level(&json!(2.5)), None);
        assert_eq!(normalize_level(&json!(5)), None);
        assert_eq!(normalize_level(&json!(-1)), None);
        assert_eq!(normalize_level(&json!(null)), None);
        assert_eq!(normalize_level(&json!("high")), None);
        assert_eq!(normalize_level(&json!(true)), None);
    }

    #[test]
    fn test_normalize_flag() {
        assert_eq!(normalize_flag(&json!(true)), Some(true));
        assert_eq!(normalize_flag(&json!(0)), Some(false));
        assert_eq!(normalize_flag(&json!("Yes")), Some(true));
        assert_eq!(normalize_flag(&json!("no")), Some(false));
        assert_eq!(normalize_flag(&json!(2)), None);
        assert_eq!(normalize_flag(&json!("maybe")), None);
        assert_eq!(normalize_flag(&json!(null)), None);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_score(1.26), "1.3");
        assert_eq!(format_score(3.0), "3.0");
        assert_eq!(format_pillar_score(2.34), "2.3/3");
        assert_eq!(format_level(Level::MAX), "4/4");
        assert_eq!(format_points(1.5), "1.5 points");
    }

    #[test]
    fn test_level_serde() {
        let level: Level = serde_json::from_str("3").expect("valid level");
        assert_eq!(level.get(), 3);
        assert!(serde_json::from_str::<Level>("7").is_err());
        assert_eq!(serde_json::to_string(&level).expect("serialize"), "3");
    }
}
