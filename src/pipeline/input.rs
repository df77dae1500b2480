//! Assessment input parsing.
//!
//! Input is a JSON object with an optional `profile` and a `responses` map.
//! Both parts are validated here, before any scoring happens.

use crate::error::{ErrorContext, PulseError, Result};
use crate::model::{ContextProfile, PulseResponses, ResponseParseMode};
use crate::utils::fingerprint;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

const PROFILE_KEY: &str = "profile";
const RESPONSES_KEY: &str = "responses";

/// A validated assessment snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ContextProfile>,
    pub responses: PulseResponses,
}

impl AssessmentInput {
    #[must_use]
    pub const fn new(profile: Option<ContextProfile>, responses: PulseResponses) -> Self {
        Self { profile, responses }
    }

    /// Validate a parsed JSON document.
    ///
    /// A missing or `null` profile means "no context supplied". A missing
    /// `responses` key means nothing has been answered yet.
    pub fn from_json_value(value: &Value, mode: ResponseParseMode) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(PulseError::validation(
                "assessment input must be a JSON object",
            ));
        };
        reject_unknown_keys(map)?;

        let profile = match map.get(PROFILE_KEY) {
            None | Some(Value::Null) => None,
            Some(raw) => Some(ContextProfile::from_json_value(raw)?),
        };
        let responses = match map.get(RESPONSES_KEY) {
            None | Some(Value::Null) => PulseResponses::new(),
            Some(raw) => PulseResponses::from_json_value(raw, mode)?,
        };
        Ok(Self { profile, responses })
    }

    /// Parse and validate JSON text.
    pub fn from_json_str(text: &str, mode: ResponseParseMode) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| PulseError::json("assessment input", e))?;
        Self::from_json_value(&value, mode)
    }

    /// Stable fingerprint of the validated input.
    ///
    /// Computed over the canonical serialization, so key order and number
    /// spelling in the source document do not change it.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::to_vec(self).unwrap_or_default();
        fingerprint(&canonical)
    }
}

fn reject_unknown_keys(map: &Map<String, Value>) -> Result<()> {
    match map
        .keys()
        .find(|k| k.as_str() != PROFILE_KEY && k.as_str() != RESPONSES_KEY)
    {
        Some(key) => Err(PulseError::validation(format!(
            "unknown top-level key '{key}' (expected '{PROFILE_KEY}' and '{RESPONSES_KEY}')"
        ))),
        None => Ok(()),
    }
}

/// Read and validate an assessment input file.
pub fn parse_input_file(path: &Path, mode: ResponseParseMode) -> Result<AssessmentInput> {
    tracing::info!("Reading assessment input: {:?}", path);
    let text = std::fs::read_to_string(path).map_err(|e| PulseError::io(path, e))?;
    AssessmentInput::from_json_str(&text, mode)
        .with_context(|| format!("loading {}", path.display()))
}

/// Read and validate a standalone context-profile file.
pub fn parse_profile_file(path: &Path) -> Result<ContextProfile> {
    let text = std::fs::read_to_string(path).map_err(|e| PulseError::io(path, e))?;
    let value: Value =
        serde_json::from_str(&text).map_err(|e| PulseError::json("context profile", e))?;
    // Accept either a bare profile or a full assessment document.
    let raw = match &value {
        Value::Object(map) if map.contains_key(PROFILE_KEY) => &map[PROFILE_KEY],
        other => other,
    };
    ContextProfile::from_json_value(raw).with_context(|| format!("loading {}", path.display()))
}
