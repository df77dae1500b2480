//! Unified error types for maturity-pulse.
//!
//! Validation failures are raised synchronously to the caller. The engine does
//! no I/O of its own, so there is no transient failure class and nothing here is
//! retryable. Incomplete pulse responses are *not* an error: unscored pillars are
//! simply absent from the score map.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for maturity-pulse operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PulseError {
    /// The context profile is missing a field, has an out-of-range value, or
    /// carries a key outside the dimension catalog.
    #[error("Invalid context profile: {context}")]
    Profile {
        context: String,
        #[source]
        source: ProfileErrorKind,
    },

    /// A pulse response key or value is outside the question catalog.
    #[error("Invalid pulse responses: {context}")]
    Responses {
        context: String,
        #[source]
        source: ResponseErrorKind,
    },

    /// Value-overlay edits that reference unknown pillars/metrics or bad numbers.
    #[error("Value overlay error: {context}")]
    Overlay {
        context: String,
        #[source]
        source: OverlayErrorKind,
    },

    /// Malformed JSON input
    #[error("Malformed input: {context}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific context-profile error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileErrorKind {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Field '{field}' must be an integer between 0 and 4, got {value}")]
    OutOfRange { field: String, value: String },

    #[error("Field '{field}' must be a boolean, got {value}")]
    NotBoolean { field: String, value: String },

    #[error("Unknown context dimension: {0}")]
    UnknownDimension(String),

    #[error("Context profile must be a JSON object")]
    NotAnObject,
}

/// Specific pulse-response error kinds
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ResponseErrorKind {
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Answer for {question} must be one of 0, 0.25, 0.5, 1 (got {value})")]
    InvalidAnswer { question: String, value: String },

    #[error("Pulse responses must be a JSON object")]
    NotAnObject,
}

/// Specific value-overlay error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OverlayErrorKind {
    #[error("Unknown pillar: {0}")]
    UnknownPillar(String),

    #[error("Metric '{metric}' is not defined for pillar {pillar}")]
    UnknownMetric { pillar: String, metric: String },

    #[error("{field} for pillar {pillar} must be a finite number")]
    NonFiniteValue { pillar: String, field: String },

    #[error("No overlay entry for pillar {0}")]
    MissingEntry(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for maturity-pulse operations
pub type Result<T> = std::result::Result<T, PulseError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PulseError {
    /// Create a profile error with context
    pub fn profile(context: impl Into<String>, source: ProfileErrorKind) -> Self {
        Self::Profile {
            context: context.into(),
            source,
        }
    }

    /// Create a profile error for a missing field
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::profile(
            "profile is incomplete",
            ProfileErrorKind::MissingField {
                field: field.into(),
            },
        )
    }

    /// Create a profile error for an unknown dimension key
    pub fn unknown_dimension(key: impl Into<String>) -> Self {
        Self::profile(
            "key not in dimension catalog",
            ProfileErrorKind::UnknownDimension(key.into()),
        )
    }

    /// Create a response error with context
    pub fn responses(context: impl Into<String>, source: ResponseErrorKind) -> Self {
        Self::Responses {
            context: context.into(),
            source,
        }
    }

    /// Create a response error for an unknown question id
    pub fn unknown_question(key: impl Into<String>) -> Self {
        Self::responses(
            "key not in question catalog",
            ResponseErrorKind::UnknownQuestion(key.into()),
        )
    }

    /// Create a response error for an off-scale answer
    pub fn invalid_answer(question: impl Into<String>, value: impl ToString) -> Self {
        Self::responses(
            "answer outside the pulse scale",
            ResponseErrorKind::InvalidAnswer {
                question: question.into(),
                value: value.to_string(),
            },
        )
    }

    /// Create an overlay error with context
    pub fn overlay(context: impl Into<String>, source: OverlayErrorKind) -> Self {
        Self::Overlay {
            context: context.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True when the failure means "your profile is incomplete or invalid".
    #[must_use]
    pub const fn is_profile_error(&self) -> bool {
        matches!(self, Self::Profile { .. })
    }

    /// True when the failure concerns pulse responses (integration drift between
    /// caller and catalog), as opposed to an assessment that is merely unfinished.
    #[must_use]
    pub const fn is_response_error(&self) -> bool {
        matches!(self, Self::Responses { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for PulseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        Self::json("JSON deserialization", err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to any existing context, so a failure deep
/// in input parsing reads as `"loading input.json: profile: profile is incomplete"`.
///
/// ```ignore
/// use maturity_pulse::error::ErrorContext;
///
/// let profile = ContextProfile::from_json_str(&text)
///     .with_context(|| format!("reading profile from {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PulseError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: PulseError, new_ctx: &str) -> PulseError {
    match err {
        PulseError::Profile {
            context: existing,
            source,
        } => PulseError::Profile {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PulseError::Responses {
            context: existing,
            source,
        } => PulseError::Responses {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PulseError::Overlay {
            context: existing,
            source,
        } => PulseError::Overlay {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PulseError::Json {
            context: existing,
            source,
        } => PulseError::Json {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PulseError::Io {
            path,
            message,
            source,
        } => PulseError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PulseError::Config(msg) => PulseError::Config(chain_context(new_ctx, &msg)),
        PulseError::Validation(msg) => PulseError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| PulseError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| PulseError::Validation(f().into()))
    }
}
