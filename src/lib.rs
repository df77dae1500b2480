//! **A deterministic scoring and insight engine for AI-maturity self-assessments.**
//!
//! `maturity-pulse` turns a short pulse check (eighteen questions across six
//! pillars) and an organizational context profile into a maturity report:
//! per-pillar scores, aggregate statistics, mandatory safeguards ("gates")
//! and a short, ranked list of executive insights and 90-day priorities.
//!
//! Every step is a pure function over fixed catalogs. Identical inputs give
//! byte-identical serialized output, so reports can be diffed, cached and
//! fingerprinted.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: pillars, the context profile (ten 0-4 dimensions and two
//!   flags), the question catalog and answer scale.
//! - **[`scoring`]**: per-pillar scores (0-3) and [`MaturityAnalysis`]
//!   statistics over the pillars that are fully answered.
//! - **[`gates`]**: the declarative gate catalog and its evaluator, with
//!   explanations of which profile values fired each gate.
//! - **[`insights`]**: the priority cascade that selects at most three
//!   insights and three priorities from a fixed library.
//! - **[`overlay`]**: context-aware default metrics per pillar.
//! - **[`pipeline`]**: one call from input document to [`AssessmentReport`].
//! - **[`reports`]**: summary, JSON and Markdown renderers.
//!
//! ## Getting Started
//!
//! ```
//! use maturity_pulse::model::ResponseParseMode;
//! use maturity_pulse::pipeline::{AssessmentOptions, assess_str};
//!
//! let doc = r#"{"responses": {"C1": 1, "C2": 0.5, "C3": 0.5}}"#;
//! let report = assess_str(doc, ResponseParseMode::Strict, &AssessmentOptions::default())?;
//!
//! assert_eq!(report.scores.len(), 1);
//! assert_eq!(report.analysis.avg, 2.0);
//! assert!(report.gates.is_empty());
//! # Ok::<(), maturity_pulse::PulseError>(())
//! ```
//!
//! Pillars with unanswered questions are left out of the score map rather
//! than scored as zero; the report lists them under `missing_pillars`.

#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod gates;
pub mod insights;
pub mod model;
pub mod overlay;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use error::{ErrorContext, OptionContext, PulseError, Result};
pub use gates::{GateEvaluator, TriggeredGate, evaluate_gates};
pub use insights::{Insight, InsightSet, Priority, generate_insights};
pub use model::{ContextProfile, Pillar, PulseAnswer, PulseResponses};
pub use overlay::{ValueOverlay, select_default_metrics};
pub use pipeline::{AssessmentInput, AssessmentOptions, AssessmentReport, run_assessment};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{MaturityAnalysis, PillarScores, analyze_maturity, score_pillars};
