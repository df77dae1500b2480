//! Domain model: pillars, context profile, pulse questionnaire and stages.
//!
//! Everything here is fixed catalog data plus the validated input types the
//! engine consumes. Catalogs are `static` and never mutated.

mod context;
mod pillar;
mod pulse;
mod stage;

pub use context::{
    ContextField, ContextProfile, ContextProfileBuilder, Dimension, FieldValue, Flag,
    ProfileRecord,
};
pub use pillar::Pillar;
pub use pulse::{
    PulseAnswer, PulseResponses, QUESTIONS, QUESTIONS_PER_PILLAR, Question, QuestionId,
    ResponseParseMode, question,
};
pub use stage::{
    FOUNDATIONS_CRITICAL_BELOW, FOUNDATIONS_WEAK_BELOW, MaturityBand, OPTIMIZATION_FOCUS_BELOW,
    PillarStage, SYSTEMATIC_DEVELOPMENT_BELOW,
};
