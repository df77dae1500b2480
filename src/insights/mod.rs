//! Executive insights and 90-day priorities.
//!
//! Selection is a fixed cascade over a static text library; nothing here
//! generates free text.

mod engine;
mod library;
mod template;

pub use engine::{
    CRITICAL_GATE_COUNT, DATA_DEBT_MIN_AVERAGE, IMBALANCE_VARIANCE, Insight, InsightSet,
    MAX_SELECTIONS, Priority, generate_insights,
};
pub use library::{
    INSIGHT_LIBRARY, InsightKind, InsightTemplate, PRIORITY_LIBRARY, PriorityTemplate, Urgency,
    insight_template, priority_template,
};
pub use template::{SLOTS, TemplateVars};
