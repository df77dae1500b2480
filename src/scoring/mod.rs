//! Pillar scoring and maturity analysis.
//!
//! ```
//! use maturity_pulse::model::{Pillar, PulseAnswer, PulseResponses};
//! use maturity_pulse::scoring::{analyze_maturity, score_pillars, weakest_domains};
//!
//! let responses = PulseResponses::uniform(PulseAnswer::Mostly)
//!     .with_pillar(Pillar::Talent, PulseAnswer::Started);
//! let scores = score_pillars(&responses);
//! let analysis = analyze_maturity(&scores);
//!
//! assert_eq!(scores.get(Pillar::Talent), Some(0.75));
//! assert_eq!(weakest_domains(&scores, 1)[0].pillar, Pillar::Talent);
//! assert!(analysis.has_weaknesses);
//! ```

mod analysis;
mod pillars;

pub use analysis::{
    MaturityAnalysis, PillarScore, STRENGTH_THRESHOLD, UNBALANCED_VARIANCE, WEAKNESS_THRESHOLD,
    analyze_maturity, strongest_domains, weakest_domains,
};
pub use pillars::{MAX_PILLAR_SCORE, PillarScores, score_pillars, score_raw};
