//! Maturity statistics and pillar ranking.
//!
//! Statistics only consider pillars that are present in the score map; a
//! missing pillar neither contributes to the sum nor to the denominator.

use super::pillars::PillarScores;
use crate::model::{MaturityBand, Pillar};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Variance above which maturity counts as spiky rather than broadly even.
pub const UNBALANCED_VARIANCE: f64 = 0.8;
/// A pillar at or above this score is a strength.
pub const STRENGTH_THRESHOLD: f64 = 2.5;
/// A pillar at or below this score is a weakness.
pub const WEAKNESS_THRESHOLD: f64 = 1.0;

/// Aggregate statistics over the scored pillars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaturityAnalysis {
    /// Number of pillars the statistics were computed over
    pub pillar_count: usize,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    /// Population variance
    pub variance: f64,
    pub is_unbalanced: bool,
    pub has_strengths: bool,
    pub has_weaknesses: bool,
}

impl MaturityAnalysis {
    /// The defined "no data" state used when nothing is scored yet.
    #[must_use]
    pub const fn no_data() -> Self {
        Self {
            pillar_count: 0,
            avg: 0.0,
            min: 0.0,
            max: 0.0,
            variance: 0.0,
            is_unbalanced: false,
            has_strengths: false,
            has_weaknesses: true,
        }
    }

    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.pillar_count > 0
    }

    /// Maturity band for the average, or `None` when nothing is scored.
    #[must_use]
    pub fn band(&self) -> Option<MaturityBand> {
        self.has_data().then(|| MaturityBand::from_average(self.avg))
    }

    /// Gap between the strongest and weakest scored pillar.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for MaturityAnalysis {
    fn default() -> Self {
        Self::no_data()
    }
}

/// Compute avg/min/max/variance and the derived flags.
#[must_use]
pub fn analyze_maturity(scores: &PillarScores) -> MaturityAnalysis {
    if scores.is_empty() {
        return MaturityAnalysis::no_data();
    }

    let n = scores.len() as f64;
    let values: Vec<f64> = scores.iter().map(|(_, s)| s).collect();
    let avg = values.iter().sum::<f64>() / n;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n;

    MaturityAnalysis {
        pillar_count: scores.len(),
        avg,
        min,
        max,
        variance,
        is_unbalanced: variance > UNBALANCED_VARIANCE,
        has_strengths: max >= STRENGTH_THRESHOLD,
        has_weaknesses: min <= WEAKNESS_THRESHOLD,
    }
}

/// A pillar paired with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarScore {
    pub pillar: Pillar,
    pub score: f64,
}

/// The `count` lowest-scoring pillars, ascending.
///
/// Ties keep canonical C, O, R, T, E, X order (stable sort), so "the" weakest
/// domain is always well defined.
#[must_use]
pub fn weakest_domains(scores: &PillarScores, count: usize) -> Vec<PillarScore> {
    ranked(scores, count, |a, b| a.partial_cmp(&b).unwrap_or(Ordering::Equal))
}

/// The `count` highest-scoring pillars, descending, with the same tie-break.
#[must_use]
pub fn strongest_domains(scores: &PillarScores, count: usize) -> Vec<PillarScore> {
    ranked(scores, count, |a, b| b.partial_cmp(&a).unwrap_or(Ordering::Equal))
}

fn ranked(
    scores: &PillarScores,
    count: usize,
    order: impl Fn(f64, f64) -> Ordering,
) -> Vec<PillarScore> {
    let mut entries: Vec<PillarScore> = scores
        .iter()
        .map(|(pillar, score)| PillarScore { pillar, score })
        .collect();
    entries.sort_by(|a, b| order(a.score, b.score));
    entries.truncate(count);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(Pillar, f64)]) -> PillarScores {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_no_data_state() {
        let analysis = analyze_maturity(&PillarScores::new());
        assert_eq!(analysis, MaturityAnalysis::no_data());
        assert_eq!(analysis.avg, 0.0);
        assert!(!analysis.is_unbalanced);
        assert!(!analysis.has_strengths);
        assert!(analysis.has_weaknesses);
        assert_eq!(analysis.band(), None);
    }

    #[test]
    fn test_single_pillar_statistics() {
        let analysis = analyze_maturity(&scores(&[(Pillar::Operations, 2.25)]));
        assert_eq!(analysis.pillar_count, 1);
        assert_eq!(analysis.avg, 2.25);
        assert_eq!(analysis.min, 2.25);
        assert_eq!(analysis.max, 2.25);
        assert_eq!(analysis.variance, 0.0);
        assert!(!analysis.has_weaknesses);
    }

    #[test]
    fn test_variance_and_flags() {
        // values 0, 3 -> avg 1.5, variance 2.25
        let analysis = analyze_maturity(&scores(&[(Pillar::Clarity, 0.0), (Pillar::Risk, 3.0)]));
        assert_eq!(analysis.avg, 1.5);
        assert_eq!(analysis.variance, 2.25);
        assert!(analysis.is_unbalanced);
        assert!(analysis.has_strengths);
        assert!(analysis.has_weaknesses);
        assert_eq!(analysis.spread(), 3.0);
        assert_eq!(analysis.band(), Some(MaturityBand::SystematicDevelopment));
    }

    #[test]
    fn test_unbalanced_threshold_is_strict() {
        // values 1, 2.5 -> avg 1.75, variance 0.5625
        let analysis = analyze_maturity(&scores(&[(Pillar::Clarity, 1.0), (Pillar::Talent, 2.5)]));
        assert!(!analysis.is_unbalanced);
        assert!(analysis.has_strengths);
    }

    #[test]
    fn test_weakest_tie_break_is_canonical_order() {
        let s = scores(&[
            (Pillar::Experimentation, 1.0),
            (Pillar::Talent, 1.0),
            (Pillar::Operations, 1.0),
            (Pillar::Clarity, 2.0),
        ]);
        let weakest: Vec<Pillar> = weakest_domains(&s, 3).iter().map(|p| p.pillar).collect();
        assert_eq!(
            weakest,
            vec![Pillar::Operations, Pillar::Talent, Pillar::Experimentation]
        );
    }

    #[test]
    fn test_weakest_and_strongest_ordering() {
        let s = scores(&[
            (Pillar::Clarity, 2.5),
            (Pillar::Operations, 0.75),
            (Pillar::Risk, 1.5),
        ]);
        let weakest = weakest_domains(&s, 2);
        assert_eq!(weakest[0].pillar, Pillar::Operations);
        assert_eq!(weakest[1].pillar, Pillar::Risk);

        let strongest = strongest_domains(&s, 1);
        assert_eq!(strongest.len(), 1);
        assert_eq!(strongest[0].pillar, Pillar::Clarity);

        assert!(weakest_domains(&s, 0).is_empty());
        assert_eq!(weakest_domains(&s, 10).len(), 3);
    }
}
