//! Pillar scorer: 18 pulse answers in, up to six pillar scores out.

use crate::error::{PulseError, Result};
use crate::model::{
    Pillar, PillarStage, PulseResponses, QUESTIONS_PER_PILLAR, QuestionId, ResponseParseMode,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Highest attainable pillar score (three "Yes" answers).
pub const MAX_PILLAR_SCORE: f64 = QUESTIONS_PER_PILLAR as f64;

/// Scores for the pillars whose questions are all answered.
///
/// Incomplete pillars are absent, never zero. `score_pillars` only produces
/// values in `0.0..=MAX_PILLAR_SCORE`; `FromIterator` and deserialization do
/// not check the range, so use [`PillarScores::try_from_pairs`] for scores
/// that come from outside the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillarScores(BTreeMap<Pillar, f64>);

impl PillarScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build scores from caller-supplied pairs, rejecting any value that is
    /// not a finite number in `0.0..=MAX_PILLAR_SCORE`.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Pillar, f64)>,
    {
        pairs
            .into_iter()
            .map(|(pillar, score)| {
                if (0.0..=MAX_PILLAR_SCORE).contains(&score) {
                    Ok((pillar, score))
                } else {
                    Err(PulseError::Validation(format!(
                        "score for pillar {pillar} must be between 0 and {MAX_PILLAR_SCORE}, got {score}"
                    )))
                }
            })
            .collect::<Result<BTreeMap<_, _>>>()
            .map(Self)
    }

    #[must_use]
    pub fn get(&self, pillar: Pillar) -> Option<f64> {
        self.0.get(&pillar).copied()
    }

    #[must_use]
    pub fn contains(&self, pillar: Pillar) -> bool {
        self.0.contains_key(&pillar)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scored pillars in canonical C, O, R, T, E, X order.
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, f64)> + '_ {
        self.0.iter().map(|(p, s)| (*p, *s))
    }

    /// Pillars that have no score yet.
    pub fn missing(&self) -> impl Iterator<Item = Pillar> + '_ {
        Pillar::ALL.into_iter().filter(|p| !self.contains(*p))
    }

    /// Display stage per scored pillar.
    #[must_use]
    pub fn stages(&self) -> BTreeMap<Pillar, PillarStage> {
        self.iter()
            .map(|(p, s)| (p, PillarStage::from_score(s)))
            .collect()
    }
}

impl FromIterator<(Pillar, f64)> for PillarScores {
    fn from_iter<I: IntoIterator<Item = (Pillar, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Score every pillar whose three questions have been answered.
///
/// The score is the exact sum of the three answer values, so it always lies
/// in `0.0..=3.0` with no rounding.
#[must_use]
pub fn score_pillars(responses: &PulseResponses) -> PillarScores {
    Pillar::ALL
        .into_iter()
        .filter_map(|pillar| {
            let answers: Option<Vec<f64>> = QuestionId::for_pillar(pillar)
                .into_iter()
                .map(|id| responses.get(id).map(|a| a.value()))
                .collect();
            match answers {
                Some(values) => Some((pillar, values.iter().sum::<f64>())),
                None => {
                    tracing::debug!(
                        "Pillar {} incomplete ({} of {} answered)",
                        pillar,
                        responses.answered_in(pillar),
                        QUESTIONS_PER_PILLAR
                    );
                    None
                }
            }
        })
        .collect()
}

/// Validate raw caller input and score it.
pub fn score_raw(raw: &Map<String, Value>, mode: ResponseParseMode) -> Result<PillarScores> {
    let responses = PulseResponses::from_json_map(raw, mode)?;
    Ok(score_pillars(&responses))
}
