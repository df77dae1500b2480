//! Pulse-check questions and responses.
//!
//! Eighteen fixed questions, three per pillar, each answered on a four-step
//! scale: No (0), Started (0.25), Mostly (0.5), Yes (1).

use super::pillar::Pillar;
use crate::error::{PulseError, ResponseErrorKind, Result};
use crate::utils::scale::describe_value;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Number of questions per pillar.
pub const QUESTIONS_PER_PILLAR: u8 = 3;

/// Identifier of a pulse question, e.g. `O2`.
///
/// Ordering follows pillar order, then question index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct QuestionId {
    pillar: Pillar,
    index: u8,
}

impl QuestionId {
    /// Create a question id; `index` is 1-based and must be 1..=3.
    #[must_use]
    pub const fn new(pillar: Pillar, index: u8) -> Option<Self> {
        if index >= 1 && index <= QUESTIONS_PER_PILLAR {
            Some(Self { pillar, index })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn pillar(self) -> Pillar {
        self.pillar
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// The three question ids belonging to a pillar.
    #[must_use]
    pub const fn for_pillar(pillar: Pillar) -> [Self; 3] {
        [
            Self { pillar, index: 1 },
            Self { pillar, index: 2 },
            Self { pillar, index: 3 },
        ]
    }

    /// All eighteen question ids in catalog order.
    pub fn all() -> impl Iterator<Item = Self> {
        Pillar::ALL.into_iter().flat_map(Self::for_pillar)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pillar.letter(), self.index)
    }
}

impl FromStr for QuestionId {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => Pillar::from_code(&letter.to_string())
                .zip(digit.to_digit(10))
                .and_then(|(pillar, index)| Self::new(pillar, index as u8)),
            _ => None,
        };
        parsed.ok_or_else(|| PulseError::unknown_question(s))
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for QuestionId {
    type Error = PulseError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// One entry of the question catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub pillar: Pillar,
    pub prompt: &'static str,
}

const fn q(pillar: Pillar, index: u8, prompt: &'static str) -> Question {
    Question {
        id: QuestionId { pillar, index },
        pillar,
        prompt,
    }
}

/// The fixed pulse-check questionnaire, in catalog order.
pub static QUESTIONS: [Question; 18] = [
    q(Pillar::Clarity, 1, "Is there a written AI ambition tied to business outcomes?"),
    q(Pillar::Clarity, 2, "Does every AI initiative have an accountable executive owner?"),
    q(Pillar::Clarity, 3, "Are AI use cases prioritized with an explicit value case?"),
    q(Pillar::Operations, 1, "Is the data feeding AI systems documented, owned and quality-checked?"),
    q(Pillar::Operations, 2, "Do models move to production through a repeatable pipeline?"),
    q(Pillar::Operations, 3, "Are production AI systems monitored for drift, cost and uptime?"),
    q(Pillar::Risk, 1, "Is there an approved responsible-AI policy that teams actually follow?"),
    q(Pillar::Risk, 2, "Are AI systems risk-tiered with controls matched to each tier?"),
    q(Pillar::Risk, 3, "Is there a tested incident process for AI failures?"),
    q(Pillar::Talent, 1, "Do key roles have the AI skills their work now requires?"),
    q(Pillar::Talent, 2, "Is there a funded enablement program for AI adoption?"),
    q(Pillar::Talent, 3, "Are incentives aligned with adopting AI-assisted ways of working?"),
    q(Pillar::Ecosystem, 1, "Are strategic AI vendors and partners selected against clear criteria?"),
    q(Pillar::Ecosystem, 2, "Do contracts cover data rights, model changes and exit?"),
    q(Pillar::Ecosystem, 3, "Do you reuse shared platforms instead of one-off tooling?"),
    q(Pillar::Experimentation, 1, "Is there a standing budget and process for AI pilots?"),
    q(Pillar::Experimentation, 2, "Do pilots have success criteria agreed before they start?"),
    q(Pillar::Experimentation, 3, "Are pilot results used to scale or stop work within a quarter?"),
];

/// Look up a catalog question.
#[must_use]
pub fn question(id: QuestionId) -> &'static Question {
    let offset = (id.pillar as usize) * usize::from(QUESTIONS_PER_PILLAR);
    &QUESTIONS[offset + usize::from(id.index) - 1]
}

/// An answer on the pulse scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum PulseAnswer {
    No,
    Started,
    Mostly,
    Yes,
}

impl PulseAnswer {
    /// All answers, lowest first.
    pub const ALL: [Self; 4] = [Self::No, Self::Started, Self::Mostly, Self::Yes];

    /// Numeric contribution to the pillar score.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::No => 0.0,
            Self::Started => 0.25,
            Self::Mostly => 0.5,
            Self::Yes => 1.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Started => "Started",
            Self::Mostly => "Mostly",
            Self::Yes => "Yes",
        }
    }

    /// Map an exact scale value back to an answer. Anything off the scale,
    /// including values that are merely close, returns `None`.
    #[must_use]
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.value() == value)
    }
}

impl From<PulseAnswer> for f64 {
    fn from(answer: PulseAnswer) -> Self {
        answer.value()
    }
}

impl TryFrom<f64> for PulseAnswer {
    type Error = String;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Self::from_value(value)
            .ok_or_else(|| format!("answer must be one of 0, 0.25, 0.5, 1 (got {value})"))
    }
}

/// How to treat response keys or values outside the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseParseMode {
    /// Reject the whole response set.
    #[default]
    Strict,
    /// Drop the offending entry and log a warning.
    Lenient,
}

/// The set of answers collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PulseResponses {
    answers: BTreeMap<QuestionId, PulseAnswer>,
}

impl PulseResponses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) an answer.
    pub fn set(&mut self, id: QuestionId, answer: PulseAnswer) -> Option<PulseAnswer> {
        self.answers.insert(id, answer)
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, id: QuestionId, answer: PulseAnswer) -> Self {
        self.set(id, answer);
        self
    }

    /// Withdraw an answer.
    pub fn clear(&mut self, id: QuestionId) -> Option<PulseAnswer> {
        self.answers.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<PulseAnswer> {
        self.answers.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, PulseAnswer)> + '_ {
        self.answers.iter().map(|(id, a)| (*id, *a))
    }

    /// How many of a pillar's questions have been answered.
    #[must_use]
    pub fn answered_in(&self, pillar: Pillar) -> usize {
        QuestionId::for_pillar(pillar)
            .iter()
            .filter(|id| self.answers.contains_key(id))
            .count()
    }

    /// Whether all of a pillar's questions have been answered.
    #[must_use]
    pub fn is_pillar_complete(&self, pillar: Pillar) -> bool {
        self.answered_in(pillar) == usize::from(QUESTIONS_PER_PILLAR)
    }

    /// Whether every question in the catalog has been answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTIONS.len()
    }

    /// Every question answered with the same value.
    #[must_use]
    pub fn uniform(answer: PulseAnswer) -> Self {
        QuestionId::all().fold(Self::new(), |acc, id| acc.with(id, answer))
    }

    /// Answer all three questions of a pillar with the same value.
    #[must_use]
    pub fn with_pillar(self, pillar: Pillar, answer: PulseAnswer) -> Self {
        QuestionId::for_pillar(pillar)
            .into_iter()
            .fold(self, |acc, id| acc.with(id, answer))
    }

    /// Validate a raw JSON object of `question id -> answer`.
    ///
    /// `null` values mean "not answered yet" and are skipped in both modes.
    pub fn from_json_map(map: &Map<String, Value>, mode: ResponseParseMode) -> Result<Self> {
        let mut responses = Self::new();
        for (key, raw) in map {
            if raw.is_null() {
                continue;
            }
            match parse_entry(key, raw) {
                Ok((id, answer)) => {
                    responses.set(id, answer);
                }
                Err(err) if mode == ResponseParseMode::Lenient => {
                    tracing::warn!("Skipping pulse response '{}': {}", key, err);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(responses)
    }

    /// Validate a JSON value (which must be an object).
    pub fn from_json_value(value: &Value, mode: ResponseParseMode) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_json_map(map, mode),
            _ => Err(PulseError::responses(
                "expected an object",
                ResponseErrorKind::NotAnObject,
            )),
        }
    }
}

fn parse_entry(key: &str, raw: &Value) -> Result<(QuestionId, PulseAnswer)> {
    let id: QuestionId = key.parse()?;
    let answer = raw
        .as_f64()
        .and_then(PulseAnswer::from_value)
        .ok_or_else(|| PulseError::invalid_answer(id.to_string(), describe_value(raw)))?;
    Ok((id, answer))
}

impl FromIterator<(QuestionId, PulseAnswer)> for PulseResponses {
    fn from_iter<I: IntoIterator<Item = (QuestionId, PulseAnswer)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
