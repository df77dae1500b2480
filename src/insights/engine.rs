//! Insight and priority selection cascade.
//!
//! Rules run in a fixed order. Each one may append one insight and one
//! priority; the lists are capped independently once the cascade finishes.

use super::library::{
    InsightKind, InsightTemplate, PriorityTemplate, Urgency, insight_template, priority_template,
};
use super::template::TemplateVars;
use crate::gates::TriggeredGate;
use crate::model::{ContextProfile, Dimension, MaturityBand, Pillar};
use crate::scoring::{
    MaturityAnalysis, PillarScore, PillarScores, WEAKNESS_THRESHOLD, analyze_maturity,
    strongest_domains, weakest_domains,
};
use crate::utils::{format_points, format_score};
use serde::{Deserialize, Serialize};

/// Cap on each of the insight and priority lists.
pub const MAX_SELECTIONS: usize = 3;

/// Gate count at which compliance becomes critical.
pub const CRITICAL_GATE_COUNT: usize = 3;

/// Variance above which the imbalance insight fires. Stricter than
/// [`crate::scoring::UNBALANCED_VARIANCE`].
pub const IMBALANCE_VARIANCE: f64 = 1.2;

/// Average above which weak operations reads as data debt.
pub const DATA_DEBT_MIN_AVERAGE: f64 = 1.5;

/// A selected executive insight with its slots filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Library template id
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub action: String,
    pub reasoning: String,
    pub business_impact: String,
    pub urgency: Urgency,
}

/// A selected 90-day priority with its slots filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    /// Library template id
    pub id: String,
    pub title: String,
    pub description: String,
    pub reasoning: String,
    pub timeframe: String,
    pub urgency: Urgency,
}

/// Result of the cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSet {
    pub insights: Vec<Insight>,
    pub priorities: Vec<Priority>,
}

impl InsightSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty() && self.priorities.is_empty()
    }

    fn push(&mut self, pick: Pick, vars: &TemplateVars) {
        if let Some(template) = pick.insight.and_then(insight_template) {
            self.insights.push(render_insight(template, vars));
        }
        if let Some(template) = pick.priority.and_then(priority_template) {
            self.priorities.push(render_priority(template, vars));
        }
    }
}

fn render_insight(t: &InsightTemplate, vars: &TemplateVars) -> Insight {
    Insight {
        id: t.id.to_string(),
        kind: t.kind,
        title: vars.render(t.title),
        description: vars.render(t.description),
        action: vars.render(t.action),
        reasoning: vars.render(t.reasoning),
        business_impact: vars.render(t.business_impact),
        urgency: t.urgency,
    }
}

fn render_priority(t: &PriorityTemplate, vars: &TemplateVars) -> Priority {
    Priority {
        id: t.id.to_string(),
        title: vars.render(t.title),
        description: vars.render(t.description),
        reasoning: vars.render(t.reasoning),
        timeframe: t.timeframe.to_string(),
        urgency: t.urgency,
    }
}

/// Library ids chosen by one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pick {
    insight: Option<&'static str>,
    priority: Option<&'static str>,
}

impl Pick {
    const fn both(id: &'static str) -> Self {
        Self {
            insight: Some(id),
            priority: Some(id),
        }
    }
}

/// Everything a rule may look at.
struct Facts<'a> {
    analysis: MaturityAnalysis,
    gates: &'a [TriggeredGate],
    profile: Option<&'a ContextProfile>,
    weakest: Option<PillarScore>,
}

struct CascadeRule {
    name: &'static str,
    /// Skip when the insight list is already full.
    needs_insight_room: bool,
    select: fn(&Facts<'_>) -> Option<Pick>,
}

static CASCADE: &[CascadeRule] = &[
    CascadeRule {
        name: "compliance",
        needs_insight_room: false,
        select: compliance,
    },
    CascadeRule {
        name: "maturity_band",
        needs_insight_room: false,
        select: maturity_band,
    },
    CascadeRule {
        name: "weakest_domain",
        needs_insight_room: false,
        select: weakest_domain,
    },
    CascadeRule {
        name: "imbalance",
        needs_insight_room: true,
        select: imbalance,
    },
];

fn compliance(facts: &Facts<'_>) -> Option<Pick> {
    match facts.gates.len() {
        0 => None,
        n if n >= CRITICAL_GATE_COUNT => Some(Pick::both("critical_compliance")),
        _ => Some(Pick::both("moderate_compliance")),
    }
}

/// Band to (insight, priority) mapping.
static BAND_PICKS: &[(MaturityBand, Pick)] = &[
    (
        MaturityBand::FoundationsCritical,
        Pick {
            insight: Some("foundations_critical"),
            priority: Some("build_foundations"),
        },
    ),
    (
        MaturityBand::FoundationsWeak,
        Pick {
            insight: Some("foundations_weak"),
            priority: Some("strengthen_foundations"),
        },
    ),
    (
        MaturityBand::SystematicDevelopment,
        Pick::both("systematic_development"),
    ),
    (
        MaturityBand::OptimizationFocus,
        Pick::both("optimization_focus"),
    ),
    (
        MaturityBand::MaturityLeadership,
        Pick {
            insight: Some("maturity_leadership"),
            priority: None,
        },
    ),
];

fn maturity_band(facts: &Facts<'_>) -> Option<Pick> {
    let band = facts.analysis.band()?;
    BAND_PICKS
        .iter()
        .find(|(b, _)| *b == band)
        .map(|(_, pick)| *pick)
}

/// A weakest-domain specialization. The first entry that applies wins.
struct DomainRule {
    id: &'static str,
    applies: fn(&Facts<'_>, Pillar) -> bool,
    pick: Pick,
}

static DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        id: "data_debt",
        applies: |facts, pillar| {
            pillar == Pillar::Operations && facts.analysis.avg > DATA_DEBT_MIN_AVERAGE
        },
        pick: Pick::both("data_debt"),
    },
    DomainRule {
        id: "talent_constraint",
        applies: |_, pillar| pillar == Pillar::Talent,
        pick: Pick::both("talent_constraint"),
    },
    DomainRule {
        id: "security_gaps",
        applies: |facts, pillar| {
            pillar == Pillar::Risk
                && facts.profile.is_some_and(|p| {
                    p.level(Dimension::RegulatoryIntensity).get() >= 3
                        || p.level(Dimension::DataSensitivity).get() >= 3
                })
        },
        pick: Pick {
            insight: Some("security_gaps"),
            priority: None,
        },
    },
    DomainRule {
        id: "strengthen_domain",
        applies: |_, _| true,
        pick: Pick {
            insight: None,
            priority: Some("strengthen_domain"),
        },
    },
];

fn weakest_domain(facts: &Facts<'_>) -> Option<Pick> {
    let weakest = facts.weakest.filter(|w| w.score <= WEAKNESS_THRESHOLD)?;
    let rule = DOMAIN_RULES
        .iter()
        .find(|rule| (rule.applies)(facts, weakest.pillar))?;
    tracing::debug!(
        "Weakest domain {} ({}) matched {}",
        weakest.pillar,
        weakest.score,
        rule.id
    );
    Some(rule.pick)
}

fn imbalance(facts: &Facts<'_>) -> Option<Pick> {
    (facts.analysis.variance > IMBALANCE_VARIANCE).then_some(Pick {
        insight: Some("capability_imbalance"),
        priority: None,
    })
}

fn template_vars(
    analysis: &MaturityAnalysis,
    scores: &PillarScores,
    gates: &[TriggeredGate],
    weakest: Option<PillarScore>,
) -> TemplateVars {
    let titles: Vec<&str> = gates.iter().map(|g| g.title.as_str()).collect();
    let mut vars = TemplateVars::new()
        .with("gate_count", gates.len().to_string())
        .with("gate_titles", titles.join(", "));

    if analysis.has_data() {
        vars = vars
            .with("avg", format_score(analysis.avg))
            .with("min", format_score(analysis.min))
            .with("max", format_score(analysis.max))
            .with("spread", format_points(analysis.spread()));
    }
    if let Some(w) = weakest {
        vars = vars.with("domain", w.pillar.name());
    }
    if let Some(s) = strongest_domains(scores, 1).first() {
        vars = vars.with("strongest", s.pillar.name());
    }
    vars
}

/// Run the cascade over scores, triggered gates and an optional profile.
///
/// Works with partial scores, no gates and no profile; any rule lacking the
/// data it needs is skipped, so the result may be empty.
#[must_use]
pub fn generate_insights(
    scores: &PillarScores,
    gates: &[TriggeredGate],
    profile: Option<&ContextProfile>,
) -> InsightSet {
    let analysis = analyze_maturity(scores);
    let weakest = weakest_domains(scores, 1).first().copied();
    let facts = Facts {
        analysis,
        gates,
        profile,
        weakest,
    };
    let vars = template_vars(&analysis, scores, gates, weakest);

    let mut set = InsightSet::default();
    for rule in CASCADE {
        if rule.needs_insight_room && set.insights.len() >= MAX_SELECTIONS {
            tracing::debug!("Skipping {}: insight list full", rule.name);
            continue;
        }
        if let Some(pick) = (rule.select)(&facts) {
            tracing::debug!("Insight rule {} fired", rule.name);
            set.push(pick, &vars);
        }
    }

    set.insights.truncate(MAX_SELECTIONS);
    set.priorities.truncate(MAX_SELECTIONS);
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::evaluate_gates;
    use crate::utils::Level;

    fn scores(pairs: &[(Pillar, f64)]) -> PillarScores {
        pairs.iter().copied().collect()
    }

    fn uniform_scores(score: f64) -> PillarScores {
        Pillar::ALL.into_iter().map(|p| (p, score)).collect()
    }

    fn gate(id: &str, title: &str) -> TriggeredGate {
        TriggeredGate {
            id: id.to_string(),
            title: title.to_string(),
            reason: String::new(),
            pillar: None,
            actions: Vec::new(),
            explain: Default::default(),
        }
    }

    fn insight_ids(set: &InsightSet) -> Vec<&str> {
        set.insights.iter().map(|i| i.id.as_str()).collect()
    }

    fn priority_ids(set: &InsightSet) -> Vec<&str> {
        set.priorities.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_nothing_to_say() {
        let set = generate_insights(&PillarScores::new(), &[], None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_compliance_without_scores() {
        let gates = [gate("a", "Alpha"), gate("b", "Beta")];
        let set = generate_insights(&PillarScores::new(), &gates, None);
        assert_eq!(insight_ids(&set), vec!["moderate_compliance"]);
        assert_eq!(priority_ids(&set), vec!["moderate_compliance"]);
        assert_eq!(set.insights[0].title, "Safeguards required: Alpha, Beta");
        assert!(set.insights[0].reasoning.contains("moderate"));
    }

    #[test]
    fn test_critical_compliance_at_three_gates() {
        let gates = [gate("a", "A"), gate("b", "B"), gate("c", "C")];
        let set = generate_insights(&uniform_scores(2.0), &gates, None);
        assert_eq!(set.insights[0].kind, InsightKind::Compliance);
        assert!(set.insights[0].reasoning.contains("critical"));
        assert_eq!(set.insights[0].title, "3 mandatory safeguards apply to your context");
        assert_eq!(set.priorities[0].id, "critical_compliance");
    }

    #[test]
    fn test_band_selection() {
        let cases = [
            (0.0, "foundations_critical", Some("build_foundations")),
            (1.25, "foundations_weak", Some("strengthen_foundations")),
            (2.0, "systematic_development", Some("systematic_development")),
            (2.75, "optimization_focus", Some("optimization_focus")),
            (3.0, "maturity_leadership", None),
        ];
        for (score, insight, priority) in cases {
            let set = generate_insights(&uniform_scores(score), &[], None);
            assert_eq!(set.insights[0].id, insight, "avg {score}");
            assert_eq!(
                set.priorities.first().map(|p| p.id.as_str()),
                priority,
                "avg {score}"
            );
        }
    }

    #[test]
    fn test_band_text_interpolates_average() {
        let set = generate_insights(&uniform_scores(2.0), &[], None);
        assert_eq!(
            set.insights[0].description,
            "Average pillar maturity is 2.0/3. Core practices are established across most pillars."
        );
    }

    #[test]
    fn test_leadership_has_no_priority() {
        let set = generate_insights(&uniform_scores(3.0), &[], None);
        assert_eq!(insight_ids(&set), vec!["maturity_leadership"]);
        assert_eq!(set.insights[0].kind, InsightKind::Leadership);
        assert!(set.priorities.is_empty());
    }

    #[test]
    fn test_data_debt_needs_average_above_threshold() {
        // O at 0.5, others 2.5 -> avg 2.166..
        let mut pairs: Vec<(Pillar, f64)> = Pillar::ALL.into_iter().map(|p| (p, 2.5)).collect();
        pairs[1] = (Pillar::Operations, 0.5);
        let set = generate_insights(&scores(&pairs), &[], None);
        assert!(insight_ids(&set).contains(&"data_debt"));
        assert!(priority_ids(&set).contains(&"data_debt"));

        // O weakest but avg not above 1.5 -> generic priority
        let set = generate_insights(
            &scores(&[(Pillar::Operations, 0.5), (Pillar::Clarity, 1.0)]),
            &[],
            None,
        );
        assert!(!insight_ids(&set).contains(&"data_debt"));
        assert_eq!(priority_ids(&set), vec!["build_foundations", "strengthen_domain"]);
        assert_eq!(set.priorities[1].title, "Strengthen Operations");
    }

    #[test]
    fn test_talent_constraint() {
        let set = generate_insights(
            &scores(&[(Pillar::Talent, 0.75), (Pillar::Clarity, 2.0)]),
            &[],
            None,
        );
        assert_eq!(insight_ids(&set), vec!["foundations_weak", "talent_constraint"]);
        assert_eq!(
            priority_ids(&set),
            vec!["strengthen_foundations", "talent_constraint"]
        );
    }

    #[test]
    fn test_security_gaps_requires_sensitive_context() {
        let s = scores(&[(Pillar::Risk, 0.5), (Pillar::Clarity, 2.0)]);
        let sensitive = ContextProfile::uniform(Level::MIN)
            .with_level(Dimension::DataSensitivity, Level::MAX);

        let set = generate_insights(&s, &[], Some(&sensitive));
        assert!(insight_ids(&set).contains(&"security_gaps"));
        assert!(!priority_ids(&set).contains(&"security_gaps"));
        assert!(!priority_ids(&set).contains(&"strengthen_domain"));

        let set = generate_insights(&s, &[], None);
        assert!(!insight_ids(&set).contains(&"security_gaps"));
        assert!(priority_ids(&set).contains(&"strengthen_domain"));
    }

    #[test]
    fn test_security_gaps_from_regulation_alone() {
        let s = scores(&[(Pillar::Risk, 0.5), (Pillar::Clarity, 2.0)]);
        let regulated = ContextProfile::uniform(Level::MIN)
            .with_level(Dimension::RegulatoryIntensity, Level::new(3).expect("level"));

        let set = generate_insights(&s, &[], Some(&regulated));
        assert_eq!(insight_ids(&set), vec!["foundations_weak", "security_gaps"]);
        assert_eq!(priority_ids(&set), vec!["strengthen_foundations"]);
    }

    #[test]
    fn test_data_debt_average_boundary_is_strict() {
        // avg exactly 1.5 falls through to the generic priority
        let set = generate_insights(
            &scores(&[(Pillar::Operations, 0.5), (Pillar::Clarity, 2.5)]),
            &[],
            None,
        );
        assert_eq!(insight_ids(&set), vec!["systematic_development"]);
        assert_eq!(
            priority_ids(&set),
            vec!["systematic_development", "strengthen_domain"]
        );
        assert_eq!(set.priorities[1].title, "Strengthen Operations");
    }

    #[test]
    fn test_weakest_above_threshold_skips_domain_rules() {
        let set = generate_insights(
            &scores(&[(Pillar::Talent, 1.25), (Pillar::Clarity, 2.0)]),
            &[],
            None,
        );
        assert_eq!(insight_ids(&set), vec!["systematic_development"]);
    }

    #[test]
    fn test_imbalance_names_spread_and_weakest() {
        // values 0, 3 -> variance 2.25; weakest C (tie-break not involved)
        let set = generate_insights(
            &scores(&[(Pillar::Clarity, 0.0), (Pillar::Experimentation, 3.0)]),
            &[],
            None,
        );
        let imbalance = set
            .insights
            .iter()
            .find(|i| i.id == "capability_imbalance")
            .expect("imbalance insight");
        assert!(imbalance.description.contains("3.0 points"));
        assert!(imbalance.description.contains("Clarity"));
        assert!(imbalance.description.contains("Experimentation"));
    }

    #[test]
    fn test_imbalance_threshold_is_distinct_from_unbalanced() {
        // values 0.5, 2.5 -> variance 1.0: unbalanced but no imbalance insight
        let s = scores(&[(Pillar::Clarity, 0.5), (Pillar::Operations, 2.5)]);
        assert!(analyze_maturity(&s).is_unbalanced);
        let set = generate_insights(&s, &[], None);
        assert!(!insight_ids(&set).contains(&"capability_imbalance"));
    }

    #[test]
    fn test_full_insight_list_skips_imbalance() {
        // compliance + band + talent fill the list before imbalance runs
        let s = scores(&[(Pillar::Talent, 0.0), (Pillar::Clarity, 3.0)]);
        let gates = [gate("a", "A")];
        let set = generate_insights(&s, &gates, None);
        assert_eq!(
            insight_ids(&set),
            vec!["moderate_compliance", "systematic_development", "talent_constraint"]
        );
        assert_eq!(set.priorities.len(), 3);
    }

    #[test]
    fn test_real_gates_feed_compliance() {
        let profile = ContextProfile::uniform(Level::MAX);
        let gates = evaluate_gates(&profile);
        assert!(gates.len() >= CRITICAL_GATE_COUNT);
        let set = generate_insights(&uniform_scores(1.0), &gates, Some(&profile));
        assert_eq!(set.insights[0].id, "critical_compliance");
        assert!(set.insights[0].description.contains("Human-in-the-loop review"));
        assert!(set.insights.len() <= MAX_SELECTIONS);
        assert!(set.priorities.len() <= MAX_SELECTIONS);
    }
}
