//! Fixed insight and priority text library.
//!
//! Text may contain the named slots listed in [`super::template::SLOTS`];
//! they are filled when a template is selected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an executive insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Compliance,
    Foundation,
    Development,
    Optimization,
    Leadership,
    Domain,
    Balance,
}

impl InsightKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compliance => "compliance",
            Self::Foundation => "foundation",
            Self::Development => "development",
            Self::Optimization => "optimization",
            Self::Leadership => "leadership",
            Self::Domain => "domain",
            Self::Balance => "balance",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How soon an insight or priority needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InsightTemplate {
    pub id: &'static str,
    pub kind: InsightKind,
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub reasoning: &'static str,
    pub business_impact: &'static str,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Copy)]
pub struct PriorityTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub reasoning: &'static str,
    pub timeframe: &'static str,
    pub urgency: Urgency,
}

pub static INSIGHT_LIBRARY: &[InsightTemplate] = &[
    InsightTemplate {
        id: "critical_compliance",
        kind: InsightKind::Compliance,
        title: "{gate_count} mandatory safeguards apply to your context",
        description: "Your operating context triggers these gates: {gate_titles}.",
        action: "Put every triggered safeguard in place before scaling any AI use case.",
        reasoning: "Three or more gates fired, which is a critical compliance load that \
                    outranks every maturity concern.",
        business_impact: "Scaling without these controls invites regulatory action and \
                          reputational damage that can halt the whole AI program.",
        urgency: Urgency::High,
    },
    InsightTemplate {
        id: "moderate_compliance",
        kind: InsightKind::Compliance,
        title: "Safeguards required: {gate_titles}",
        description: "{gate_count} gate(s) apply to your operating context and must be \
                      satisfied as part of delivery.",
        action: "Assign an owner for each triggered safeguard and fold it into delivery plans.",
        reasoning: "A moderate compliance load: fewer than three gates fired, so the \
                    safeguards can be built alongside delivery.",
        business_impact: "Addressing these early avoids rework and launch delays later.",
        urgency: Urgency::Medium,
    },
    InsightTemplate {
        id: "foundations_critical",
        kind: InsightKind::Foundation,
        title: "AI foundations are not yet in place",
        description: "Average pillar maturity is {avg}/3. Most core practices have not started.",
        action: "Pick one sponsor, one use case and one data source, and prove value end to end.",
        reasoning: "An average below 1.0 means scaling efforts will stall on missing basics.",
        business_impact: "Investment made before foundations exist is likely to be written off.",
        urgency: Urgency::High,
    },
    InsightTemplate {
        id: "foundations_weak",
        kind: InsightKind::Foundation,
        title: "Foundations are forming but fragile",
        description: "Average pillar maturity is {avg}/3. Practices exist in pockets but are \
                      not yet repeatable.",
        action: "Turn the practices that already work into documented, owned standards.",
        reasoning: "An average between 1.0 and 1.5 shows early progress that is easy to lose.",
        business_impact: "Repeatable practices cut the cost and risk of every new use case.",
        urgency: Urgency::High,
    },
    InsightTemplate {
        id: "systematic_development",
        kind: InsightKind::Development,
        title: "Ready to scale systematically",
        description: "Average pillar maturity is {avg}/3. Core practices are established \
                      across most pillars.",
        action: "Build a shared delivery path so successful pilots reach production faster.",
        reasoning: "An average between 1.5 and 2.5 supports a portfolio approach rather \
                    than one-off projects.",
        business_impact: "A shared path multiplies returns from each additional use case.",
        urgency: Urgency::Medium,
    },
    InsightTemplate {
        id: "optimization_focus",
        kind: InsightKind::Optimization,
        title: "Optimize the AI portfolio",
        description: "Average pillar maturity is {avg}/3. The focus shifts from building \
                      capability to maximizing return.",
        action: "Retire low-value use cases and reinvest in the top performers.",
        reasoning: "An average of 2.5 or more means capability is no longer the constraint.",
        business_impact: "Portfolio discipline turns mature capability into measurable margin.",
        urgency: Urgency::Low,
    },
    InsightTemplate {
        id: "maturity_leadership",
        kind: InsightKind::Leadership,
        title: "AI maturity leader",
        description: "Average pillar maturity is {avg}/3 with every practice in place.",
        action: "Share practices across the ecosystem and keep reassessing as context changes.",
        reasoning: "Every answered pillar is at full maturity.",
        business_impact: "Leadership positions the organization to shape standards in its market.",
        urgency: Urgency::Low,
    },
    InsightTemplate {
        id: "data_debt",
        kind: InsightKind::Domain,
        title: "Operational data debt is blocking scale",
        description: "Operations scores {min}/3 while average maturity is {avg}/3.",
        action: "Fund pipeline, monitoring and data-quality work before new use cases.",
        reasoning: "Strong overall maturity with weak operations points to data and \
                    platform debt as the bottleneck.",
        business_impact: "Use cases that cannot run reliably in production deliver no value.",
        urgency: Urgency::High,
    },
    InsightTemplate {
        id: "talent_constraint",
        kind: InsightKind::Domain,
        title: "Talent is the binding constraint",
        description: "Talent scores {min}/3, the weakest pillar.",
        action: "Launch role-based AI fluency training and fill critical AI roles.",
        reasoning: "Without skilled people, investment in other pillars cannot be absorbed.",
        business_impact: "Skill gaps slow delivery and raise dependence on outside vendors.",
        urgency: Urgency::High,
    },
    InsightTemplate {
        id: "security_gaps",
        kind: InsightKind::Domain,
        title: "Risk controls lag a sensitive context",
        description: "Risk scores {min}/3 in a context with high regulatory or data \
                      sensitivity.",
        action: "Prioritize access control, data protection and model risk review.",
        reasoning: "Weak risk practice combined with regulated or sensitive data is the \
                    most likely source of a serious incident.",
        business_impact: "A single incident can cost more than the program has returned.",
        urgency: Urgency::High,
    },
    InsightTemplate {
        id: "capability_imbalance",
        kind: InsightKind::Balance,
        title: "Capabilities are uneven",
        description: "There is a {spread} gap between {strongest} ({max}/3) and {domain} \
                      ({min}/3).",
        action: "Rebalance investment toward {domain} before extending {strongest} further.",
        reasoning: "Uneven maturity means the weakest pillar caps what the strongest can deliver.",
        business_impact: "Closing the gap unlocks value already invested in stronger pillars.",
        urgency: Urgency::Medium,
    },
];

pub static PRIORITY_LIBRARY: &[PriorityTemplate] = &[
    PriorityTemplate {
        id: "critical_compliance",
        title: "Close critical compliance gates",
        description: "Implement the safeguards for: {gate_titles}.",
        reasoning: "Three or more gates apply; these are preconditions for any scaling.",
        timeframe: "0-30 days",
        urgency: Urgency::High,
    },
    PriorityTemplate {
        id: "moderate_compliance",
        title: "Plan required safeguards",
        description: "Assign owners and delivery dates for: {gate_titles}.",
        reasoning: "Fewer than three gates apply and can be built alongside delivery.",
        timeframe: "30-60 days",
        urgency: Urgency::Medium,
    },
    PriorityTemplate {
        id: "build_foundations",
        title: "Build AI foundations",
        description: "Name an executive sponsor, agree a value case and launch one pilot.",
        reasoning: "Average maturity of {avg}/3 leaves no base to scale from.",
        timeframe: "0-90 days",
        urgency: Urgency::High,
    },
    PriorityTemplate {
        id: "strengthen_foundations",
        title: "Strengthen foundations",
        description: "Standardize the practices that already work and assign owners.",
        reasoning: "Average maturity of {avg}/3 is early progress that needs consolidating.",
        timeframe: "0-90 days",
        urgency: Urgency::High,
    },
    PriorityTemplate {
        id: "systematic_development",
        title: "Stand up a shared delivery path",
        description: "Define intake, review and release steps every use case follows.",
        reasoning: "Average maturity of {avg}/3 supports a portfolio approach.",
        timeframe: "30-90 days",
        urgency: Urgency::Medium,
    },
    PriorityTemplate {
        id: "optimization_focus",
        title: "Run a portfolio review",
        description: "Rank use cases by realized value and cut the bottom quartile.",
        reasoning: "Average maturity of {avg}/3 makes return, not capability, the lever.",
        timeframe: "60-90 days",
        urgency: Urgency::Low,
    },
    PriorityTemplate {
        id: "data_debt",
        title: "Pay down operational data debt",
        description: "Fix the pipelines and monitoring that block production use cases.",
        reasoning: "Operations at {min}/3 is holding back otherwise solid maturity.",
        timeframe: "0-60 days",
        urgency: Urgency::High,
    },
    PriorityTemplate {
        id: "talent_constraint",
        title: "Close the talent gap",
        description: "Start AI fluency training and recruit for critical roles.",
        reasoning: "Talent at {min}/3 is the weakest pillar.",
        timeframe: "0-90 days",
        urgency: Urgency::High,
    },
    PriorityTemplate {
        id: "strengthen_domain",
        title: "Strengthen {domain}",
        description: "Put the missing {domain} practices in place, starting with the \
                      lowest-scored questions.",
        reasoning: "{domain} at {min}/3 is the weakest pillar.",
        timeframe: "30-90 days",
        urgency: Urgency::Medium,
    },
];

#[must_use]
pub fn insight_template(id: &str) -> Option<&'static InsightTemplate> {
    INSIGHT_LIBRARY.iter().find(|t| t.id == id)
}

#[must_use]
pub fn priority_template(id: &str) -> Option<&'static PriorityTemplate> {
    PRIORITY_LIBRARY.iter().find(|t| t.id == id)
}
