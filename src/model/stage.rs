//! Maturity stage thresholds.
//!
//! Two scales: the organization-wide band derived from the average pillar
//! score, and a per-pillar stage for display.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the foundations-critical band.
pub const FOUNDATIONS_CRITICAL_BELOW: f64 = 1.0;
/// Upper bound (exclusive) of the foundations-weak band.
pub const FOUNDATIONS_WEAK_BELOW: f64 = 1.5;
/// Upper bound (exclusive) of the systematic-development band.
pub const SYSTEMATIC_DEVELOPMENT_BELOW: f64 = 2.5;
/// Upper bound (exclusive) of the optimization-focus band.
pub const OPTIMIZATION_FOCUS_BELOW: f64 = 3.0;

/// Organization-wide maturity band, selected from the average pillar score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityBand {
    /// avg < 1.0
    FoundationsCritical,
    /// 1.0 <= avg < 1.5
    FoundationsWeak,
    /// 1.5 <= avg < 2.5
    SystematicDevelopment,
    /// 2.5 <= avg < 3.0
    OptimizationFocus,
    /// avg >= 3.0
    MaturityLeadership,
}

impl MaturityBand {
    /// Band for an average pillar score.
    #[must_use]
    pub fn from_average(avg: f64) -> Self {
        if avg < FOUNDATIONS_CRITICAL_BELOW {
            Self::FoundationsCritical
        } else if avg < FOUNDATIONS_WEAK_BELOW {
            Self::FoundationsWeak
        } else if avg < SYSTEMATIC_DEVELOPMENT_BELOW {
            Self::SystematicDevelopment
        } else if avg < OPTIMIZATION_FOCUS_BELOW {
            Self::OptimizationFocus
        } else {
            Self::MaturityLeadership
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FoundationsCritical => "Foundations critical",
            Self::FoundationsWeak => "Foundations weak",
            Self::SystematicDevelopment => "Systematic development",
            Self::OptimizationFocus => "Optimization focus",
            Self::MaturityLeadership => "Maturity leadership",
        }
    }
}

/// Display stage of an individual pillar score (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarStage {
    /// score < 1.0
    Nascent,
    /// 1.0 <= score < 2.0
    Emerging,
    /// 2.0 <= score < 3.0
    Established,
    /// score == 3.0
    Leading,
}

impl PillarStage {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 1.0 {
            Self::Nascent
        } else if score < 2.0 {
            Self::Emerging
        } else if score < 3.0 {
            Self::Established
        } else {
            Self::Leading
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nascent => "Nascent",
            Self::Emerging => "Emerging",
            Self::Established => "Established",
            Self::Leading => "Leading",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(MaturityBand::from_average(0.0), MaturityBand::FoundationsCritical);
        assert_eq!(MaturityBand::from_average(0.99), MaturityBand::FoundationsCritical);
        assert_eq!(MaturityBand::from_average(1.0), MaturityBand::FoundationsWeak);
        assert_eq!(MaturityBand::from_average(1.5), MaturityBand::SystematicDevelopment);
        assert_eq!(MaturityBand::from_average(2.49), MaturityBand::SystematicDevelopment);
        assert_eq!(MaturityBand::from_average(2.5), MaturityBand::OptimizationFocus);
        assert_eq!(MaturityBand::from_average(3.0), MaturityBand::MaturityLeadership);
    }

    #[test]
    fn test_pillar_stage() {
        assert_eq!(PillarStage::from_score(0.75), PillarStage::Nascent);
        assert_eq!(PillarStage::from_score(1.0), PillarStage::Emerging);
        assert_eq!(PillarStage::from_score(2.5), PillarStage::Established);
        assert_eq!(PillarStage::from_score(3.0), PillarStage::Leading);
    }
}
