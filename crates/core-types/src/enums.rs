use serde::{Deserialize, Serialize};
use std::fmt;

/// The coarse risk classification attached to an investment opportunity.
///
/// Serves as the fallback baseline wherever a computed risk signal is
/// undefined (first record, non-positive prior profit, zero revenue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Returns the baseline risk score for this tier.
    pub fn base_risk_score(&self) -> u8 {
        match self {
            RiskTier::Low => 20,
            RiskTier::Medium => 50,
            RiskTier::High => 75,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Medium => write!(f, "Medium"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

/// The categorical label derived from a computed overall risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Maps an overall risk score in [0, 100] to its category.
    ///
    /// Boundaries are exact: scores below 30 are `Low`, 30 up to (but not
    /// including) 60 are `Medium`, 60 and above are `High`.
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            RiskCategory::Low
        } else if score < 60 {
            RiskCategory::Medium
        } else {
            RiskCategory::High
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskCategory::Low => write!(f, "Low"),
            RiskCategory::Medium => write!(f, "Medium"),
            RiskCategory::High => write!(f, "High"),
        }
    }
}
