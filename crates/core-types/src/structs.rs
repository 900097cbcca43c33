use crate::enums::RiskTier;
use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One periodic (monthly) observation of a farm's output and finances.
///
/// Records are supplied already sorted ascending by date, one per farm per
/// date. The `profit` figure is trusted as given and never re-derived from
/// revenue and expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub date: NaiveDate,
    pub yield_amount: f64,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub weather_condition: String,
}

impl PerformanceRecord {
    /// Profit as a percentage of revenue, or 0 when there was no revenue.
    pub fn profit_margin(&self) -> f64 {
        if self.revenue == 0.0 {
            return 0.0;
        }
        (self.profit / self.revenue) * 100.0
    }
}

/// The terms of an investment opportunity, immutable per calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityContext {
    pub title: String,
    /// Target return over the full duration, as a percentage.
    pub expected_roi: f64,
    pub duration_months: u32,
    pub risk_tier: RiskTier,
}

impl OpportunityContext {
    /// Creates a validated context.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` when `duration_months` is zero.
    pub fn new(
        title: impl Into<String>,
        expected_roi: f64,
        duration_months: u32,
        risk_tier: RiskTier,
    ) -> Result<Self, CoreError> {
        if duration_months == 0 {
            return Err(CoreError::InvalidInput(
                "duration_months".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            title: title.into(),
            expected_roi,
            duration_months,
            risk_tier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(revenue: f64, profit: f64) -> PerformanceRecord {
        PerformanceRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            yield_amount: 10.0,
            revenue,
            expenses: 0.0,
            profit,
            weather_condition: "Sunny".to_string(),
        }
    }

    #[test]
    fn profit_margin_is_percentage_of_revenue() {
        assert_eq!(record(1000.0, 200.0).profit_margin(), 20.0);
        assert_eq!(record(400.0, -100.0).profit_margin(), -25.0);
    }

    #[test]
    fn profit_margin_is_zero_without_revenue() {
        assert_eq!(record(0.0, 150.0).profit_margin(), 0.0);
    }

    #[test]
    fn context_rejects_zero_duration() {
        let result = OpportunityContext::new("Phase 1", 12.5, 0, RiskTier::Low);
        assert!(result.is_err());
    }

    #[test]
    fn context_accepts_positive_duration() {
        let ctx = OpportunityContext::new("Phase 1", 12.5, 24, RiskTier::Medium).unwrap();
        assert_eq!(ctx.duration_months, 24);
        assert_eq!(ctx.risk_tier, RiskTier::Medium);
    }
}
