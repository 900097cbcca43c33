use crate::report::RoiProjectionReport;
use core_types::OpportunityContext;

/// A stateless calculator producing a linear ROI-accrual schedule over an
/// opportunity's fixed duration.
///
/// The schedule is a function of the opportunity's terms alone: month `m`
/// of `n` accrues `expected_roi * m / n`, reaching the target exactly at
/// the final month. Performance history deliberately does not bend the
/// schedule.
#[derive(Debug, Default)]
pub struct RoiProjector {}

impl RoiProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculate(&self, context: &OpportunityContext) -> RoiProjectionReport {
        tracing::debug!(
            opportunity = %context.title,
            duration_months = context.duration_months,
            "calculating ROI projection"
        );

        let duration = context.duration_months;
        let mut months = Vec::with_capacity(duration as usize);
        let mut projected_roi = Vec::with_capacity(duration as usize);

        for month in 1..=duration {
            months.push(month);
            projected_roi.push(context.expected_roi * (month as f64 / duration as f64));
        }

        RoiProjectionReport {
            opportunity_name: context.title.clone(),
            months,
            projected_roi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core_types::RiskTier;

    #[test]
    fn schedule_length_equals_duration() {
        let ctx = OpportunityContext::new("Project 1", 15.0, 24, RiskTier::Low).unwrap();
        let report = RoiProjector::new().calculate(&ctx);

        assert_eq!(report.months.len(), 24);
        assert_eq!(report.projected_roi.len(), 24);
        assert_eq!(report.months[0], 1);
        assert_eq!(report.months[23], 24);
    }

    #[test]
    fn final_month_reaches_target_exactly() {
        let ctx = OpportunityContext::new("Project 1", 15.0, 12, RiskTier::Low).unwrap();
        let report = RoiProjector::new().calculate(&ctx);

        assert_eq!(report.projected_roi[11], 15.0);
        assert_eq!(report.projected_roi[0], 1.25);
        assert_eq!(report.projected_roi[5], 7.5);
    }

    #[test]
    fn accrual_is_strictly_linear() {
        let ctx = OpportunityContext::new("Project 1", 18.0, 36, RiskTier::High).unwrap();
        let report = RoiProjector::new().calculate(&ctx);

        for window in report.projected_roi.windows(2) {
            assert_relative_eq!(window[1] - window[0], 0.5, epsilon = 1e-9);
        }
    }
}
