use crate::report::RoiTrendReport;
use crate::util::round2;
use core_types::{OpportunityContext, PerformanceSeries, add_months};

/// Reference ROI the per-period values are normalized against, in percent.
const REFERENCE_ROI: f64 = 15.0;

/// Minimum number of periods a trend series is extended to for charting.
const MIN_TREND_PERIODS: usize = 12;

/// Growth applied to the last known value for each synthetic padding period.
const PADDING_GROWTH: f64 = 1.05;

/// A stateless calculator that converts profit-margin history into a
/// target-scaled ROI series.
///
/// Each period's ROI is the profit margin scaled by the ratio of the
/// opportunity's target ROI to the fixed reference ROI. Periods without
/// revenue contribute exactly zero. Short histories are padded with
/// synthetic periods so the chart always spans at least twelve.
#[derive(Debug, Default)]
pub struct RoiTrendCalculator {}

impl RoiTrendCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculate(
        &self,
        series: &PerformanceSeries,
        context: &OpportunityContext,
    ) -> RoiTrendReport {
        tracing::debug!(
            farm = series.farm_name(),
            opportunity = %context.title,
            periods = series.len(),
            "calculating ROI trend"
        );

        let target_roi = context.expected_roi;
        let mut dates = series.dates();
        let mut roi_values = Vec::with_capacity(series.len().max(MIN_TREND_PERIODS));
        let mut cumulative_roi = 0.0;

        for record in series.records() {
            if record.revenue > 0.0 {
                let period_roi = (record.profit / record.revenue) * 100.0;
                let adjusted_roi = period_roi * (target_roi / REFERENCE_ROI);
                roi_values.push(round2(adjusted_roi));
                // The running sum accumulates unrounded values over the
                // real history only, never over padding.
                cumulative_roi += adjusted_roi;
            } else {
                roi_values.push(0.0);
            }
        }

        // Extend short histories with synthetic periods anchored to the last
        // real observation. An empty series stays empty.
        if let (Some(last_date), Some(&last_value)) = (series.last_date(), roi_values.last()) {
            let real_periods = dates.len();
            let mut value = last_value;
            for k in 1..=MIN_TREND_PERIODS.saturating_sub(real_periods) {
                dates.push(add_months(last_date, k as u32));
                value = round2(value * PADDING_GROWTH);
                roi_values.push(value);
            }
        }

        RoiTrendReport {
            opportunity_name: context.title.clone(),
            farm_name: series.farm_name().to_string(),
            target_roi,
            dates,
            roi_values,
            cumulative_roi: round2(cumulative_roi),
        }
    }
}
