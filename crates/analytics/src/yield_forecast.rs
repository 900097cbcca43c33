use crate::report::YieldForecastReport;
use crate::util::round2;
use chrono::Datelike;
use core_types::{PerformanceSeries, WeatherImpact, add_months};

/// Number of future periods predicted beyond the last known observation.
const FUTURE_PERIODS: u32 = 3;

/// A stateless calculator producing weather-adjusted yield predictions.
///
/// The per-record "prediction" applies each observation's weather multiplier
/// to the historical mean yield — a hindsight fit against the same history,
/// kept as an intentional simplification rather than true forecasting. The
/// future horizon extends exactly three periods past the last observation
/// using a month-of-year seasonality factor.
#[derive(Debug, Default)]
pub struct WeatherYieldPredictor {}

impl WeatherYieldPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculate(&self, series: &PerformanceSeries) -> YieldForecastReport {
        tracing::debug!(
            farm = series.farm_name(),
            periods = series.len(),
            "calculating weather-adjusted yields"
        );

        let yields_actual = series.yield_values();
        let base_yield = if yields_actual.is_empty() {
            0.0
        } else {
            yields_actual.iter().sum::<f64>() / yields_actual.len() as f64
        };

        let yields_predicted = series
            .records()
            .iter()
            .map(|record| {
                let impact = WeatherImpact::for_label(&record.weather_condition);
                round2(base_yield * impact.yield_multiplier)
            })
            .collect();

        // Without a last observation there is nothing to anchor the future
        // horizon to, so it stays empty.
        let mut future_dates = Vec::new();
        let mut future_predictions = Vec::new();
        if let Some(last_date) = series.last_date() {
            for i in 1..=FUTURE_PERIODS {
                let future_date = add_months(last_date, i);
                let month_factor = 1.0 + 0.1 * ((future_date.month() % 12) as f64 / 12.0);
                future_dates.push(future_date);
                future_predictions.push(round2(base_yield * month_factor));
            }
        }

        YieldForecastReport {
            farm_name: series.farm_name().to_string(),
            dates: series.dates(),
            yields_actual,
            yields_predicted,
            weather_conditions: series.weather_conditions(),
            future_dates,
            future_predictions,
        }
    }
}
