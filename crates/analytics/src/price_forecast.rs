use crate::report::PriceForecastReport;
use crate::util::round2;
use chrono::{Datelike, NaiveDate, Utc};
use core_types::{PerformanceSeries, add_months};
use std::f64::consts::PI;

/// Number of future periods the price forecast extends to.
const FORECAST_PERIODS: u32 = 6;

/// Unit price assumed when no price has ever been computable.
const DEFAULT_UNIT_PRICE: f64 = 10.0;

/// Forecast prices never drop below this floor.
const PRICE_FLOOR: f64 = 0.1;

/// A stateless calculator deriving historical unit prices from revenue and
/// yield, and forecasting future prices from trend plus seasonality.
///
/// A record without yield cannot price its revenue, so it reuses the
/// previous computed price (or the default for a first record). The
/// forecast always spans exactly six periods: with no history it anchors to
/// the current date and the default price.
#[derive(Debug, Default)]
pub struct MarketPricePredictor {}

impl MarketPricePredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates the report anchored to today's date when history is empty.
    pub fn calculate(&self, series: &PerformanceSeries) -> PriceForecastReport {
        self.calculate_from(series, Utc::now().date_naive())
    }

    /// Calculates the report with an explicit anchor for an empty history.
    pub fn calculate_from(&self, series: &PerformanceSeries, today: NaiveDate) -> PriceForecastReport {
        tracing::debug!(
            farm = series.farm_name(),
            periods = series.len(),
            "calculating market price forecast"
        );

        let mut historical_prices: Vec<f64> = Vec::with_capacity(series.len());
        for record in series.records() {
            let price = if record.yield_amount > 0.0 {
                round2(record.revenue / record.yield_amount)
            } else {
                // No yield to price against: carry the last computed price
                // forward, or fall back to the default for a first record.
                *historical_prices.last().unwrap_or(&DEFAULT_UNIT_PRICE)
            };
            historical_prices.push(price);
        }

        let avg_change = if historical_prices.len() >= 2 {
            let deltas: f64 = historical_prices.windows(2).map(|w| w[1] - w[0]).sum();
            deltas / (historical_prices.len() - 1) as f64
        } else {
            0.0
        };

        let last_date = series.last_date().unwrap_or(today);
        let last_price = *historical_prices.last().unwrap_or(&DEFAULT_UNIT_PRICE);

        let mut future_dates = Vec::with_capacity(FORECAST_PERIODS as usize);
        let mut predicted_prices = Vec::with_capacity(FORECAST_PERIODS as usize);
        for i in 1..=FORECAST_PERIODS {
            let projected_date = add_months(last_date, i);

            // Seasonal factor peaks mid-year and bottoms out in winter.
            let month = projected_date.month() as f64;
            let seasonal_factor = 1.0 + 0.1 * (PI * (month - 3.0) / 6.0).sin();

            let projected_price = last_price + avg_change * i as f64 * seasonal_factor;
            future_dates.push(projected_date);
            predicted_prices.push(round2(projected_price).max(PRICE_FLOOR));
        }

        PriceForecastReport {
            farm_name: series.farm_name().to_string(),
            farm_type: series.farm_type().to_string(),
            dates: series.dates(),
            historical_prices,
            future_dates,
            predicted_prices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::PerformanceRecord;

    fn record(date: (i32, u32, u32), yield_amount: f64, revenue: f64) -> PerformanceRecord {
        PerformanceRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            yield_amount,
            revenue,
            expenses: 0.0,
            profit: 0.0,
            weather_condition: "Sunny".to_string(),
        }
    }

    fn series(records: Vec<PerformanceRecord>) -> PerformanceSeries {
        PerformanceSeries::new("Green Valley Crops", "Crop", records)
    }

    #[test]
    fn unit_price_is_revenue_over_yield() {
        let s = series(vec![
            record((2024, 1, 15), 10.0, 1000.0),
            record((2024, 2, 15), 8.0, 1000.0),
        ]);
        let report = MarketPricePredictor::new().calculate(&s);

        assert_eq!(report.historical_prices, vec![100.0, 125.0]);
    }

    #[test]
    fn zero_yield_reuses_previous_price() {
        let s = series(vec![
            record((2024, 1, 15), 10.0, 1000.0),
            record((2024, 2, 15), 0.0, 500.0),
        ]);
        let report = MarketPricePredictor::new().calculate(&s);

        assert_eq!(report.historical_prices, vec![100.0, 100.0]);
    }

    #[test]
    fn first_record_without_yield_uses_default_price() {
        let s = series(vec![record((2024, 1, 15), 0.0, 500.0)]);
        let report = MarketPricePredictor::new().calculate(&s);

        assert_eq!(report.historical_prices, vec![10.0]);
    }

    #[test]
    fn flat_history_forecasts_flat_prices() {
        let s = series(vec![
            record((2024, 1, 15), 10.0, 1000.0),
            record((2024, 2, 15), 10.0, 1000.0),
        ]);
        let report = MarketPricePredictor::new().calculate(&s);

        assert_eq!(report.predicted_prices.len(), 6);
        assert!(report.predicted_prices.iter().all(|&p| p == 100.0));
        assert_eq!(
            report.future_dates[0],
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(
            report.future_dates[5],
            NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()
        );
    }

    #[test]
    fn trend_is_scaled_by_horizon_and_seasonality() {
        // Prices 10 then 12, so avg_change = 2.
        let s = series(vec![
            record((2024, 1, 15), 1.0, 10.0),
            record((2024, 2, 15), 1.0, 12.0),
        ]);
        let report = MarketPricePredictor::new().calculate(&s);

        // March: sin(0) = 0 gives a neutral factor, 12 + 2*1 = 14.
        assert_eq!(report.predicted_prices[0], 14.0);
        // June: sin(pi/2) = 1 gives factor 1.1, 12 + 2*4*1.1 = 20.8.
        assert_eq!(report.predicted_prices[3], 20.8);
    }

    #[test]
    fn forecast_never_drops_below_floor() {
        // Prices 10 then 1, so avg_change = -9 and projections go negative.
        let s = series(vec![
            record((2024, 1, 15), 1.0, 10.0),
            record((2024, 2, 15), 1.0, 1.0),
        ]);
        let report = MarketPricePredictor::new().calculate(&s);

        assert!(report.predicted_prices.iter().all(|&p| p >= PRICE_FLOOR));
        assert_eq!(report.predicted_prices[0], PRICE_FLOOR);
    }

    #[test]
    fn empty_history_still_forecasts_six_periods() {
        let s = series(vec![]);
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let report = MarketPricePredictor::new().calculate_from(&s, today);

        assert!(report.historical_prices.is_empty());
        assert_eq!(report.predicted_prices.len(), 6);
        assert!(report.predicted_prices.iter().all(|&p| p == 10.0));
        assert_eq!(
            report.future_dates[0],
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
        );
        assert_eq!(
            report.future_dates[5],
            NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
        );
    }
}
