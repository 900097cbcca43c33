use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ROI history scaled to an opportunity's target, padded to a minimum
/// charting horizon.
///
/// `dates` and `roi_values` are parallel arrays; entries past the real
/// history are synthetic padding periods. `cumulative_roi` sums the adjusted
/// ROI over the real history only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiTrendReport {
    pub opportunity_name: String,
    pub farm_name: String,
    pub target_roi: f64,
    pub dates: Vec<NaiveDate>,
    pub roi_values: Vec<f64>,
    pub cumulative_roi: f64,
}

/// Weather-adjusted yield predictions over the history plus a short
/// future horizon.
///
/// `dates`, `yields_actual`, `yields_predicted`, and `weather_conditions`
/// are parallel arrays over the history; `future_dates` and
/// `future_predictions` are parallel arrays over the forecast horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldForecastReport {
    pub farm_name: String,
    pub dates: Vec<NaiveDate>,
    pub yields_actual: Vec<f64>,
    pub yields_predicted: Vec<f64>,
    pub weather_conditions: Vec<String>,
    pub future_dates: Vec<NaiveDate>,
    pub future_predictions: Vec<f64>,
}

/// Historical unit prices derived from revenue and yield, plus a
/// trend-and-seasonality price forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceForecastReport {
    pub farm_name: String,
    pub farm_type: String,
    pub dates: Vec<NaiveDate>,
    pub historical_prices: Vec<f64>,
    pub future_dates: Vec<NaiveDate>,
    pub predicted_prices: Vec<f64>,
}

/// A linear ROI-accrual schedule over an opportunity's fixed duration.
///
/// `months` counts from 1 to the opportunity's duration; `projected_roi`
/// reaches the opportunity's expected ROI exactly at the final month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiProjectionReport {
    pub opportunity_name: String,
    pub months: Vec<u32>,
    pub projected_roi: Vec<f64>,
}
