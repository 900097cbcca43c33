use crate::report::RiskReport;
use core_types::{OpportunityContext, PerformanceSeries, RiskCategory, WeatherImpact};

/// Weight of the profit-volatility signal in the composite score.
const VOLATILITY_WEIGHT: f64 = 0.3;

/// Weight of the weather signal in the composite score.
const WEATHER_WEIGHT: f64 = 0.3;

/// Weight of the financial-margin signal in the composite score.
/// Financial health is weighted highest.
const FINANCIAL_WEIGHT: f64 = 0.4;

/// A stateless calculator scoring per-period investment risk.
///
/// Three signals are computed for every observation and combined into a
/// weighted composite in [0, 100]. Wherever a signal is undefined (first
/// record, non-positive prior profit, zero revenue) the opportunity tier's
/// baseline score stands in, so scoring never fails.
#[derive(Debug, Default)]
pub struct RiskScorer {}

impl RiskScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculate(&self, series: &PerformanceSeries, context: &OpportunityContext) -> RiskReport {
        tracing::debug!(
            farm = series.farm_name(),
            opportunity = %context.title,
            periods = series.len(),
            "calculating risk decomposition"
        );

        let base_risk = context.risk_tier.base_risk_score();
        let records = series.records();

        let mut volatility_risks = Vec::with_capacity(records.len());
        let mut weather_risks = Vec::with_capacity(records.len());
        let mut financial_risks = Vec::with_capacity(records.len());
        let mut overall_risks = Vec::with_capacity(records.len());
        let mut risk_categories = Vec::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            // Volatility: relative profit swing against the prior period.
            // Undefined for the first record or a non-positive prior profit.
            let volatility = match i.checked_sub(1).map(|j| records[j].profit) {
                Some(prev_profit) if prev_profit > 0.0 => {
                    let swing = ((record.profit - prev_profit) / prev_profit).abs();
                    (swing * 100.0).round().min(100.0) as u8
                }
                _ => base_risk,
            };

            let weather = WeatherImpact::for_label(&record.weather_condition).risk_score;

            // Financial: the thinner the margin, the higher the risk.
            let financial = if record.revenue > 0.0 {
                let margin = record.profit / record.revenue;
                ((1.0 - margin) * 100.0).round().clamp(0.0, 100.0) as u8
            } else {
                base_risk
            };

            let overall = (VOLATILITY_WEIGHT * volatility as f64
                + WEATHER_WEIGHT * weather as f64
                + FINANCIAL_WEIGHT * financial as f64)
                .floor() as u8;

            volatility_risks.push(volatility);
            weather_risks.push(weather);
            financial_risks.push(financial);
            overall_risks.push(overall);
            risk_categories.push(RiskCategory::from_score(overall));
        }

        RiskReport {
            opportunity_name: context.title.clone(),
            farm_name: series.farm_name().to_string(),
            dates: series.dates(),
            volatility_risks,
            weather_risks,
            financial_risks,
            overall_risks,
            risk_categories,
            base_risk_level: context.risk_tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::{PerformanceRecord, RiskTier};

    fn record(month: u32, revenue: f64, profit: f64, weather: &str) -> PerformanceRecord {
        PerformanceRecord {
            date: NaiveDate::from_ymd_opt(2024, month, 15).unwrap(),
            yield_amount: 10.0,
            revenue,
            expenses: 0.0,
            profit,
            weather_condition: weather.to_string(),
        }
    }

    fn series(records: Vec<PerformanceRecord>) -> PerformanceSeries {
        PerformanceSeries::new("Highland Cattle Ranch", "Livestock", records)
    }

    fn context(tier: RiskTier) -> OpportunityContext {
        OpportunityContext::new("Project 1", 14.2, 24, tier).unwrap()
    }

    #[test]
    fn decomposes_and_weights_the_three_signals() {
        let s = series(vec![
            record(1, 1000.0, 200.0, "Sunny"),
            record(2, 0.0, -50.0, "Storm"),
        ]);
        let report = RiskScorer::new().calculate(&s, &context(RiskTier::Medium));

        // First record: volatility falls back to base 50, Sunny scores 10,
        // 20% margin gives financial 80; floor(15 + 3 + 32) = 50.
        assert_eq!(report.volatility_risks[0], 50);
        assert_eq!(report.weather_risks[0], 10);
        assert_eq!(report.financial_risks[0], 80);
        assert_eq!(report.overall_risks[0], 50);
        assert_eq!(report.risk_categories[0], RiskCategory::Medium);

        // Second record: profit swings from 200 to -50 (125%, capped 100),
        // Storm scores 75, zero revenue falls back to base 50;
        // floor(30 + 22.5 + 20) = 72.
        assert_eq!(report.volatility_risks[1], 100);
        assert_eq!(report.weather_risks[1], 75);
        assert_eq!(report.financial_risks[1], 50);
        assert_eq!(report.overall_risks[1], 72);
        assert_eq!(report.risk_categories[1], RiskCategory::High);

        assert_eq!(report.base_risk_level, RiskTier::Medium);
    }

    #[test]
    fn non_positive_prior_profit_falls_back_to_base() {
        let s = series(vec![
            record(1, 1000.0, -100.0, "Cloudy"),
            record(2, 1000.0, 300.0, "Cloudy"),
        ]);
        let report = RiskScorer::new().calculate(&s, &context(RiskTier::High));

        assert_eq!(report.volatility_risks[1], 75);
    }

    #[test]
    fn financial_risk_clamps_at_both_ends() {
        let s = series(vec![
            // Margin 1.5 drives (1 - margin) negative: clamps to 0.
            record(1, 1000.0, 1500.0, "Ideal"),
            // Margin -2.0 drives the raw score to 300: clamps to 100.
            record(2, 1000.0, -2000.0, "Ideal"),
        ]);
        let report = RiskScorer::new().calculate(&s, &context(RiskTier::Low));

        assert_eq!(report.financial_risks[0], 0);
        assert_eq!(report.financial_risks[1], 100);
    }

    #[test]
    fn unknown_weather_scores_the_default() {
        let s = series(vec![record(1, 1000.0, 200.0, "Hail")]);
        let report = RiskScorer::new().calculate(&s, &context(RiskTier::Low));

        assert_eq!(report.weather_risks[0], 30);
    }

    #[test]
    fn all_scores_stay_within_bounds() {
        let s = series(vec![
            record(1, 1000.0, 1.0, "Drought"),
            record(2, 1000.0, 10_000.0, "Storm"),
            record(3, 0.5, -10_000.0, "Hot"),
        ]);
        let report = RiskScorer::new().calculate(&s, &context(RiskTier::High));

        for i in 0..3 {
            assert!(report.volatility_risks[i] <= 100);
            assert!(report.weather_risks[i] <= 100);
            assert!(report.financial_risks[i] <= 100);
            assert!(report.overall_risks[i] <= 100);
        }
    }

    #[test]
    fn empty_history_yields_empty_report() {
        let report = RiskScorer::new().calculate(&series(vec![]), &context(RiskTier::Low));

        assert!(report.dates.is_empty());
        assert!(report.overall_risks.is_empty());
        assert!(report.risk_categories.is_empty());
        assert_eq!(report.base_risk_level, RiskTier::Low);
    }
}
