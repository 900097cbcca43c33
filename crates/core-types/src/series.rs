use crate::structs::PerformanceRecord;
use chrono::NaiveDate;

/// A read-only, date-ordered view over one farm's performance history.
///
/// Constructed fresh per calculation from a snapshot of records and discarded
/// once results are produced; nothing is cached or written back. The caller
/// supplies records already sorted ascending by date — ordering is a
/// precondition this view relies on but does not restore.
#[derive(Debug, Clone)]
pub struct PerformanceSeries {
    farm_name: String,
    farm_type: String,
    records: Vec<PerformanceRecord>,
}

impl PerformanceSeries {
    pub fn new(
        farm_name: impl Into<String>,
        farm_type: impl Into<String>,
        records: Vec<PerformanceRecord>,
    ) -> Self {
        Self {
            farm_name: farm_name.into(),
            farm_type: farm_type.into(),
            records,
        }
    }

    pub fn farm_name(&self) -> &str {
        &self.farm_name
    }

    pub fn farm_type(&self) -> &str {
        &self.farm_type
    }

    pub fn records(&self) -> &[PerformanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observation dates, aligned by index with the value accessors below.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    pub fn yield_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.yield_amount).collect()
    }

    pub fn revenues(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.revenue).collect()
    }

    pub fn profits(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.profit).collect()
    }

    pub fn weather_conditions(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.weather_condition.clone())
            .collect()
    }

    /// The most recent observation date, if any — the anchor every
    /// forecaster extends its future horizon from.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }
}
