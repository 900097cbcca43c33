use chrono::NaiveDate;
use core_types::{RiskCategory, RiskTier};
use serde::{Deserialize, Serialize};

/// Per-period risk decomposition for one opportunity against one farm's
/// history.
///
/// All series are parallel arrays aligned to `dates`. Scores are integers
/// in [0, 100]; `overall_risks` is the weighted composite the categories
/// are derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub opportunity_name: String,
    pub farm_name: String,
    pub dates: Vec<NaiveDate>,
    pub volatility_risks: Vec<u8>,
    pub weather_risks: Vec<u8>,
    pub financial_risks: Vec<u8>,
    pub overall_risks: Vec<u8>,
    pub risk_categories: Vec<RiskCategory>,
    pub base_risk_level: RiskTier,
}
