//! The fixed weather impact table.
//!
//! Weather conditions arrive as free-form strings on performance records.
//! The known conditions form a closed, compile-time-checked table mapping
//! each one to a yield multiplier and a risk score; anything else falls back
//! to a documented neutral default rather than an error.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Yield multiplier applied for a weather condition not in the table.
pub const DEFAULT_YIELD_MULTIPLIER: f64 = 1.0;

/// Risk score assigned for a weather condition not in the table.
pub const DEFAULT_RISK_SCORE: u8 = 30;

/// A recognized weather condition with a fixed impact on yield and risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Storm,
    Drought,
    Ideal,
    Cold,
    Hot,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 8] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Storm,
        WeatherCondition::Drought,
        WeatherCondition::Ideal,
        WeatherCondition::Cold,
        WeatherCondition::Hot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Storm => "Storm",
            WeatherCondition::Drought => "Drought",
            WeatherCondition::Ideal => "Ideal",
            WeatherCondition::Cold => "Cold",
            WeatherCondition::Hot => "Hot",
        }
    }
}

impl FromStr for WeatherCondition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sunny" => Ok(WeatherCondition::Sunny),
            "Cloudy" => Ok(WeatherCondition::Cloudy),
            "Rainy" => Ok(WeatherCondition::Rainy),
            "Storm" => Ok(WeatherCondition::Storm),
            "Drought" => Ok(WeatherCondition::Drought),
            "Ideal" => Ok(WeatherCondition::Ideal),
            "Cold" => Ok(WeatherCondition::Cold),
            "Hot" => Ok(WeatherCondition::Hot),
            _ => Err(()),
        }
    }
}

/// The (yield multiplier, risk score) pair looked up for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherImpact {
    pub yield_multiplier: f64,
    pub risk_score: u8,
}

impl WeatherImpact {
    /// Returns the impact for a recognized condition.
    pub fn of(condition: WeatherCondition) -> Self {
        let (yield_multiplier, risk_score) = match condition {
            WeatherCondition::Sunny => (1.1, 10),
            WeatherCondition::Cloudy => (0.9, 25),
            WeatherCondition::Rainy => (0.8, 40),
            WeatherCondition::Storm => (0.6, 75),
            WeatherCondition::Drought => (0.5, 90),
            WeatherCondition::Ideal => (1.2, 5),
            WeatherCondition::Cold => (0.7, 50),
            WeatherCondition::Hot => (0.85, 60),
        };
        Self {
            yield_multiplier,
            risk_score,
        }
    }

    /// Looks up the impact for a free-form condition label.
    ///
    /// Unrecognized labels resolve to the neutral default
    /// (multiplier 1.0, risk score 30) and are logged, never rejected.
    pub fn for_label(label: &str) -> Self {
        match label.parse::<WeatherCondition>() {
            Ok(condition) => Self::of(condition),
            Err(()) => {
                tracing::warn!(weather = label, "unrecognized weather condition, using defaults");
                Self {
                    yield_multiplier: DEFAULT_YIELD_MULTIPLIER,
                    risk_score: DEFAULT_RISK_SCORE,
                }
            }
        }
    }
}
