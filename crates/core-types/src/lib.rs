pub mod calendar;
pub mod enums;
pub mod error;
pub mod series;
pub mod structs;
pub mod weather;

// Re-export the core types to provide a clean public API.
pub use calendar::add_months;
pub use enums::{RiskCategory, RiskTier};
pub use error::CoreError;
pub use series::PerformanceSeries;
pub use structs::{OpportunityContext, PerformanceRecord};
pub use weather::{WeatherCondition, WeatherImpact};
