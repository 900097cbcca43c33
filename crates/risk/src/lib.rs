//! # Agrivest Risk Scorer
//!
//! Combines volatility, weather, and financial-margin signals from a farm's
//! performance history into a weighted composite risk score per period, with
//! a categorical label for display.
//!
//! Like the analytics crate, this is pure Layer 1 logic: stateless, no I/O,
//! and no failure modes — undefined signals fall back to the opportunity's
//! tier baseline instead of erroring.

pub mod report;
pub mod scorer;

pub use report::RiskReport;
pub use scorer::RiskScorer;
