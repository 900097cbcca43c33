//! # Agrivest Analytics Engine
//!
//! This crate provides the deterministic calculators that turn a farm's
//! performance history into the derived series shown on the investment
//! dashboard: ROI trends, weather-adjusted yield predictions, market-price
//! forecasts, and linear ROI-accrual projections.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every calculator takes an immutable snapshot
//!   as input and produces a self-contained report as output. There is no
//!   shared state, no I/O, and no failure mode — each edge case (empty
//!   history, zero revenue, zero yield) resolves to a documented fallback.
//!
//! ## Public API
//!
//! - `RoiTrendCalculator` / `RoiTrendReport`
//! - `WeatherYieldPredictor` / `YieldForecastReport`
//! - `MarketPricePredictor` / `PriceForecastReport`
//! - `RoiProjector` / `RoiProjectionReport`

// Declare the modules that constitute this crate.
pub mod price_forecast;
pub mod projection;
pub mod report;
pub mod roi_trend;
mod util;
pub mod yield_forecast;

// Re-export the key components to create a clean, public-facing API.
pub use price_forecast::MarketPricePredictor;
pub use projection::RoiProjector;
pub use report::{PriceForecastReport, RoiProjectionReport, RoiTrendReport, YieldForecastReport};
pub use roi_trend::RoiTrendCalculator;
pub use yield_forecast::WeatherYieldPredictor;
