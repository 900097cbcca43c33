use analytics::{MarketPricePredictor, RoiProjector, RoiTrendCalculator, WeatherYieldPredictor};
use anyhow::Context;
use chrono::{Datelike, Months, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::{
    OpportunityContext, PerformanceRecord, PerformanceSeries, RiskTier, WeatherCondition,
    WeatherImpact, add_months,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use risk::RiskScorer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Agrivest analytics CLI.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report(args) => handle_report(args),
        Commands::Generate(args) => handle_generate(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Analytics engine for the agricultural-investment dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every calculator over a dashboard snapshot and print the reports.
    Report(ReportArgs),
    /// Generate a synthetic dashboard snapshot for demos and testing.
    Generate(GenerateArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Path to the snapshot JSON produced by `generate` (or by an export).
    #[arg(long)]
    input: PathBuf,

    /// Emit one JSON document instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct GenerateArgs {
    /// Where to write the snapshot JSON.
    #[arg(long)]
    output: PathBuf,

    /// Number of monthly performance records to synthesize.
    #[arg(long, default_value_t = 24)]
    months: u32,

    /// Seed for reproducible output; omit for a random seed.
    #[arg(long)]
    seed: Option<u64>,
}

// ==============================================================================
// Snapshot File Format
// ==============================================================================

/// The in-process call contract, serialized: one farm's ordered history plus
/// the terms of the opportunity being evaluated.
#[derive(Debug, Serialize, Deserialize)]
struct DashboardSnapshot {
    farm_name: String,
    farm_type: String,
    opportunity: OpportunitySpec,
    performance: Vec<PerformanceRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpportunitySpec {
    title: String,
    expected_roi: f64,
    duration_months: u32,
    risk_tier: RiskTier,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

fn handle_report(args: ReportArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read snapshot {}", args.input.display()))?;
    let snapshot: DashboardSnapshot =
        serde_json::from_str(&raw).context("failed to parse snapshot JSON")?;
    tracing::info!(
        farm = %snapshot.farm_name,
        records = snapshot.performance.len(),
        "loaded dashboard snapshot"
    );

    let context = OpportunityContext::new(
        snapshot.opportunity.title,
        snapshot.opportunity.expected_roi,
        snapshot.opportunity.duration_months,
        snapshot.opportunity.risk_tier,
    )
    .context("invalid opportunity terms in snapshot")?;

    let series = PerformanceSeries::new(
        snapshot.farm_name,
        snapshot.farm_type,
        snapshot.performance,
    );

    let roi_trend = RoiTrendCalculator::new().calculate(&series, &context);
    let yield_forecast = WeatherYieldPredictor::new().calculate(&series);
    let price_forecast = MarketPricePredictor::new().calculate(&series);
    let risk = RiskScorer::new().calculate(&series, &context);
    let projection = RoiProjector::new().calculate(&context);

    if args.json {
        let document = serde_json::json!({
            "roi_trend": roi_trend,
            "weather_yield": yield_forecast,
            "market_price": price_forecast,
            "risk_levels": risk,
            "roi_projection": projection,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!(
        "\n{} / {} ({} periods of history)",
        roi_trend.opportunity_name,
        roi_trend.farm_name,
        series.len()
    );
    println!("Base risk level: {}\n", risk.base_risk_level);

    let mut trend_table = Table::new();
    trend_table.set_header(vec!["Date", "ROI %", "Overall Risk", "Category"]);
    for (i, date) in roi_trend.dates.iter().enumerate() {
        let (overall, category) = match risk.overall_risks.get(i) {
            Some(score) => (score.to_string(), risk.risk_categories[i].to_string()),
            // Padded periods have no risk decomposition.
            None => ("-".to_string(), "-".to_string()),
        };
        trend_table.add_row(vec![
            date.to_string(),
            format!("{:.2}", roi_trend.roi_values[i]),
            overall,
            category,
        ]);
    }
    println!("ROI trend (target {:.1}%)", roi_trend.target_roi);
    println!("{trend_table}");
    println!("Cumulative ROI: {:.2}%\n", roi_trend.cumulative_roi);

    let mut yield_table = Table::new();
    yield_table.set_header(vec!["Date", "Weather", "Actual Yield", "Predicted Yield"]);
    for (i, date) in yield_forecast.dates.iter().enumerate() {
        yield_table.add_row(vec![
            date.to_string(),
            yield_forecast.weather_conditions[i].clone(),
            format!("{:.2}", yield_forecast.yields_actual[i]),
            format!("{:.2}", yield_forecast.yields_predicted[i]),
        ]);
    }
    for (i, date) in yield_forecast.future_dates.iter().enumerate() {
        yield_table.add_row(vec![
            date.to_string(),
            "(forecast)".to_string(),
            "-".to_string(),
            format!("{:.2}", yield_forecast.future_predictions[i]),
        ]);
    }
    println!("Weather-adjusted yield");
    println!("{yield_table}\n");

    let mut price_table = Table::new();
    price_table.set_header(vec!["Date", "Unit Price"]);
    for (i, date) in price_forecast.dates.iter().enumerate() {
        price_table.add_row(vec![
            date.to_string(),
            format!("{:.2}", price_forecast.historical_prices[i]),
        ]);
    }
    for (i, date) in price_forecast.future_dates.iter().enumerate() {
        price_table.add_row(vec![
            format!("{date} (forecast)"),
            format!("{:.2}", price_forecast.predicted_prices[i]),
        ]);
    }
    println!("Market price ({})", price_forecast.farm_type);
    println!("{price_table}\n");

    let mut projection_table = Table::new();
    projection_table.set_header(vec!["Month", "Projected ROI %"]);
    for (i, month) in projection.months.iter().enumerate() {
        projection_table.add_row(vec![month.to_string(), format!("{:.2}", projection.projected_roi[i])]);
    }
    println!("ROI projection over {} months", context.duration_months);
    println!("{projection_table}");

    Ok(())
}

// ==============================================================================
// Generate Command Logic
// ==============================================================================

/// Seasonal growth factor per calendar month, January through December.
const MONTHLY_GROWTH_FACTOR: [f64; 12] = [
    0.8, 0.85, 0.95, 1.1, 1.2, 1.3, 1.25, 1.2, 1.1, 1.0, 0.9, 0.85,
];

const SAMPLE_FARMS: [(&str, &str); 5] = [
    ("Green Valley Crops", "Crop"),
    ("Highland Cattle Ranch", "Livestock"),
    ("Sunrise Diversified Farm", "Mixed"),
    ("Organic Valley Farms", "Crop"),
    ("Prairie Poultry & Grains", "Mixed"),
];

fn handle_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (farm_name, farm_type) = *SAMPLE_FARMS
        .choose(&mut rng)
        .expect("sample farm list is non-empty");

    let tiers = [RiskTier::Low, RiskTier::Medium, RiskTier::High];
    let opportunity = OpportunitySpec {
        title: format!("{farm_name} - Project 1"),
        expected_roi: round2(rng.gen_range(10.0..18.0)),
        duration_months: *[12u32, 24, 36, 48].choose(&mut rng).unwrap(),
        risk_tier: *tiers.choose(&mut rng).unwrap(),
    };

    let performance = synthesize_history(&mut rng, args.months);

    let snapshot = DashboardSnapshot {
        farm_name: farm_name.to_string(),
        farm_type: farm_type.to_string(),
        opportunity,
        performance,
    };

    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&args.output, json)
        .with_context(|| format!("failed to write snapshot {}", args.output.display()))?;

    println!(
        "Wrote {} months of sample data for {} to {}",
        args.months,
        farm_name,
        args.output.display()
    );
    Ok(())
}

/// Synthesizes a monthly performance history ending this month, with
/// seasonal growth, random weather (whose impact feeds the yield), and
/// profit derived from revenue minus expenses.
fn synthesize_history(rng: &mut StdRng, months: u32) -> Vec<PerformanceRecord> {
    let base_yield = rng.gen_range(10.0..50.0);
    let base_revenue = rng.gen_range(20_000.0..100_000.0);
    let base_expense = base_revenue * rng.gen_range(0.4..0.7);

    let today = Utc::now().date_naive();
    let start = today
        .checked_sub_months(Months::new(months))
        .unwrap_or(today);
    // Anchor records mid-month so forecast dates never need day clamping.
    let start = NaiveDate::from_ymd_opt(start.year(), start.month(), 15).unwrap_or(start);

    (0..months)
        .map(|i| {
            let date = add_months(start, i);
            let season_factor = MONTHLY_GROWTH_FACTOR[date.month0() as usize];
            let random_factor = rng.gen_range(0.85..1.15);

            let weather = *WeatherCondition::ALL
                .choose(rng)
                .expect("weather table is non-empty");
            let impact = WeatherImpact::of(weather);

            let yield_amount = base_yield * season_factor * random_factor * impact.yield_multiplier;
            let revenue = base_revenue * season_factor * random_factor;
            let expenses = base_expense * rng.gen_range(0.9..1.1);

            PerformanceRecord {
                date,
                yield_amount: round2(yield_amount),
                revenue: round2(revenue),
                expenses: round2(expenses),
                profit: round2(revenue - expenses),
                weather_condition: weather.as_str().to_string(),
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
