//! Command Line Interface for the carbon credit equilibrium simulator.
use anyhow::{Result, ensure};
use carbon_eq_domain::config::{
    COMPETITIVENESS_PERCENTILE, LandUseParams, RevenueProfile, SimulationConfig,
};
use carbon_eq_domain::metrics::npv::annuity_factor;
use carbon_eq_domain::value_objects::PriceRecommendation;
use carbon_eq_optimization::{GridSearch, run_full_simulation};
use clap::Parser;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

#[derive(Parser)]
#[command(name = "carbon-eq")]
#[command(
    about = "Equilibrium carbon credit prices for forest conservation vs conventional land use",
    long_about = None
)]
struct Cli {
    /// Number of Monte Carlo trials
    #[arg(short = 'n', long, default_value_t = 100_000)]
    trials: usize,

    /// Annual discount rate in percent
    #[arg(short, long, default_value_t = 8.0)]
    discount_rate: f64,

    /// Time horizon in years
    #[arg(long, default_value_t = 30)]
    horizon: usize,

    /// One-time timber revenue per hectare (0 disables timber extraction)
    #[arg(long, default_value_t = 5000.0)]
    timber_value: f64,

    /// Mean annual cattle revenue per hectare
    #[arg(long, default_value_t = 800.0)]
    cattle_mean: f64,

    /// Standard deviation of annual cattle revenue
    #[arg(long, default_value_t = 200.0)]
    cattle_std: f64,

    /// Mean annual soybean revenue per hectare
    #[arg(long, default_value_t = 6100.0)]
    soy_mean: f64,

    /// Standard deviation of annual soybean revenue
    #[arg(long, default_value_t = 300.0)]
    soy_std: f64,

    /// Standing carbon stock in tCO2 per hectare
    #[arg(long, default_value_t = 569.0)]
    carbon_stock: f64,

    /// Annual carbon absorption in tCO2 per hectare per year
    #[arg(long, default_value_t = 9.5)]
    annual_absorption: f64,

    /// Lower bound of the tested credit price range
    #[arg(long, default_value_t = 0.0)]
    price_min: f64,

    /// Upper bound of the tested credit price range
    #[arg(long, default_value_t = 1000.0)]
    price_max: f64,

    /// Grid points per price axis
    #[arg(long, default_value_t = 100)]
    resolution: usize,

    /// Competitiveness percentile of the conventional NPV distribution
    #[arg(long, default_value_t = COMPETITIVENESS_PERCENTILE)]
    percentile: f64,

    /// Random seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Show values in US dollars instead of Brazilian reais
    #[arg(long)]
    usd: bool,

    /// Exchange rate (R$ per US$) used for display conversion
    #[arg(long, default_value_t = 5.5)]
    exchange_rate: f64,

    /// Emit the report as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Display-only currency conversion. The engine computes in the base
/// currency; conversion is applied to already-computed values here.
struct CurrencyDisplay {
    symbol: &'static str,
    rate: Decimal,
}

impl CurrencyDisplay {
    fn new(usd: bool, exchange_rate: f64) -> Result<Self> {
        if usd {
            ensure!(
                exchange_rate > 0.0 && exchange_rate.is_finite(),
                "exchange rate must be positive"
            );
            Ok(Self {
                symbol: "US$",
                rate: Decimal::from_f64(exchange_rate)
                    .ok_or_else(|| anyhow::anyhow!("exchange rate is not representable"))?,
            })
        } else {
            Ok(Self {
                symbol: "R$",
                rate: Decimal::ONE,
            })
        }
    }

    fn format(&self, value: Decimal) -> String {
        format!("{} {:.2}", self.symbol, value / self.rate)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = SimulationConfig::new(cli.trials, cli.discount_rate / 100.0, cli.horizon)
        .with_carbon_stock(cli.carbon_stock)
        .with_annual_absorption(cli.annual_absorption)
        .with_competitiveness_percentile(cli.percentile);

    let land_use = LandUseParams::new(
        cli.timber_value,
        RevenueProfile::new(cli.cattle_mean, cli.cattle_std),
        RevenueProfile::new(cli.soy_mean, cli.soy_std),
    );

    let strategy = GridSearch::new()
        .with_price_range(cli.price_min, cli.price_max)
        .with_resolution(cli.resolution);

    let currency = CurrencyDisplay::new(cli.usd, cli.exchange_rate)?;

    println!(
        "🌳 Running {} trials over {} years (seed {})...",
        cli.trials, cli.horizon, cli.seed
    );

    let artifacts = run_full_simulation(&config, &land_use, cli.seed, &strategy)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&artifacts.report)?);
        return Ok(());
    }

    let report = &artifacts.report;
    let percentile_label = (cli.percentile * 100.0).round() as u32;

    println!("\n📊 Simulation Results");
    println!("════════════════════════════════════");
    println!(
        "Conventional NPV (mean):  {}/ha",
        currency.format(report.conventional_npv_mean)
    );
    println!(
        "Threshold (p{}):          {}/ha",
        percentile_label,
        currency.format(report.conventional_npv_percentile)
    );

    match &report.recommendation {
        PriceRecommendation::Found {
            min_stock_price,
            min_flow_price,
            recommended_stock_price,
            recommended_flow_price,
        } => {
            // Annual equivalent of the one-time stock payment over the horizon.
            let factor = annuity_factor(config.discount_rate, config.time_horizon)?;
            let annualized_stock = *recommended_stock_price
                * Decimal::from_f64(factor)
                    .ok_or_else(|| anyhow::anyhow!("annuity factor is not representable"))?;

            println!(
                "Stock credit price:       {}/tCO2 (≈ {}/tCO2/year)",
                currency.format(*recommended_stock_price),
                currency.format(annualized_stock)
            );
            println!(
                "Flow credit price:        {}/tCO2/year",
                currency.format(*recommended_flow_price)
            );
            println!(
                "Minimum viable prices:    stock {}/tCO2, flow {}/tCO2/year",
                currency.format(*min_stock_price),
                currency.format(*min_flow_price)
            );
            println!(
                "Viable combinations:      {} of {}",
                artifacts.equilibrium.len(),
                cli.resolution * cli.resolution
            );
        }
        PriceRecommendation::NotFound => {
            println!(
                "❌ No viable price combination found within {}..{}; widen the price range or increase the resolution.",
                currency.format(Decimal::from_f64(cli.price_min).unwrap_or_default()),
                currency.format(Decimal::from_f64(cli.price_max).unwrap_or_default())
            );
        }
    }
    println!("════════════════════════════════════");

    Ok(())
}
