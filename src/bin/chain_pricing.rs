//! Chain pricing CLI
//!
//! Loads a snapshot, prices every contract with Black-Scholes under the
//! configured market assumptions, runs the put-call parity check and prints
//! the statistics, Greeks, ITM probabilities and flagged contracts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use options_snapshot::prelude::*;

mod common;

#[derive(Clone, Copy, ValueEnum)]
enum ParityArg {
    /// Single-row comparison, never flags
    Literal,
    /// Pair calls and puts on the same strike
    Paired,
}

#[derive(Parser)]
#[command(name = "chain-pricing")]
#[command(about = "Black-Scholes overlay and parity check for an options-chain snapshot")]
struct Cli {
    /// Snapshot JSON file
    #[arg(default_value = "options.json")]
    snapshot: PathBuf,

    /// Analysis config JSON; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Underlying price
    #[arg(long)]
    spot: Option<f64>,

    /// Annualized risk-free rate
    #[arg(long)]
    rate: Option<f64>,

    /// Annualized volatility
    #[arg(long)]
    volatility: Option<f64>,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long)]
    expiry: Option<NaiveDate>,

    /// Time to expiry in years, takes precedence over --expiry
    #[arg(long)]
    years: Option<f64>,

    /// Valuation date for --expiry (defaults to today)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Parity discrepancy above which a contract is flagged
    #[arg(long)]
    threshold: Option<f64>,

    #[arg(long, value_enum)]
    parity_mode: Option<ParityArg>,

    /// Price on the current thread only
    #[arg(long)]
    sequential: bool,

    /// Report unpriceable contracts instead of aborting
    #[arg(long)]
    collect_failures: bool,

    /// Also write the report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };

        let market = &mut config.market;
        if let Some(spot) = self.spot {
            market.spot = spot;
        }
        if let Some(rate) = self.rate {
            market.risk_free_rate = rate;
        }
        if let Some(vol) = self.volatility {
            market.volatility = vol;
        }
        if let Some(expiry) = self.expiry {
            market.expiry = Some(expiry);
            market.time_to_expiry_years = None;
        }
        if let Some(years) = self.years {
            market.time_to_expiry_years = Some(years);
        }

        if let Some(threshold) = self.threshold {
            config.arbitrage.threshold = threshold;
        }
        if let Some(mode) = self.parity_mode {
            config.arbitrage.mode = match mode {
                ParityArg::Literal => ParityMode::Literal,
                ParityArg::Paired => ParityMode::PairedByStrike,
            };
        }
        if self.sequential {
            config.execution.parallel = false;
        }
        if self.collect_failures {
            config.execution.failure_policy = FailurePolicy::Collect;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    common::init_tracing();
    let cli = Cli::parse();

    let config = cli.config()?;
    let as_of = cli.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let report = SnapshotAnalyzer::with_config(config)
        .price_file(&cli.snapshot, as_of)
        .with_context(|| format!("pricing {}", cli.snapshot.display()))?;

    print_report(&report);

    if let Some(path) = &cli.json {
        save_json(path, &report).with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

fn print_report(report: &PricingReport) {
    let m = &report.assumptions;
    println!("Market Assumptions");
    println!("==================\n");
    println!("  Spot: ${:.2}", m.spot);
    println!("  Rate: {:.2}%", m.risk_free_rate * 100.0);
    println!(
        "  Time: {:.4} years ({:.0} days)",
        m.time_to_expiry_years,
        m.time_to_expiry_years * 365.0
    );
    println!("  Vol:  {:.1}%\n", m.volatility * 100.0);

    common::print_summary(&report.summary);

    println!("\nPricing and Greeks");
    println!("==================\n");
    println!(
        "{:<5}{:>10}{:>10}{:>10}{:>9}{:>9}{:>9}{:>10}{:>10}{:>10}{:>9}{:>10}",
        "Type",
        "Strike",
        "Mid",
        "Model",
        "Edge",
        "Delta",
        "Gamma",
        "Vega",
        "Theta",
        "Rho",
        "P(ITM)",
        "Parity"
    );
    for c in &report.contracts {
        let p = &c.pricing;
        println!(
            "{:<5}{:>10.2}{:>10.4}{:>10.4}{:>9.4}{:>9.4}{:>9.4}{:>10.4}{:>10.4}{:>10.4}{:>9.4}{:>10}{}",
            c.option_type().label(),
            c.strike(),
            c.contract.mid(),
            p.theoretical_price,
            c.edge(),
            p.greeks.delta,
            p.greeks.gamma,
            p.greeks.vega,
            p.greeks.theta,
            p.greeks.rho,
            p.probability_itm,
            common::fmt_opt(p.arbitrage_discrepancy),
            if c.arbitrage_flag { " *" } else { "" }
        );
    }

    println!("\nArbitrage Opportunities");
    println!("=======================\n");
    if report.flagged_arbitrage.is_empty() {
        println!("  none");
    }
    for c in &report.flagged_arbitrage {
        println!(
            "  {}  parity gap {}",
            common::describe(&c.contract),
            common::fmt_opt(c.pricing.arbitrage_discrepancy)
        );
    }

    if !report.failures.is_empty() {
        println!("\nUnpriced Contracts");
        println!("==================\n");
        for f in &report.failures {
            println!(
                "  row {:>4}  {:<4} K={:.2}: {}",
                f.index,
                f.option_type.label(),
                f.strike,
                f.reason
            );
        }
    }
}
