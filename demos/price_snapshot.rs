//! Example: Price a snapshot and list put-call parity violations
//!
//! Run with: cargo run --example price_snapshot [SNAPSHOT.json]

use std::path::PathBuf;

use options_snapshot::prelude::*;

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/options.json")
    });

    // Market assumptions
    let spot = 25.0;
    let rate = 0.05; // 5% risk-free rate
    let time = 2.0; // 2 years
    let vol = 0.5; // 50% volatility

    let contracts = load_path(&path)?;
    println!("=== Snapshot ===\n");
    println!("File:      {}", path.display());
    println!("Contracts: {}\n", contracts.len());

    let market = MarketAssumptions::new(spot, rate, time, vol)?;
    let analyzer = SnapshotAnalyzer::new();
    let report = analyzer.price_with(&contracts, market)?;

    println!("=== Model vs Market ===\n");
    for c in &report.contracts {
        println!(
            "{:<4} K={:>6.2}  mid {:>7.4}  model {:>7.4}  delta {:>7.4}",
            c.option_type().label(),
            c.strike(),
            c.contract.mid(),
            c.pricing.theoretical_price,
            c.pricing.greeks.delta
        );
    }

    // Pairs whose market mids break C - P = S - K*e^(-rT)
    println!("\n=== Flagged Pairs ===\n");
    if report.flagged_arbitrage.is_empty() {
        println!("None above {:.2}", analyzer.config().arbitrage.threshold);
    }
    for c in &report.flagged_arbitrage {
        if let Some(gap) = c.pricing.arbitrage_discrepancy {
            println!("{:<4} K={:>6.2}  parity gap {:.4}", c.option_type().label(), c.strike(), gap);
        }
    }

    Ok(())
}
