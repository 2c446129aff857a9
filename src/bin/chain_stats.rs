//! Chain statistics CLI
//!
//! Loads a snapshot and prints extrema, liquidity and side averages without
//! any pricing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use options_snapshot::prelude::*;

mod common;

#[derive(Parser)]
#[command(name = "chain-stats")]
#[command(about = "Descriptive statistics for an options-chain snapshot")]
struct Cli {
    /// Snapshot JSON file
    #[arg(default_value = "options.json")]
    snapshot: PathBuf,

    /// Analysis config JSON (only the `report` section is used)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of contracts in the liquidity ranking
    #[arg(long)]
    top: Option<usize>,

    /// Number of strike histogram bins
    #[arg(long)]
    bins: Option<usize>,

    /// Also write the report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    common::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(top) = cli.top {
        config.report.top_liquid = top;
    }
    if let Some(bins) = cli.bins {
        config.report.histogram_bins = bins;
    }

    let report = SnapshotAnalyzer::with_config(config)
        .summarize_file(&cli.snapshot)
        .with_context(|| format!("analyzing {}", cli.snapshot.display()))?;

    common::print_summary(&report.summary);

    if let Some(path) = &cli.json {
        save_json(path, &report).with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
