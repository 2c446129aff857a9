//! Helpers shared by the command-line tools

use options_snapshot::prelude::*;
use tracing_subscriber::EnvFilter;

/// Log to stderr, `RUST_LOG` overrides the default `info` level
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "n/a".to_string())
}

pub fn describe(contract: &Contract) -> String {
    format!(
        "{:<4} K={:>9.2}  bid {:>8.2} x {:<5} ask {:>8.2} x {:<5} spread {:>7.2}  orders {}",
        contract.option_type.label(),
        contract.strike,
        contract.bid_price,
        contract.bid_orders,
        contract.ask_price,
        contract.ask_orders,
        contract.spread,
        contract.total_orders
    )
}

pub fn print_summary<T: ContractView>(summary: &ChainSummary<T>) {
    let line = |label: &str, item: &Option<T>| match item {
        Some(c) => println!("{:<22}{}", label, describe(c.contract())),
        None => println!("{:<22}n/a", label),
    };

    println!("Chain Summary");
    println!("=============\n");
    line("Highest strike:", &summary.max_strike);
    line("Lowest strike:", &summary.min_strike);
    line("Most liquid:", &summary.most_liquid);

    println!(
        "\nAverage bid:   Call {}   Put {}",
        fmt_opt(summary.mean_bid_by_side.call),
        fmt_opt(summary.mean_bid_by_side.put)
    );
    println!(
        "Average ask:   Call {}   Put {}",
        fmt_opt(summary.mean_ask_by_side.call),
        fmt_opt(summary.mean_ask_by_side.put)
    );

    if !summary.top_liquid.is_empty() {
        println!("\nMost liquid contracts:");
        for (rank, c) in summary.top_liquid.iter().enumerate() {
            println!("  {:>2}. {}", rank + 1, describe(c.contract()));
        }
    }

    let hist = &summary.strike_histogram;
    if !hist.counts.is_empty() {
        println!("\nStrike distribution:");
        let max = hist.counts.iter().copied().max().unwrap_or(0).max(1);
        for (i, count) in hist.counts.iter().enumerate() {
            let bar = "#".repeat(count * 40 / max);
            println!(
                "  [{:>9.2}, {:>9.2}{} {:>4} {}",
                hist.edges[i],
                hist.edges[i + 1],
                if i + 1 == hist.counts.len() { "]" } else { ")" },
                count,
                bar
            );
        }
    }
}
