//! Chain aggregation
//!
//! Folds a contract sequence into summary statistics. Works on plain
//! contracts and on priced contracts alike through `ContractView`.
//! Every "first/largest" pick breaks ties by input order.

use serde::{Deserialize, Serialize};

use super::config::ReportConfig;
use super::engine::{PricedChain, PricingFailure};
use crate::core::{Contract, ContractView, MarketAssumptions, OptionType, PricedContract};

/// Mean of a quantity split by option side; `None` for an empty side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SideMeans {
    pub call: Option<f64>,
    pub put: Option<f64>,
}

impl SideMeans {
    pub fn get(&self, option_type: OptionType) -> Option<f64> {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }
}

/// Equal-width strike histogram; the last bin is closed on the right
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrikeHistogram {
    /// `counts.len() + 1` bin edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Descriptive statistics for a chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSummary<T> {
    pub max_strike: Option<T>,
    pub min_strike: Option<T>,
    pub most_liquid: Option<T>,
    pub mean_bid_by_side: SideMeans,
    pub mean_ask_by_side: SideMeans,
    /// Most orders first
    pub top_liquid: Vec<T>,
    pub strike_histogram: StrikeHistogram,
}

/// Summary of an unpriced chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainReport {
    pub summary: ChainSummary<Contract>,
    pub contracts: Vec<Contract>,
}

/// Summary of a priced chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    pub assumptions: MarketAssumptions,
    pub summary: ChainSummary<PricedContract>,
    pub contracts: Vec<PricedContract>,
    pub flagged_arbitrage: Vec<PricedContract>,
    pub failures: Vec<PricingFailure>,
}

/// Summarize any contract sequence
pub fn summarize<T: ContractView + Clone>(items: &[T], config: &ReportConfig) -> ChainSummary<T> {
    ChainSummary {
        max_strike: first_max_by(items, |a, b| a.strike > b.strike).cloned(),
        min_strike: first_max_by(items, |a, b| a.strike < b.strike).cloned(),
        most_liquid: first_max_by(items, |a, b| a.total_orders > b.total_orders).cloned(),
        mean_bid_by_side: side_means(items, |c| c.bid_price),
        mean_ask_by_side: side_means(items, |c| c.ask_price),
        top_liquid: top_liquid(items, config.top_liquid),
        strike_histogram: strike_histogram(items, config.histogram_bins),
    }
}

/// Contracts with `arbitrage_flag` set, in input order
pub fn flagged_arbitrage<T: ContractView + Clone>(items: &[T]) -> Vec<T> {
    items.iter().filter(|c| c.arbitrage_flag()).cloned().collect()
}

pub fn build_chain_report(contracts: Vec<Contract>, config: &ReportConfig) -> ChainReport {
    let summary = summarize(&contracts, config);
    ChainReport { summary, contracts }
}

pub fn build_pricing_report(
    chain: PricedChain,
    assumptions: MarketAssumptions,
    config: &ReportConfig,
) -> PricingReport {
    let summary = summarize(&chain.contracts, config);
    let flagged = flagged_arbitrage(&chain.contracts);

    PricingReport {
        assumptions,
        summary,
        contracts: chain.contracts,
        flagged_arbitrage: flagged,
        failures: chain.failures,
    }
}

/// First item for which no later item is strictly `better`
fn first_max_by<T: ContractView>(
    items: &[T],
    better: impl Fn(&Contract, &Contract) -> bool,
) -> Option<&T> {
    let mut best: Option<&T> = None;
    for item in items {
        match best {
            Some(b) if !better(item.contract(), b.contract()) => {}
            _ => best = Some(item),
        }
    }
    best
}

fn side_means<T: ContractView>(items: &[T], value: impl Fn(&Contract) -> f64) -> SideMeans {
    let mean = |side: OptionType| {
        let (sum, n) = items
            .iter()
            .map(|i| i.contract())
            .filter(|c| c.option_type == side)
            .fold((0.0, 0usize), |(sum, n), c| (sum + value(c), n + 1));
        (n > 0).then(|| sum / n as f64)
    };

    SideMeans {
        call: mean(OptionType::Call),
        put: mean(OptionType::Put),
    }
}

fn top_liquid<T: ContractView + Clone>(items: &[T], n: usize) -> Vec<T> {
    let mut ranked: Vec<&T> = items.iter().collect();
    // Stable sort keeps input order among equal counts
    ranked.sort_by(|a, b| b.contract().total_orders.cmp(&a.contract().total_orders));
    ranked.into_iter().take(n).cloned().collect()
}

fn strike_histogram<T: ContractView>(items: &[T], bins: usize) -> StrikeHistogram {
    if items.is_empty() || bins == 0 {
        return StrikeHistogram::default();
    }

    let strikes = items.iter().map(|i| i.contract().strike);
    let (mut lo, mut hi) = strikes
        .clone()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| (lo.min(s), hi.max(s)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0; bins];
    for s in strikes {
        let idx = (((s - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    StrikeHistogram { edges, counts }
}
