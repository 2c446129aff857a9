//! Put-call parity check
//!
//! Parity says `C - P = S - K·e^(-rT)` for a call and a put on the same
//! strike. A snapshot row holds only one side, so the discrepancy is a
//! chain-level quantity: under `PairedByStrike` each call is matched with the
//! put at the same strike and the market mids are compared.

use super::config::{ArbitrageConfig, ParityMode};
use crate::core::{Contract, MarketAssumptions, OptionType, PricedContract};
use crate::models::black_scholes::parity_gap;

/// Strikes closer than this are treated as the same strike
pub const STRIKE_TOLERANCE: f64 = 1e-9;

/// Fill in `arbitrage_discrepancy` and `arbitrage_flag` for every contract
pub fn apply_parity(
    contracts: &mut [PricedContract],
    assumptions: &MarketAssumptions,
    config: &ArbitrageConfig,
) {
    let discrepancies = match config.mode {
        ParityMode::Literal => vec![None; contracts.len()],
        ParityMode::PairedByStrike => paired_discrepancies(contracts, assumptions),
    };

    let mut flagged = 0;
    for (contract, discrepancy) in contracts.iter_mut().zip(discrepancies) {
        contract.set_discrepancy(discrepancy, config.threshold);
        if contract.arbitrage_flag {
            flagged += 1;
        }
    }

    tracing::info!(
        "Parity check ({:?}): {} of {} contracts flagged above {}",
        config.mode,
        flagged,
        contracts.len(),
        config.threshold
    );
}

/// Contracts of one side sorted by strike.
///
/// The sort is stable, so among equal strikes the first one in chain order
/// is found first.
struct StrikeIndex<'a> {
    legs: Vec<&'a Contract>,
}

impl<'a> StrikeIndex<'a> {
    fn new(contracts: &'a [PricedContract], option_type: OptionType) -> Self {
        let mut legs: Vec<&Contract> = contracts
            .iter()
            .map(|p| &p.contract)
            .filter(|c| c.option_type == option_type)
            .collect();
        legs.sort_by(|a, b| a.strike.total_cmp(&b.strike));
        Self { legs }
    }

    /// First leg within `STRIKE_TOLERANCE` of `strike`
    fn at(&self, strike: f64) -> Option<&'a Contract> {
        let i = self
            .legs
            .partition_point(|c| c.strike <= strike - STRIKE_TOLERANCE);
        self.legs
            .get(i)
            .copied()
            .filter(|c| (c.strike - strike).abs() < STRIKE_TOLERANCE)
    }
}

/// Discrepancy per contract, `None` where no opposite leg exists
pub fn paired_discrepancies(
    contracts: &[PricedContract],
    assumptions: &MarketAssumptions,
) -> Vec<Option<f64>> {
    let calls = StrikeIndex::new(contracts, OptionType::Call);
    let puts = StrikeIndex::new(contracts, OptionType::Put);

    contracts
        .iter()
        .map(|priced| {
            let leg = &priced.contract;
            let (call, put) = match leg.option_type {
                OptionType::Call => (leg, puts.at(leg.strike)?),
                OptionType::Put => (calls.at(leg.strike)?, leg),
            };

            Some(parity_gap(
                call.mid(),
                put.mid(),
                assumptions.spot,
                leg.strike,
                assumptions.risk_free_rate,
                assumptions.time_to_expiry_years,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::price;
    use approx::assert_abs_diff_eq;

    fn market() -> MarketAssumptions {
        MarketAssumptions {
            spot: 25.0,
            risk_free_rate: 0.05,
            time_to_expiry_years: 2.0,
            volatility: 0.5,
        }
    }

    fn priced(contract: Contract) -> PricedContract {
        let pricing = price(&contract, &market()).unwrap();
        PricedContract::new(contract, pricing)
    }

    /// Quote a contract exactly at its model price
    fn fair(strike: f64, option_type: OptionType) -> PricedContract {
        let model = priced(Contract::new(strike, option_type, 0.0, 0.0, 0, 0));
        let p = model.pricing.theoretical_price;
        priced(Contract::new(strike, option_type, p - 0.05, p + 0.05, 1, 1))
    }

    #[test]
    fn test_fair_pair_not_flagged() {
        let mut chain = vec![fair(20.0, OptionType::Call), fair(20.0, OptionType::Put)];
        apply_parity(&mut chain, &market(), &ArbitrageConfig::default());

        for c in &chain {
            assert_abs_diff_eq!(c.pricing.arbitrage_discrepancy.unwrap(), 0.0, epsilon = 1e-9);
            assert!(!c.arbitrage_flag);
        }
    }

    #[test]
    fn test_mispriced_pair_flagged_on_both_legs() {
        let call = fair(20.0, OptionType::Call);
        let rich_call = priced(Contract::new(
            20.0,
            OptionType::Call,
            call.contract.bid_price + 0.5,
            call.contract.ask_price + 0.5,
            1,
            1,
        ));
        let mut chain = vec![rich_call, fair(25.0, OptionType::Call), fair(20.0, OptionType::Put)];

        apply_parity(&mut chain, &market(), &ArbitrageConfig::default());

        assert_abs_diff_eq!(chain[0].pricing.arbitrage_discrepancy.unwrap(), 0.5, epsilon = 1e-9);
        assert!(chain[0].arbitrage_flag);
        assert!(chain[2].arbitrage_flag);

        // No put at 25
        assert!(chain[1].pricing.arbitrage_discrepancy.is_none());
        assert!(!chain[1].arbitrage_flag);
    }

    #[test]
    fn test_literal_mode_never_flags() {
        let call = fair(20.0, OptionType::Call);
        let rich_call = priced(Contract::new(20.0, OptionType::Call, call.contract.bid_price + 5.0, call.contract.ask_price + 5.0, 1, 1));
        let mut chain = vec![rich_call, fair(20.0, OptionType::Put)];

        let config = ArbitrageConfig {
            mode: ParityMode::Literal,
            ..Default::default()
        };
        apply_parity(&mut chain, &market(), &config);

        assert!(chain.iter().all(|c| c.pricing.arbitrage_discrepancy.is_none()));
        assert!(chain.iter().all(|c| !c.arbitrage_flag));
    }

    #[test]
    fn test_first_matching_put_is_used() {
        let mut chain = vec![
            fair(20.0, OptionType::Call),
            fair(20.0, OptionType::Put),
            priced(Contract::new(20.0, OptionType::Put, 50.0, 50.0, 1, 1)),
        ];
        apply_parity(&mut chain, &market(), &ArbitrageConfig::default());

        assert!(!chain[0].arbitrage_flag);
        assert!(chain[2].arbitrage_flag);
    }

    #[test]
    fn test_pairing_ignores_chain_order() {
        // Puts listed in reverse strike order, plus a near-miss strike
        let mut chain = vec![
            fair(20.0, OptionType::Call),
            fair(30.0, OptionType::Call),
            fair(30.0, OptionType::Put),
            fair(25.0 + 1e-6, OptionType::Put),
            fair(20.0 + 1e-12, OptionType::Put),
        ];
        let discrepancies = paired_discrepancies(&chain, &market());

        assert!(discrepancies[0].is_some());
        assert!(discrepancies[1].is_some());
        assert!(discrepancies[2].is_some());
        assert!(discrepancies[3].is_none());
        assert!(discrepancies[4].is_some());

        apply_parity(&mut chain, &market(), &ArbitrageConfig::default());
        assert!(chain.iter().all(|c| !c.arbitrage_flag));
    }

    #[test]
    fn test_large_chain_matches_pairwise_scan() {
        let m = market();
        let mut chain = Vec::new();
        for i in 0..400 {
            let strike = 5.0 + (i % 150) as f64 * 0.5;
            let option_type = if i % 3 == 0 { OptionType::Put } else { OptionType::Call };
            let skew = (i % 7) as f64 * 0.03;
            chain.push(priced(Contract::new(strike, option_type, 1.0 + skew, 1.2 + skew, 1, 1)));
        }

        let expected: Vec<Option<f64>> = chain
            .iter()
            .map(|p| {
                let leg = &p.contract;
                let other = chain
                    .iter()
                    .map(|q| &q.contract)
                    .find(|c| c.option_type == leg.option_type.opposite() && c.strike == leg.strike)?;
                let (call, put) = match leg.option_type {
                    OptionType::Call => (leg, other),
                    OptionType::Put => (other, leg),
                };
                Some(parity_gap(
                    call.mid(),
                    put.mid(),
                    m.spot,
                    leg.strike,
                    m.risk_free_rate,
                    m.time_to_expiry_years,
                ))
            })
            .collect();

        assert_eq!(paired_discrepancies(&chain, &m), expected);
    }
}
