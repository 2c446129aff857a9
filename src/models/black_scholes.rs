//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing (no dividends)
//! - Greeks computation
//! - Risk-neutral probability of finishing in the money
//! - Put-call parity gap
//!
//! These are raw formulas. They assume `spot`, `strike`, `vol` and `time` are
//! strictly positive; input validation lives in `analysis::engine`.

use std::f64::consts::{PI, SQRT_2};
use statrs::function::erf::erfc;
use crate::core::{Greeks, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, vol, time) - vol * time.sqrt()
}

/// Black-Scholes European option price
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> f64 {
    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = (-rate * time).exp();

    match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Black-Scholes Greeks.
///
/// Vega and rho are per unit move (not per 1%). Theta is the simplified
/// `-(S·φ(d1)·σ) / (2√T)` per year: the `r·K·e^(-rT)·Φ(±d2)` carry term is
/// left out, so calls and puts share the same theta.
pub fn greeks(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> Greeks {
    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = (-rate * time).exp();
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let delta = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => -norm_cdf(-d1),
    };

    // Gamma, vega and theta are the same for call and put
    let gamma = pdf_d1 / (spot * vol * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t;
    let theta = -(spot * pdf_d1 * vol) / (2.0 * sqrt_t);

    let rho = match option_type {
        OptionType::Call => strike * time * df * norm_cdf(d2),
        OptionType::Put => -strike * time * df * norm_cdf(-d2),
    };

    Greeks::new(delta, gamma, vega, theta, rho)
}

/// Risk-neutral probability that the underlying finishes above `strike`.
///
/// This is Φ(d2) for both sides; it is not flipped for puts.
pub fn probability_itm(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    norm_cdf(d2(spot, strike, rate, vol, time))
}

/// |C - P - (S - K·e^(-rT))|
pub fn parity_gap(
    call_price: f64,
    put_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
) -> f64 {
    (call_price - put_price - (spot - strike * (-rate * time).exp())).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(1.96), 0.975, epsilon = 1e-3);
        assert_abs_diff_eq!(norm_cdf(-1.96), 0.025, epsilon = 1e-3);
        assert_abs_diff_eq!(norm_cdf(1.0) + norm_cdf(-1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf() {
        assert_abs_diff_eq!(norm_pdf(0.0), 1.0 / (2.0 * PI).sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(norm_pdf(1.0), 0.24197, epsilon = 1e-5);
        assert_abs_diff_eq!(norm_pdf(-1.0), norm_pdf(1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_golden_values() {
        // S=25, K=20, r=5%, σ=50%, T=2y
        let (s, k, r, v, t) = (25.0, 20.0, 0.05, 0.5, 2.0);

        assert_abs_diff_eq!(d1(s, k, r, v, t), 0.810547383, epsilon = 1e-8);
        assert_abs_diff_eq!(d2(s, k, r, v, t), 0.103440602, epsilon = 1e-8);
        assert_abs_diff_eq!(price(s, k, r, v, t, OptionType::Call), 9.985839487, epsilon = 1e-7);
        assert_abs_diff_eq!(price(s, k, r, v, t, OptionType::Put), 3.082587848, epsilon = 1e-7);

        let g = greeks(s, k, r, v, t, OptionType::Call);
        assert!(g.delta > 0.5);
        assert_abs_diff_eq!(g.delta, 0.791187178, epsilon = 1e-8);
        assert_abs_diff_eq!(g.gamma, 0.016248831, epsilon = 1e-8);
        assert_abs_diff_eq!(g.vega, 10.155519508, epsilon = 1e-7);
        assert_abs_diff_eq!(g.theta, -1.269439938, epsilon = 1e-7);
        assert_abs_diff_eq!(g.rho, 19.587679938, epsilon = 1e-7);

        let g = greeks(s, k, r, v, t, OptionType::Put);
        assert_abs_diff_eq!(g.delta, -0.208812822, epsilon = 1e-8);

        assert_abs_diff_eq!(probability_itm(s, k, r, v, t), 0.541193355, epsilon = 1e-8);
    }

    #[test]
    fn test_put_call_parity() {
        let (s, k, r, v, t) = (100.0, 105.0, 0.03, 0.25, 0.75);
        let call = price(s, k, r, v, t, OptionType::Call);
        let put = price(s, k, r, v, t, OptionType::Put);

        assert_abs_diff_eq!(call - put, s - k * (-r * t).exp(), epsilon = 1e-10);
        assert_abs_diff_eq!(parity_gap(call, put, s, k, r, t), 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(parity_gap(call + 0.5, put, s, k, r, t), 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_shared_greeks_match_across_sides() {
        let c = greeks(50.0, 55.0, 0.02, 0.3, 0.5, OptionType::Call);
        let p = greeks(50.0, 55.0, 0.02, 0.3, 0.5, OptionType::Put);

        assert_eq!(c.gamma, p.gamma);
        assert_eq!(c.vega, p.vega);
        assert_eq!(c.theta, p.theta);
        assert_abs_diff_eq!(c.delta - p.delta, 1.0, epsilon = 1e-12);
    }
}
