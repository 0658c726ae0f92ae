use crate::models::{DcfProjection, DcfResult, PegResult};

/// Years of explicit projection before the terminal value takes over.
const PROJECTION_YEARS: u32 = 5;

/// Benjamin Graham's fair-value estimate: sqrt(22.5 * EPS * BVPS).
///
/// Defined as 0 when either input is non-positive; a negative product has no
/// real square root and an unprofitable company has no Graham value.
pub fn graham_number(eps: f64, bvps: f64) -> f64 {
    if eps <= 0.0 || bvps <= 0.0 {
        return 0.0;
    }
    (22.5 * eps * bvps).sqrt()
}

/// CAPM required return: risk-free rate plus beta-scaled equity risk premium.
pub fn capm_discount_rate(beta: f64, risk_free_rate: f64, equity_risk_premium: f64) -> f64 {
    risk_free_rate + beta * equity_risk_premium
}

/// Five-year DCF with a perpetual-growth terminal value.
///
/// For year i = 1..5, projects `fcf_per_share * (1+growth)^i` and discounts
/// it back at `discount`. The terminal value capitalizes the fifth-year cash
/// flow at `discount - terminal_growth`, with the spread floored at
/// `min_terminal_spread` so the denominator can never reach zero.
///
/// A non-positive discount rate makes the model undefined and returns the
/// degenerate zero result instead of NaN or infinity.
pub fn simple_dcf(
    fcf_per_share: f64,
    growth: f64,
    discount: f64,
    terminal_growth: f64,
    min_terminal_spread: f64,
) -> DcfResult {
    if discount <= 0.0 {
        return DcfResult::zero();
    }

    let mut projections = Vec::with_capacity(PROJECTION_YEARS as usize);
    let mut total = 0.0;

    for year in 1..=PROJECTION_YEARS {
        let future_fcf = fcf_per_share * (1.0 + growth).powi(year as i32);
        let discounted_value = future_fcf / (1.0 + discount).powi(year as i32);
        total += discounted_value;
        projections.push(DcfProjection {
            year,
            fcf: future_fcf,
            discounted_value,
        });
    }

    let last_fcf = projections.last().map(|p| p.fcf).unwrap_or(0.0);
    let spread = (discount - terminal_growth).max(min_terminal_spread);
    let terminal_value = last_fcf * (1.0 + terminal_growth) / spread;
    let present_terminal_value =
        terminal_value / (1.0 + discount).powi(PROJECTION_YEARS as i32);

    DcfResult {
        value: total + present_terminal_value,
        projections,
        terminal_value,
        present_terminal_value,
    }
}

/// Owner earnings yield in percent: (net income + D&A - |capex|) / market cap.
///
/// Capex sign conventions differ between providers (cash-flow statements
/// report it negative), so the absolute value is taken before subtracting.
pub fn owner_earnings_yield(
    net_income: f64,
    depreciation: f64,
    capex: f64,
    market_cap: f64,
) -> f64 {
    if market_cap <= 0.0 {
        return 0.0;
    }
    let owner_earnings = net_income + depreciation - capex.abs();
    owner_earnings / market_cap * 100.0
}

/// Peter Lynch fair value: fair P/E equals the growth rate as a whole-number
/// percent. Returns the all-zero result when eps or growth is non-positive.
pub fn peg_fair_value(eps: f64, growth_rate: f64, price: f64) -> PegResult {
    if eps <= 0.0 || growth_rate <= 0.0 {
        return PegResult::zero();
    }

    let growth_pct = growth_rate * 100.0;
    let fair_pe = growth_pct;
    let fair_value = eps * fair_pe;
    let current_pe = price / eps;

    PegResult {
        fair_pe,
        fair_value,
        peg_ratio: current_pe / growth_pct,
    }
}

/// Gordon growth dividend discount model: D1 / (r - g).
///
/// Growth is capped at `max_growth` before use; the perpetuity only holds
/// for long-run-sustainable rates. Returns 0 when there is no dividend or
/// when the capped growth still meets the required return.
pub fn ddm_value(
    dividend_rate: f64,
    growth_rate: f64,
    required_return: f64,
    max_growth: f64,
) -> f64 {
    if dividend_rate <= 0.0 {
        return 0.0;
    }

    let stable_growth = growth_rate.min(max_growth);
    if stable_growth >= required_return {
        return 0.0;
    }

    dividend_rate * (1.0 + stable_growth) / (required_return - stable_growth)
}
