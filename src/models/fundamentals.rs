use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A point-in-time snapshot of the quote and fundamentals fields the
/// valuation engine consumes for an equity.
///
/// The engine never fetches this itself; the market-data collaborator hands
/// it over fully assembled. Missing upstream fields arrive as `None` (for the
/// optional ones) or zero, and each downstream formula defines its own
/// fallback for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    pub symbol: String,

    /// Last traded price. Ratio math expects this to be positive.
    pub price: f64,

    /// Trailing twelve-month earnings per share; may be negative.
    pub eps: f64,

    /// Book value per share; may be negative for distressed balance sheets.
    pub book_value_per_share: f64,

    pub market_cap: f64,
    pub net_income_to_common: f64,
    pub operating_cash_flow: f64,

    /// Usually reported negative (cash outflow); the engine normalizes sign.
    pub capital_expenditures: f64,

    pub depreciation_and_amortization: f64,

    /// Reported trailing free cash flow, when the provider has it.
    #[serde(default)]
    pub free_cash_flow: Option<f64>,

    /// Annual dividend per share in currency units
    pub dividend_rate: f64,

    /// Dividend yield in percent
    pub dividend_yield: f64,

    /// Year-over-year earnings growth, decimal (0.15 for 15%)
    #[serde(default)]
    pub earnings_growth: Option<f64>,

    /// Year-over-year revenue growth, decimal
    #[serde(default)]
    pub revenue_growth: Option<f64>,

    #[serde(default)]
    pub beta: Option<f64>,

    pub sector: String,

    /// Per-fiscal-year reported figures, oldest first, for the historical
    /// valuation series.
    #[serde(default)]
    pub financials_history: Vec<FinancialsPoint>,
}

impl FundamentalsSnapshot {
    /// Shares outstanding derived from market cap and price.
    ///
    /// Not a reported field, so the derivation is guarded: a zero or negative
    /// price (or market cap) makes the division meaningless and yields `None`
    /// rather than infinity.
    pub fn shares_outstanding(&self) -> Option<f64> {
        if self.price > 0.0 && self.market_cap > 0.0 {
            Some(self.market_cap / self.price)
        } else {
            None
        }
    }
}

/// One fiscal year of reported per-share figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialsPoint {
    pub date: NaiveDate,
    pub eps: f64,
    pub book_value_per_share: f64,
}
