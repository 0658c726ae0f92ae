use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The minimal quote shape shared by bonds, indices, and commodities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,

    /// Daily change in percent (1.25 for +1.25%)
    pub percent_change: f64,

    /// Quoted yield in percent. Only meaningful for bond tickers; providers
    /// report 0 for everything else.
    #[serde(rename = "yield", default)]
    pub yield_pct: f64,
}

// Represents a historical closing price for a given ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// History window requested from the market-data collaborator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYear,
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::OneYear => write!(f, "1y"),
            TimeRange::FiveYear => write!(f, "5y"),
        }
    }
}
