use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One projected year of the five-year DCF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcfProjection {
    /// Projection year, 1 through 5
    pub year: u32,

    /// Projected free cash flow per share for that year
    pub fcf: f64,

    /// Present value of that cash flow at the discount rate
    pub discounted_value: f64,
}

/// Output of the five-year DCF with terminal value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcfResult {
    /// Total intrinsic value: discounted projections plus discounted terminal value
    pub value: f64,

    /// Year-ascending projections (empty for the degenerate zero result)
    pub projections: Vec<DcfProjection>,

    pub terminal_value: f64,
    pub present_terminal_value: f64,
}

impl DcfResult {
    pub fn zero() -> Self {
        Self {
            value: 0.0,
            projections: Vec::new(),
            terminal_value: 0.0,
            present_terminal_value: 0.0,
        }
    }
}

/// DCF output annotated with the assumptions that produced it, for display
/// and audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcfDetail {
    pub value: f64,
    pub projections: Vec<DcfProjection>,
    pub terminal_value: f64,
    pub present_terminal_value: f64,
    pub used_growth_rate: f64,
    pub used_discount_rate: f64,
}

impl DcfDetail {
    pub fn from_result(result: DcfResult, growth_rate: f64, discount_rate: f64) -> Self {
        Self {
            value: result.value,
            projections: result.projections,
            terminal_value: result.terminal_value,
            present_terminal_value: result.present_terminal_value,
            used_growth_rate: growth_rate,
            used_discount_rate: discount_rate,
        }
    }
}

/// Peter Lynch fair-value output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PegResult {
    /// Fair P/E multiple, equal to the growth rate as a whole-number percent
    pub fair_pe: f64,

    /// EPS times the fair multiple
    pub fair_value: f64,

    /// Current P/E divided by the growth percent
    pub peg_ratio: f64,
}

impl PegResult {
    pub fn zero() -> Self {
        Self {
            fair_pe: 0.0,
            fair_value: 0.0,
            peg_ratio: 0.0,
        }
    }
}

/// The full equity valuation bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityMetrics {
    pub graham_number: f64,
    pub dcf_value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dcf_detail: Option<DcfDetail>,

    /// Owner earnings yield in percent
    pub owner_earnings_yield: f64,

    pub peg: PegResult,
    pub ddm_value: f64,
}

impl EquityMetrics {
    /// The all-zero bundle used when analysis fails or data is unavailable.
    pub fn zeroed() -> Self {
        Self {
            graham_number: 0.0,
            dcf_value: 0.0,
            dcf_detail: None,
            owner_earnings_yield: 0.0,
            peg: PegResult::zero(),
            ddm_value: 0.0,
        }
    }
}

/// Graham number for one fiscal year, derived from reported per-share
/// figures. Feeds the historical valuation chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationHistoryPoint {
    pub date: NaiveDate,
    pub graham_number: f64,
}
