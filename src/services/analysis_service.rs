use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::external::market_provider::MarketDataProvider;
use crate::models::{
    AnalysisResult, AssetType, DcfDetail, EquityMetrics, FundamentalsSnapshot, GeneralAnalysis,
    PricePoint, SimpleQuote, TimeRange, ValuationHistoryPoint,
};
use crate::services::{classifier_service, formulas};

/// The analysis orchestrator: derives assumptions from a snapshot, runs the
/// formula chain in order, and packages the unified result per asset type.
pub struct AnalysisService {
    config: EngineConfig,
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisService {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Pure computation
    // -----------------------------------------------------------------------

    /// Run the full equity formula chain against a fundamentals snapshot.
    pub fn analyze_equity(&self, snapshot: &FundamentalsSnapshot) -> EquityMetrics {
        let cfg = &self.config;

        let graham_number =
            formulas::graham_number(snapshot.eps, snapshot.book_value_per_share);

        let assumed_growth = self.assumed_growth_rate(snapshot);
        let discount_rate = formulas::capm_discount_rate(
            snapshot.beta.unwrap_or(cfg.default_beta),
            cfg.risk_free_rate,
            cfg.equity_risk_premium,
        );

        // Negative per-share FCF is floored to zero before projecting; a
        // negative intrinsic value is not a meaningful display quantity.
        let fcf_per_share = self.fcf_per_share(snapshot).max(0.0);
        let dcf = formulas::simple_dcf(
            fcf_per_share,
            assumed_growth,
            discount_rate,
            cfg.terminal_growth_rate,
            cfg.min_terminal_spread,
        );

        let owner_earnings_yield = formulas::owner_earnings_yield(
            snapshot.net_income_to_common,
            snapshot.depreciation_and_amortization,
            snapshot.capital_expenditures,
            snapshot.market_cap,
        );

        let peg_growth = resolve_rate(&[snapshot.earnings_growth], assumed_growth);
        let peg = formulas::peg_fair_value(snapshot.eps, peg_growth, snapshot.price);

        let ddm_value = formulas::ddm_value(
            snapshot.dividend_rate,
            cfg.ddm_assumed_growth,
            cfg.ddm_required_return,
            cfg.ddm_max_growth,
        );

        EquityMetrics {
            graham_number,
            dcf_value: dcf.value,
            dcf_detail: Some(DcfDetail::from_result(dcf, assumed_growth, discount_rate)),
            owner_earnings_yield,
            peg,
            ddm_value,
        }
    }

    /// Per-fiscal-year Graham numbers for the historical valuation chart.
    pub fn valuation_history(
        &self,
        snapshot: &FundamentalsSnapshot,
    ) -> Vec<ValuationHistoryPoint> {
        snapshot
            .financials_history
            .iter()
            .map(|point| ValuationHistoryPoint {
                date: point.date,
                graham_number: formulas::graham_number(point.eps, point.book_value_per_share),
            })
            .collect()
    }

    /// Run the heuristic classifier matching the asset type. Equities have
    /// no classifier; they take the formula chain instead.
    pub fn classify_quote(
        &self,
        asset: AssetType,
        quote: &SimpleQuote,
    ) -> Option<GeneralAnalysis> {
        match asset {
            AssetType::Stocks => None,
            AssetType::Bonds => Some(classifier_service::classify_bond(quote, &self.config)),
            AssetType::Indices => Some(classifier_service::classify_index(quote)),
            AssetType::Commodities => Some(classifier_service::classify_commodity(quote)),
        }
    }

    // -----------------------------------------------------------------------
    // Assumption derivation
    // -----------------------------------------------------------------------

    /// Growth assumption: earnings growth, else revenue growth, else the
    /// configured default, capped at the configured ceiling.
    fn assumed_growth_rate(&self, snapshot: &FundamentalsSnapshot) -> f64 {
        let raw = resolve_rate(
            &[snapshot.earnings_growth, snapshot.revenue_growth],
            self.config.default_growth_rate,
        );
        raw.min(self.config.max_growth_rate)
    }

    /// Free cash flow per share: reported FCF when available, else operating
    /// cash flow minus |capex|, divided by derived shares outstanding.
    ///
    /// Returns 0 when shares outstanding cannot be derived (zero price or
    /// market cap), keeping the DCF degenerate instead of infinite.
    fn fcf_per_share(&self, snapshot: &FundamentalsSnapshot) -> f64 {
        let Some(shares) = snapshot.shares_outstanding() else {
            return 0.0;
        };
        let derived =
            snapshot.operating_cash_flow - snapshot.capital_expenditures.abs();
        let fcf = resolve_rate(&[snapshot.free_cash_flow], derived);
        fcf / shares
    }

    // -----------------------------------------------------------------------
    // Orchestration boundary
    // -----------------------------------------------------------------------

    /// Analyze one symbol end to end: fetch the quote and the price history
    /// as independent tasks, join them, and run the pure computation.
    ///
    /// This is the only layer that surfaces errors, and it does so by
    /// returning a tagged failure value — a provider fault on the primary
    /// fetch becomes a result with zeroed metrics and an error string, and a
    /// history fault just leaves the series empty. Nothing propagates as
    /// `Err` past this call.
    pub async fn analyze_symbol<P>(
        &self,
        provider: &P,
        symbol: &str,
        asset: AssetType,
        range: TimeRange,
    ) -> AnalysisResult
    where
        P: MarketDataProvider + ?Sized,
    {
        info!("Analyzing {} as {}", symbol, asset);

        if asset == AssetType::Stocks {
            let (snapshot, history) = tokio::join!(
                provider.fetch_fundamentals(symbol),
                provider.fetch_history(symbol, range),
            );

            let history = history_or_empty(symbol, history);

            return match snapshot {
                Err(e) => {
                    warn!("Fundamentals fetch failed for {}: {}", symbol, e);
                    AnalysisResult::failed(asset, EngineError::from(e).to_string())
                }
                Ok(None) => AnalysisResult::equity(
                    None,
                    history,
                    EquityMetrics::zeroed(),
                    Vec::new(),
                ),
                Ok(Some(snapshot)) => {
                    let metrics = self.analyze_equity(&snapshot);
                    let valuation_history = self.valuation_history(&snapshot);
                    AnalysisResult::equity(Some(snapshot), history, metrics, valuation_history)
                }
            };
        }

        let (quote, history) = tokio::join!(
            provider.fetch_quote(symbol, asset),
            provider.fetch_history(symbol, range),
        );

        let history = history_or_empty(symbol, history);

        match quote {
            Err(e) => {
                warn!("Quote fetch failed for {}: {}", symbol, e);
                AnalysisResult::failed(asset, EngineError::from(e).to_string())
            }
            Ok(None) => AnalysisResult::non_equity(asset, None, history, None),
            Ok(Some(quote)) => {
                let analysis = self.classify_quote(asset, &quote);
                AnalysisResult::non_equity(asset, Some(quote), history, analysis)
            }
        }
    }
}

/// Ordered fallback resolution for optional rate fields.
///
/// Picks the first candidate that is present, finite, and non-zero; quote
/// feeds report zero for fields they could not populate, so zero counts as
/// missing here.
fn resolve_rate(candidates: &[Option<f64>], default: f64) -> f64 {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(default)
}

fn history_or_empty(
    symbol: &str,
    result: Result<Vec<PricePoint>, crate::external::market_provider::MarketDataError>,
) -> Vec<PricePoint> {
    match result {
        Ok(points) => points,
        Err(e) => {
            warn!("History fetch failed for {}: {}", symbol, e);
            Vec::new()
        }
    }
}
