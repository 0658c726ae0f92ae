//! Orchestrator integration tests.
//!
//! Drives `analyze_symbol` and `compare_symbols` end to end against a mock
//! market-data provider, covering the happy path, data-unavailable, and
//! provider-failure behavior at the analysis boundary.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use intrinsica_engine::{
    compare_symbols, AnalysisResult, AnalysisService, AssetType, FundamentalsSnapshot,
    MarketDataError, MarketDataProvider, PricePoint, Sentiment, SimpleQuote, TimeRange,
};

// ---------------------------------------------------------------------------
// Mock provider
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MockProvider {
    fundamentals: HashMap<String, FundamentalsSnapshot>,
    quotes: HashMap<String, SimpleQuote>,
    history: HashMap<String, Vec<PricePoint>>,
    failing: Vec<String>,
    history_failing: Vec<String>,
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    async fn fetch_fundamentals(
        &self,
        symbol: &str,
    ) -> Result<Option<FundamentalsSnapshot>, MarketDataError> {
        if self.failing.iter().any(|s| s == symbol) {
            return Err(MarketDataError::Network("connection refused".to_string()));
        }
        Ok(self.fundamentals.get(symbol).cloned())
    }

    async fn fetch_quote(
        &self,
        symbol: &str,
        _asset: AssetType,
    ) -> Result<Option<SimpleQuote>, MarketDataError> {
        if self.failing.iter().any(|s| s == symbol) {
            return Err(MarketDataError::RateLimited);
        }
        Ok(self.quotes.get(symbol).cloned())
    }

    async fn fetch_history(
        &self,
        symbol: &str,
        _range: TimeRange,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        if self.history_failing.iter().any(|s| s == symbol) {
            return Err(MarketDataError::BadResponse("truncated body".to_string()));
        }
        Ok(self.history.get(symbol).cloned().unwrap_or_default())
    }
}

fn acme_snapshot() -> FundamentalsSnapshot {
    FundamentalsSnapshot {
        symbol: "ACME".to_string(),
        price: 100.0,
        eps: 5.0,
        book_value_per_share: 20.0,
        market_cap: 1_000_000_000.0,
        net_income_to_common: 50_000_000.0,
        operating_cash_flow: 80_000_000.0,
        capital_expenditures: -20_000_000.0,
        depreciation_and_amortization: 10_000_000.0,
        free_cash_flow: Some(60_000_000.0),
        dividend_rate: 2.0,
        dividend_yield: 2.0,
        earnings_growth: Some(0.12),
        revenue_growth: Some(0.08),
        beta: Some(1.0),
        sector: "Industrials".to_string(),
        financials_history: Vec::new(),
    }
}

fn daily_closes(symbol: &str, closes: &[f64]) -> (String, Vec<PricePoint>) {
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64),
            close,
        })
        .collect();
    (symbol.to_string(), points)
}

// ---------------------------------------------------------------------------
// Equity path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_stock_symbol_end_to_end() {
    let mut provider = MockProvider::default();
    provider
        .fundamentals
        .insert("ACME".to_string(), acme_snapshot());
    let (symbol, points) = daily_closes("ACME", &[98.0, 99.5, 100.0]);
    provider.history.insert(symbol, points);

    let service = AnalysisService::new();
    let result = service
        .analyze_symbol(&provider, "ACME", AssetType::Stocks, TimeRange::OneYear)
        .await;

    assert_eq!(result.asset_type(), AssetType::Stocks);
    assert!(result.error().is_none());

    let AnalysisResult::Stocks(equity) = result else {
        panic!("expected equity variant");
    };
    assert_eq!(equity.history.len(), 3);
    assert_eq!(equity.data.as_ref().unwrap().symbol, "ACME");

    // sqrt(22.5 * 5 * 20)
    assert!((equity.metrics.graham_number - 47.43).abs() < 0.01);
    // Reported FCF 60M over 10M derived shares, growing at 12%, discounted at 10.5%
    assert!(equity.metrics.dcf_value > 0.0);
    let detail = equity.metrics.dcf_detail.as_ref().unwrap();
    assert_eq!(detail.projections.len(), 5);
    assert_eq!(detail.used_growth_rate, 0.12);
}

#[tokio::test]
async fn unknown_stock_yields_zeroed_metrics_without_error() {
    let provider = MockProvider::default();
    let service = AnalysisService::new();

    let result = service
        .analyze_symbol(&provider, "NOPE", AssetType::Stocks, TimeRange::OneYear)
        .await;

    assert!(result.error().is_none());
    let AnalysisResult::Stocks(equity) = result else {
        panic!("expected equity variant");
    };
    assert!(equity.data.is_none());
    assert_eq!(equity.metrics.graham_number, 0.0);
    assert_eq!(equity.metrics.dcf_value, 0.0);
}

#[tokio::test]
async fn provider_failure_becomes_tagged_error_result() {
    let provider = MockProvider {
        failing: vec!["DOWN".to_string()],
        ..Default::default()
    };
    let service = AnalysisService::new();

    let result = service
        .analyze_symbol(&provider, "DOWN", AssetType::Stocks, TimeRange::OneYear)
        .await;

    assert_eq!(result.asset_type(), AssetType::Stocks);
    assert!(result.error().unwrap().contains("connection refused"));
    let AnalysisResult::Stocks(equity) = result else {
        panic!("expected equity variant");
    };
    assert_eq!(equity.metrics.dcf_value, 0.0);
    assert!(equity.metrics.dcf_detail.is_none());
}

#[tokio::test]
async fn history_failure_leaves_series_empty_but_metrics_intact() {
    let mut provider = MockProvider::default();
    provider
        .fundamentals
        .insert("ACME".to_string(), acme_snapshot());
    provider.history_failing.push("ACME".to_string());

    let service = AnalysisService::new();
    let result = service
        .analyze_symbol(&provider, "ACME", AssetType::Stocks, TimeRange::FiveYear)
        .await;

    assert!(result.error().is_none());
    let AnalysisResult::Stocks(equity) = result else {
        panic!("expected equity variant");
    };
    assert!(equity.history.is_empty());
    assert!(equity.metrics.graham_number > 0.0);
}

// ---------------------------------------------------------------------------
// Non-equity paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_bond_symbol_classifies_real_yield() {
    let mut provider = MockProvider::default();
    provider.quotes.insert(
        "^TNX".to_string(),
        SimpleQuote {
            symbol: "^TNX".to_string(),
            name: "CBOE 10-Year Treasury Yield".to_string(),
            price: 5.0,
            percent_change: 0.4,
            yield_pct: 5.0,
        },
    );

    let service = AnalysisService::new();
    let result = service
        .analyze_symbol(&provider, "^TNX", AssetType::Bonds, TimeRange::OneYear)
        .await;

    assert_eq!(result.asset_type(), AssetType::Bonds);
    let AnalysisResult::Bonds(quote_analysis) = result else {
        panic!("expected bond variant");
    };
    let analysis = quote_analysis.analysis.unwrap();
    assert_eq!(analysis.sentiment, Sentiment::Bullish);
    assert_eq!(analysis.score, 80.0);
}

#[tokio::test]
async fn unknown_index_yields_no_analysis_and_no_error() {
    let provider = MockProvider::default();
    let service = AnalysisService::new();

    let result = service
        .analyze_symbol(&provider, "^GSPC", AssetType::Indices, TimeRange::OneYear)
        .await;

    assert!(result.error().is_none());
    let AnalysisResult::Indices(quote_analysis) = result else {
        panic!("expected index variant");
    };
    assert!(quote_analysis.data.is_none());
    assert!(quote_analysis.analysis.is_none());
}

#[tokio::test]
async fn commodity_result_serializes_with_asset_tag() {
    let mut provider = MockProvider::default();
    provider.quotes.insert(
        "GC=F".to_string(),
        SimpleQuote {
            symbol: "GC=F".to_string(),
            name: "Gold Futures".to_string(),
            price: 2400.0,
            percent_change: -2.5,
            yield_pct: 0.0,
        },
    );

    let service = AnalysisService::new();
    let result = service
        .analyze_symbol(&provider, "GC=F", AssetType::Commodities, TimeRange::OneYear)
        .await;

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["asset_type"], "commodities");
    assert_eq!(json["analysis"]["sentiment"], "Bearish");
    assert_eq!(json["analysis"]["rating"], "Stable");
    // -2.5% move trips the volatility alert
    assert_eq!(json["analysis"]["key_points"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Comparison fan-out
// ---------------------------------------------------------------------------

#[tokio::test]
async fn compare_symbols_preserves_order_and_isolates_failures() {
    let mut provider = MockProvider::default();
    provider
        .fundamentals
        .insert("ACME".to_string(), acme_snapshot());
    let mut other = acme_snapshot();
    other.symbol = "WIDGET".to_string();
    other.eps = -1.0;
    provider.fundamentals.insert("WIDGET".to_string(), other);
    provider.failing.push("DOWN".to_string());

    let service = AnalysisService::new();
    let symbols = vec![
        "ACME".to_string(),
        "DOWN".to_string(),
        "WIDGET".to_string(),
    ];
    let results = compare_symbols(&service, &provider, &symbols, TimeRange::OneYear).await;

    assert_eq!(results.len(), 3);
    assert!(results[0].error().is_none());
    assert!(results[1].error().is_some());
    assert!(results[2].error().is_none());

    let AnalysisResult::Stocks(widget) = &results[2] else {
        panic!("expected equity variant");
    };
    assert_eq!(widget.data.as_ref().unwrap().symbol, "WIDGET");
    // Negative EPS: Graham number defined as zero
    assert_eq!(widget.metrics.graham_number, 0.0);
}

#[tokio::test]
async fn compare_symbols_empty_input() {
    let provider = MockProvider::default();
    let service = AnalysisService::new();
    let results = compare_symbols(&service, &provider, &[], TimeRange::OneYear).await;
    assert!(results.is_empty());
}
