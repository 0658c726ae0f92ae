use futures::future::join_all;
use tracing::info;

use crate::external::market_provider::MarketDataProvider;
use crate::models::{AnalysisResult, AssetType, TimeRange};
use crate::services::analysis_service::AnalysisService;

/// Analyze a set of equity tickers side by side.
///
/// Every ticker gets its own analysis task and all of them run concurrently;
/// results come back in input order. A failure for one ticker surfaces as
/// that ticker's error result and never aborts the rest of the batch.
pub async fn compare_symbols<P>(
    service: &AnalysisService,
    provider: &P,
    symbols: &[String],
    range: TimeRange,
) -> Vec<AnalysisResult>
where
    P: MarketDataProvider + ?Sized,
{
    if symbols.is_empty() {
        return Vec::new();
    }

    info!("Comparing {} tickers", symbols.len());

    let tasks = symbols
        .iter()
        .map(|symbol| service.analyze_symbol(provider, symbol.trim(), AssetType::Stocks, range));

    join_all(tasks).await
}
