use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AssetType, FundamentalsSnapshot, PricePoint, SimpleQuote, TimeRange};

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,
}

/// Contract for the market-data collaborator the engine consumes.
///
/// The engine performs no fetching itself; hosts supply an implementation
/// backed by whatever provider they use. `Ok(None)` means the symbol has no
/// data available and is not an error — the orchestrator substitutes its
/// zero/default policies instead.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_fundamentals(
        &self,
        symbol: &str,
    ) -> Result<Option<FundamentalsSnapshot>, MarketDataError>;

    async fn fetch_quote(
        &self,
        symbol: &str,
        asset: AssetType,
    ) -> Result<Option<SimpleQuote>, MarketDataError>;

    async fn fetch_history(
        &self,
        symbol: &str,
        range: TimeRange,
    ) -> Result<Vec<PricePoint>, MarketDataError>;
}
