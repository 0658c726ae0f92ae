use thiserror::Error;

use crate::external::market_provider::MarketDataError;

/// Internal error taxonomy for the analysis orchestrator.
///
/// These never cross the public analysis boundary: `analyze_symbol` converts
/// them into an `AnalysisResult` carrying an error string and zeroed metrics.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("market data error: {0}")]
    Provider(#[from] MarketDataError),

    #[error("validation error: {0}")]
    Validation(String),
}

impl From<String> for EngineError {
    fn from(value: String) -> Self {
        EngineError::Validation(value)
    }
}
