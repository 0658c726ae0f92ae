pub mod config;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod services;

pub use config::EngineConfig;
pub use errors::EngineError;
pub use external::market_provider::{MarketDataError, MarketDataProvider};
pub use models::{
    AnalysisResult, AssetType, CustomMetric, DcfDetail, DcfProjection, DcfResult, EquityAnalysis,
    EquityMetrics, FinancialsPoint, FundamentalsSnapshot, GeneralAnalysis, PegResult, PricePoint,
    QuoteAnalysis, Rating, Sentiment, SimpleQuote, TimeRange, ValuationHistoryPoint,
};
pub use services::analysis_service::AnalysisService;
pub use services::comparison_service::compare_symbols;
