mod analysis;
mod fundamentals;
mod quote;
mod valuation;

pub use analysis::{
    AnalysisResult, AssetType, CustomMetric, EquityAnalysis, GeneralAnalysis, QuoteAnalysis,
    Rating, Sentiment,
};
pub use fundamentals::{FinancialsPoint, FundamentalsSnapshot};
pub use quote::{PricePoint, SimpleQuote, TimeRange};
pub use valuation::{
    DcfDetail, DcfProjection, DcfResult, EquityMetrics, PegResult, ValuationHistoryPoint,
};
