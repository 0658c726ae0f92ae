use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::fundamentals::FundamentalsSnapshot;
use crate::models::quote::{PricePoint, SimpleQuote};
use crate::models::valuation::{EquityMetrics, ValuationHistoryPoint};

/// Asset class the analysis request is keyed by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stocks,
    Bonds,
    Indices,
    Commodities,
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::Stocks => write!(f, "stocks"),
            AssetType::Bonds => write!(f, "bonds"),
            AssetType::Indices => write!(f, "indices"),
            AssetType::Commodities => write!(f, "commodities"),
        }
    }
}

impl std::str::FromStr for AssetType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stocks" => Ok(AssetType::Stocks),
            "bonds" => Ok(AssetType::Bonds),
            "indices" => Ok(AssetType::Indices),
            "commodities" => Ok(AssetType::Commodities),
            other => Err(EngineError::Validation(format!(
                "unknown asset type: {other}"
            ))),
        }
    }
}

/// Qualitative market direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Bullish => write!(f, "Bullish"),
            Sentiment::Bearish => write!(f, "Bearish"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Qualitative strength rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rating {
    Strong,
    Weak,
    Stable,
}

/// A single headline figure a classifier chooses to surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomMetric {
    pub label: String,
    pub value: String,
    pub description: String,
}

/// Heuristic classification output for a non-equity asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralAnalysis {
    pub sentiment: Sentiment,
    pub rating: Rating,

    /// 0-100 composite score
    pub score: f64,

    /// Human-readable observations, in the order the rules fired
    pub key_points: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metric: Option<CustomMetric>,
}

/// Equity analysis payload: the snapshot it was computed from, price
/// history, and the full metrics bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityAnalysis {
    pub data: Option<FundamentalsSnapshot>,
    pub history: Vec<PricePoint>,
    pub metrics: EquityMetrics,
    pub valuation_history: Vec<ValuationHistoryPoint>,
    pub analyzed_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Non-equity analysis payload: the quote and its heuristic classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteAnalysis {
    pub data: Option<SimpleQuote>,
    pub history: Vec<PricePoint>,
    pub analysis: Option<GeneralAnalysis>,
    pub analyzed_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The unified analysis record, discriminated by asset type so an equity
/// result can only carry equity metrics and a quote result only a
/// classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "asset_type", rename_all = "lowercase")]
pub enum AnalysisResult {
    Stocks(EquityAnalysis),
    Bonds(QuoteAnalysis),
    Indices(QuoteAnalysis),
    Commodities(QuoteAnalysis),
}

impl AnalysisResult {
    pub fn equity(
        data: Option<FundamentalsSnapshot>,
        history: Vec<PricePoint>,
        metrics: EquityMetrics,
        valuation_history: Vec<ValuationHistoryPoint>,
    ) -> Self {
        AnalysisResult::Stocks(EquityAnalysis {
            data,
            history,
            metrics,
            valuation_history,
            analyzed_at: Utc::now(),
            error: None,
        })
    }

    /// Wrap a quote payload in the variant matching `asset`. Equities take
    /// the fundamentals path, so a stray `Stocks` here becomes a tagged
    /// failure rather than a mislabeled result.
    pub fn non_equity(
        asset: AssetType,
        data: Option<SimpleQuote>,
        history: Vec<PricePoint>,
        analysis: Option<GeneralAnalysis>,
    ) -> Self {
        let payload = QuoteAnalysis {
            data,
            history,
            analysis,
            analyzed_at: Utc::now(),
            error: None,
        };
        match asset {
            AssetType::Bonds => AnalysisResult::Bonds(payload),
            AssetType::Indices => AnalysisResult::Indices(payload),
            AssetType::Commodities => AnalysisResult::Commodities(payload),
            AssetType::Stocks => {
                Self::failed(AssetType::Stocks, "equity symbols take the fundamentals path")
            }
        }
    }

    /// The tagged failure value: zeroed metrics plus an error string, never
    /// a propagated fault.
    pub fn failed(asset: AssetType, message: impl Into<String>) -> Self {
        let message = message.into();
        let quote_payload = |message: String| QuoteAnalysis {
            data: None,
            history: Vec::new(),
            analysis: None,
            analyzed_at: Utc::now(),
            error: Some(message),
        };
        match asset {
            AssetType::Stocks => AnalysisResult::Stocks(EquityAnalysis {
                data: None,
                history: Vec::new(),
                metrics: EquityMetrics::zeroed(),
                valuation_history: Vec::new(),
                analyzed_at: Utc::now(),
                error: Some(message),
            }),
            AssetType::Bonds => AnalysisResult::Bonds(quote_payload(message)),
            AssetType::Indices => AnalysisResult::Indices(quote_payload(message)),
            AssetType::Commodities => AnalysisResult::Commodities(quote_payload(message)),
        }
    }

    pub fn asset_type(&self) -> AssetType {
        match self {
            AnalysisResult::Stocks(_) => AssetType::Stocks,
            AnalysisResult::Bonds(_) => AssetType::Bonds,
            AnalysisResult::Indices(_) => AssetType::Indices,
            AnalysisResult::Commodities(_) => AssetType::Commodities,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisResult::Stocks(e) => e.error.as_deref(),
            AnalysisResult::Bonds(q) | AnalysisResult::Indices(q) | AnalysisResult::Commodities(q) => {
                q.error.as_deref()
            }
        }
    }
}
