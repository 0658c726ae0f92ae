use crate::config::EngineConfig;
use crate::models::{CustomMetric, GeneralAnalysis, Rating, Sentiment, SimpleQuote};

/// Real yield above this is attractive, in percent
const ATTRACTIVE_REAL_YIELD: f64 = 1.5;

/// Daily move beyond this is worth a momentum observation, in percent
const MOMENTUM_THRESHOLD: f64 = 1.0;

/// Daily move beyond this flags commodity volatility, in percent
const VOLATILITY_THRESHOLD: f64 = 2.0;

/// Classify a bond quote by its inflation-adjusted yield.
///
/// Sentiment follows the real yield (nominal minus the configured inflation
/// assumption); a sharp daily move adds a momentum observation on top.
pub fn classify_bond(quote: &SimpleQuote, config: &EngineConfig) -> GeneralAnalysis {
    let real_yield = quote.yield_pct - config.inflation_assumption;

    let (sentiment, rating, mut key_points) = if real_yield > ATTRACTIVE_REAL_YIELD {
        (
            Sentiment::Bullish,
            Rating::Strong,
            vec![format!(
                "Real yield of {real_yield:.2}% is attractive relative to inflation"
            )],
        )
    } else if real_yield < 0.0 {
        (
            Sentiment::Bearish,
            Rating::Weak,
            vec![format!(
                "Negative real yield of {real_yield:.2}% erodes purchasing power"
            )],
        )
    } else {
        (
            Sentiment::Neutral,
            Rating::Stable,
            vec![format!(
                "Real yield of {real_yield:.2}% is low but still positive"
            )],
        )
    };

    if quote.percent_change > MOMENTUM_THRESHOLD {
        key_points.push(format!(
            "Yields moving up sharply today ({:+.2}%)",
            quote.percent_change
        ));
    } else if quote.percent_change < -MOMENTUM_THRESHOLD {
        key_points.push(format!(
            "Yields falling sharply today ({:+.2}%)",
            quote.percent_change
        ));
    }

    GeneralAnalysis {
        sentiment,
        rating,
        score: ((real_yield + 2.0) * 20.0).clamp(0.0, 100.0),
        key_points,
        custom_metric: Some(CustomMetric {
            label: "Real Yield".to_string(),
            value: format!("{real_yield:.2}%"),
            description: "Nominal yield minus assumed inflation".to_string(),
        }),
    }
}

/// Classify an index quote by daily momentum alone.
pub fn classify_index(quote: &SimpleQuote) -> GeneralAnalysis {
    let change = quote.percent_change;

    let (sentiment, rating, key_points) = if change > MOMENTUM_THRESHOLD {
        (
            Sentiment::Bullish,
            Rating::Strong,
            vec![format!("Broad market momentum is positive ({change:+.2}% today)")],
        )
    } else if change < -MOMENTUM_THRESHOLD {
        (
            Sentiment::Bearish,
            Rating::Weak,
            vec![format!("Broad market selling pressure ({change:+.2}% today)")],
        )
    } else {
        (
            Sentiment::Neutral,
            Rating::Stable,
            vec![format!("Market trading sideways ({change:+.2}% today)")],
        )
    };

    GeneralAnalysis {
        sentiment,
        rating,
        score: momentum_score(change),
        key_points,
        custom_metric: Some(CustomMetric {
            label: "Market Mood".to_string(),
            value: sentiment.to_string(),
            description: "Sentiment derived from the daily move".to_string(),
        }),
    }
}

/// Classify a commodity quote by the sign of its daily move.
///
/// Commodities are treated as cyclical, so the rating stays `Stable`; an
/// outsized move adds a volatility observation instead of changing it.
pub fn classify_commodity(quote: &SimpleQuote) -> GeneralAnalysis {
    let change = quote.percent_change;

    let sentiment = if change > 0.0 {
        Sentiment::Bullish
    } else {
        Sentiment::Bearish
    };

    let mut key_points = vec![if change > 0.0 {
        format!("Price action is positive today ({change:+.2}%)")
    } else {
        format!("Price action is negative today ({change:+.2}%)")
    }];

    if change.abs() > VOLATILITY_THRESHOLD {
        key_points.push(format!(
            "Elevated volatility: daily move of {change:+.2}% exceeds {VOLATILITY_THRESHOLD:.1}%"
        ));
    }

    GeneralAnalysis {
        sentiment,
        rating: Rating::Stable,
        score: momentum_score(change),
        key_points,
        custom_metric: None,
    }
}

/// Shared momentum score: 50 plus ten points per percent of daily change,
/// clamped to the 0-100 scale.
fn momentum_score(change: f64) -> f64 {
    (50.0 + change * 10.0).clamp(0.0, 100.0)
}
