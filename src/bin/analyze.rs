use anyhow::{anyhow, Context, Result};

use intrinsica_engine::logging::{init_logging, LoggingConfig};
use intrinsica_engine::{
    AnalysisResult, AnalysisService, AssetType, EngineConfig, FundamentalsSnapshot, SimpleQuote,
};

const USAGE: &str = "usage: analyze <stocks|bonds|indices|commodities> <snapshot.json>";

/// Offline analysis runner: feeds a snapshot fixture through the engine and
/// prints the result. Useful for eyeballing metric output without wiring up
/// a data provider.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::from_env())
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    let mut args = std::env::args().skip(1);
    let asset: AssetType = args.next().context(USAGE)?.parse()?;
    let path = args.next().context(USAGE)?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read snapshot file {path}"))?;
    let service = AnalysisService::with_config(EngineConfig::from_env());

    let result = match asset {
        AssetType::Stocks => {
            let snapshot: FundamentalsSnapshot =
                serde_json::from_str(&raw).context("snapshot is not valid fundamentals JSON")?;
            tracing::info!("Analyzing {} as equity", snapshot.symbol);
            let metrics = service.analyze_equity(&snapshot);
            let valuation_history = service.valuation_history(&snapshot);
            AnalysisResult::equity(Some(snapshot), Vec::new(), metrics, valuation_history)
        }
        other => {
            let quote: SimpleQuote =
                serde_json::from_str(&raw).context("snapshot is not valid quote JSON")?;
            tracing::info!("Analyzing {} as {}", quote.symbol, other);
            let analysis = service.classify_quote(other, &quote);
            AnalysisResult::non_equity(other, Some(quote), Vec::new(), analysis)
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
