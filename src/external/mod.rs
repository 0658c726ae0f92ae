pub mod market_provider;
