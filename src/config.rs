use serde::{Deserialize, Serialize};

/// Economic assumptions used across the valuation engine.
///
/// Every constant that feeds a formula lives here so tests can inject
/// alternatives and recalibration never touches formula code. Rates are
/// decimals (0.045 for 4.5%) except `inflation_assumption`, which is a
/// whole-number percent to match quoted bond yields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Risk-free rate for CAPM (10-year treasury proxy)
    pub risk_free_rate: f64,

    /// Equity risk premium over the risk-free rate
    pub equity_risk_premium: f64,

    /// Beta assumed when the snapshot reports none
    pub default_beta: f64,

    /// Growth assumption when neither earnings nor revenue growth is reported
    pub default_growth_rate: f64,

    /// Ceiling applied to the assumed growth rate before projection
    pub max_growth_rate: f64,

    /// Perpetual growth used for the DCF terminal value
    pub terminal_growth_rate: f64,

    /// Minimum spread between discount and terminal growth; the terminal
    /// denominator is floored here so it can never reach zero
    pub min_terminal_spread: f64,

    /// Required rate of return for the dividend discount model
    pub ddm_required_return: f64,

    /// Ceiling on dividend growth before the Gordon formula is applied
    pub ddm_max_growth: f64,

    /// Dividend growth assumed when valuing the dividend stream
    pub ddm_assumed_growth: f64,

    /// Inflation assumption for bond real-yield classification, in percent
    pub inflation_assumption: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.045,
            equity_risk_premium: 0.06,
            default_beta: 1.0,
            default_growth_rate: 0.05,
            max_growth_rate: 0.15,
            terminal_growth_rate: 0.02,
            min_terminal_spread: 0.005,
            ddm_required_return: 0.09,
            ddm_max_growth: 0.04,
            ddm_assumed_growth: 0.03,
            inflation_assumption: 3.0,
        }
    }
}

impl EngineConfig {
    /// Build a config from the environment, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            risk_free_rate: env_f64("ENGINE_RISK_FREE_RATE", defaults.risk_free_rate),
            equity_risk_premium: env_f64("ENGINE_EQUITY_RISK_PREMIUM", defaults.equity_risk_premium),
            default_beta: env_f64("ENGINE_DEFAULT_BETA", defaults.default_beta),
            default_growth_rate: env_f64("ENGINE_DEFAULT_GROWTH_RATE", defaults.default_growth_rate),
            max_growth_rate: env_f64("ENGINE_MAX_GROWTH_RATE", defaults.max_growth_rate),
            terminal_growth_rate: env_f64("ENGINE_TERMINAL_GROWTH_RATE", defaults.terminal_growth_rate),
            min_terminal_spread: env_f64("ENGINE_MIN_TERMINAL_SPREAD", defaults.min_terminal_spread),
            ddm_required_return: env_f64("ENGINE_DDM_REQUIRED_RETURN", defaults.ddm_required_return),
            ddm_max_growth: env_f64("ENGINE_DDM_MAX_GROWTH", defaults.ddm_max_growth),
            ddm_assumed_growth: env_f64("ENGINE_DDM_ASSUMED_GROWTH", defaults.ddm_assumed_growth),
            inflation_assumption: env_f64("ENGINE_INFLATION_ASSUMPTION", defaults.inflation_assumption),
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
