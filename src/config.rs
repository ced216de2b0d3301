//! Configuration loading and defaults
//!
//! Settings come from an optional TOML file layered with `TRENDCAST_*`
//! environment variables. Every field has a default so the binary runs
//! without any config file at all.

use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub model: ModelConfig,
    pub signal: SignalConfig,
    pub watchlist: WatchlistConfig,
}

impl Config {
    /// Load configuration from `path` (optional) with environment
    /// overrides, e.g. `TRENDCAST_SIGNAL__BUY_THRESHOLD=0.6`.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("TRENDCAST").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// Market data source settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Request timeout; a timed-out fetch surfaces as unavailable data
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

/// Hyperparameters for the logistic regression classifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub learning_rate: f64,
    pub max_iter: usize,
    pub tolerance: f64,
    /// L2 penalty strength; 0 disables regularization
    pub l2: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.05,
            max_iter: 200,
            tolerance: 1e-6,
            l2: 0.01,
        }
    }
}

/// Probability cutoffs for the BUY/HOLD/SELL mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub buy_threshold: f64,
    pub sell_threshold: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            buy_threshold: 0.55,
            sell_threshold: 0.45,
        }
    }
}

/// Tickers evaluated when the CLI is given none explicitly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WatchlistConfig {
    pub tickers: Vec<String>,
    /// Default lookback window in calendar days
    pub period_days: u32,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            tickers: vec!["BTC-USD".to_string(), "TSLA".to_string()],
            period_days: 400,
        }
    }
}
