//! Error types for trendcast

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrendError>;

/// Errors surfaced by the prediction pipeline.
///
/// Each stage fails fast with its own variant and lets the caller decide
/// whether to skip the ticker, log, or abort. Nothing in the core retries
/// or reinterprets a downstream error.
#[derive(Error, Debug)]
pub enum TrendError {
    /// Provider unreachable, timed out, or returned an empty series
    #[error("no usable data for {ticker}: {reason}")]
    DataUnavailable { ticker: String, reason: String },

    /// The feed carried no recognizable price field
    #[error("no recognizable price field in series for {0}")]
    Schema(String),

    /// Too few usable bars once feature windows are trimmed
    #[error("insufficient history: {got} usable bars, need at least {need}")]
    InsufficientHistory { got: usize, need: usize },

    /// Degenerate or too-small labeled training set
    #[error("training failed: {0}")]
    Training(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}
