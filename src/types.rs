//! Core types for price series and prediction output

use crate::config::SignalConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One completed daily trading bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Split/dividend adjusted close, when the feed provides one
    pub adj_close: Option<f64>,
    pub volume: u64,
}

impl PriceBar {
    /// Price under the resolved field kind.
    pub fn price(&self, field: PriceFieldKind) -> f64 {
        match field {
            PriceFieldKind::AdjustedClose => self.adj_close.unwrap_or(self.close),
            PriceFieldKind::Close => self.close,
        }
    }
}

/// Recognized price fields, in resolution priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFieldKind {
    AdjustedClose,
    Close,
}

impl PriceFieldKind {
    /// Resolve which field to read prices from: an explicitly adjusted
    /// close wins over a raw close. `None` means the feed carried no
    /// recognizable price field at all.
    pub fn resolve(has_adjusted: bool, has_close: bool) -> Option<Self> {
        if has_adjusted {
            Some(Self::AdjustedClose)
        } else if has_close {
            Some(Self::Close)
        } else {
            None
        }
    }
}

/// Time-ordered daily bars for a single ticker.
///
/// Created per request by the provider and discarded after feature
/// extraction; nothing caches a series across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub ticker: String,
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(ticker: impl Into<String>, bars: Vec<PriceBar>) -> Self {
        Self {
            ticker: ticker.into(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Field to read prices from. Adjusted close is used only when every
    /// bar carries one; otherwise the raw close column is used throughout
    /// so all returns are computed against the same field.
    pub fn price_field(&self) -> PriceFieldKind {
        if !self.bars.is_empty() && self.bars.iter().all(|b| b.adj_close.is_some()) {
            PriceFieldKind::AdjustedClose
        } else {
            PriceFieldKind::Close
        }
    }
}

/// Supported lookback windows for history downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookbackPeriod {
    Days90,
    Days180,
    Days400,
    Days800,
}

impl LookbackPeriod {
    pub const fn days(self) -> u32 {
        match self {
            Self::Days90 => 90,
            Self::Days180 => 180,
            Self::Days400 => 400,
            Self::Days800 => 800,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            90 => Some(Self::Days90),
            180 => Some(Self::Days180),
            400 => Some(Self::Days400),
            800 => Some(Self::Days800),
            _ => None,
        }
    }

    /// All supported windows, for CLI help text.
    pub const ALL: [LookbackPeriod; 4] = [
        Self::Days90,
        Self::Days180,
        Self::Days400,
        Self::Days800,
    ];
}

impl Default for LookbackPeriod {
    fn default() -> Self {
        Self::Days400
    }
}

impl fmt::Display for LookbackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.days())
    }
}

/// Output of one trained-and-queried model run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// 1 = price up tomorrow, 0 = flat or down
    pub predicted_class: u8,
    /// Estimated probability of the up class (0-1)
    pub probability_up: f64,
    /// Date of the last completed bar the prediction is based on
    pub as_of: NaiveDate,
}

/// Discrete action derived from the up-probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "SELL")]
    Sell,
}

impl Recommendation {
    /// Map a probability to an action. Thresholds are inclusive on both
    /// sides: a probability sitting exactly on the buy threshold is a Buy,
    /// exactly on the sell threshold a Sell.
    pub fn from_probability(probability_up: f64, signal: &SignalConfig) -> Self {
        if probability_up >= signal.buy_threshold {
            Self::Buy
        } else if probability_up <= signal.sell_threshold {
            Self::Sell
        } else {
            Self::Hold
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Hold => write!(f, "HOLD"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// Caller-facing result for one ticker.
#[derive(Debug, Clone, Serialize)]
pub struct TickerReport {
    pub ticker: String,
    pub recommendation: Recommendation,
    pub probability_up: f64,
    pub as_of: NaiveDate,
}
