//! Training labels for next-day direction
//!
//! The single place future information is used on purpose: each historical
//! row is labeled with whether the following session's price closed
//! strictly higher. The most recent row has no following session and is
//! never labeled; it stays reserved for inference.

use super::{FeatureRow, FeatureTable};

/// Feature row plus its realized next-day direction.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRow {
    pub features: FeatureRow,
    /// 1 if the next session's price closed strictly higher, else 0
    pub target: u8,
}

pub struct LabelBuilder;

impl LabelBuilder {
    /// Label every row except the last. Output length is always
    /// `table.len() - 1`; pairing adjacent rows makes it impossible to
    /// mislabel the tail.
    pub fn label(table: &FeatureTable) -> Vec<LabeledRow> {
        table
            .rows()
            .windows(2)
            .map(|pair| LabeledRow {
                features: pair[0].clone(),
                target: u8::from(pair[1].adj_close > pair[0].adj_close),
            })
            .collect()
    }
}
