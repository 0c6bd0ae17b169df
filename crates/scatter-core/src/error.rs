// File: crates/scatter-core/src/error.rs
// Summary: Error type shared by dataset loading and axis selection.

use crate::axis::{Attribute, AxisId};

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    #[error("unknown axis `{0}` (expected `x` or `y`)")]
    UnknownAxis(String),

    #[error("attribute `{attribute}` is plotted on the {expected} axis, not {requested}")]
    AxisMismatch {
        attribute: Attribute,
        expected: AxisId,
        requested: AxisId,
    },

    #[error("no record at index {0}")]
    UnknownRecord(usize),
}

pub type Result<T> = std::result::Result<T, ChartError>;
