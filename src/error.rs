use thiserror::Error;

use crate::core::TemporalUnit;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid auto-range input: length={length}, label_size={label_size}")]
    InvalidAutoRangeInput { length: f64, label_size: f64 },

    #[error("unit {unit:?} is not supported by {kind} values")]
    UnsupportedUnit {
        unit: TemporalUnit,
        kind: &'static str,
    },

    #[error("coordinate arithmetic overflowed in {unit:?} units")]
    CoordinateOverflow { unit: TemporalUnit },

    #[error("failed to parse tick label `{input}`: {source}")]
    LabelParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
