//! Errors raised by the reaction equations.

use hb_core::HbError;
use thiserror::Error;

/// Result type for reaction equations.
pub type ReactionResult<T> = Result<T, ReactionError>;

/// Arithmetic and lookup faults raised by the equations.
///
/// Only faults that plain `f64` arithmetic would hide are raised here. Domain
/// errors and overflow stay as IEEE-754 NaN / infinity in the returned value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReactionError {
    /// A divisor evaluated to exactly zero.
    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    /// Species key absent from the reagent mapping.
    #[error("Unknown species: {key}")]
    UnknownSpecies { key: String },
}

impl From<ReactionError> for HbError {
    fn from(err: ReactionError) -> Self {
        match err {
            ReactionError::DivisionByZero { what } => HbError::DivisionByZero { what },
            ReactionError::UnknownSpecies { key } => HbError::KeyNotFound { key },
        }
    }
}

/// Divide `num` by `den`, failing when `den` is exactly zero.
#[inline]
pub(crate) fn checked_div(num: f64, den: f64, what: &'static str) -> ReactionResult<f64> {
    if den == 0.0 {
        return Err(ReactionError::DivisionByZero { what });
    }
    Ok(num / den)
}
