//! Crate errors.

use thiserror::Error;

/// Division by zero.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("division by zero")]
pub struct DivByZero;

/// The modulus handed to a field constructor is unusable.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("modulus must be at least 2")]
pub struct InvalidModulus;

/// The point sequence does not contain enough points.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("not enough points in sequence")]
pub struct NotEnoughPoints;

/// Failed Interpolation Error
#[derive(Error, Debug, Eq, PartialEq)]
pub enum InterpolationError {
    /// Division by zero.
    #[error("division by zero")]
    DivByZero,

    /// Empty point sequence.
    #[error("empty point sequence")]
    EmptySequence,

    /// The point sequence has duplicate abscissas.
    #[error("point sequence has duplicate abscissas")]
    DuplicateAbscissas,
}

impl From<DivByZero> for InterpolationError {
    fn from(_: DivByZero) -> Self {
        Self::DivByZero
    }
}
