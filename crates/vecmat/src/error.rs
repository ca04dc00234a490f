//! Errors for vector and matrix arithmetic.

use crate::vector::Orientation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum MathError {
    #[error("Vectors are not of the same shape")]
    ShapeMismatch,

    #[error("Operation requires a {expected} vector")]
    OrientationMismatch { expected: Orientation },

    #[error("Matrix index ({row}, {col}) is out of range for a 3x3 matrix")]
    IndexOutOfRange { row: usize, col: usize },

    #[error("Matrix is singular (determinant {determinant})")]
    Singular { determinant: f64 },
}

/// Unwraps the result of a fallible operation invoked through an operator,
/// panicking with the error message on failure.
#[inline]
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
