//! Typed failures for kernel preconditions.
//!
//! All of these are programmer-error-class: validation happens at operation
//! entry, failures are returned synchronously, and nothing is retried or
//! left partially applied (every kernel type is immutable).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// A required collection had zero elements.
    #[error("input collection must not be empty")]
    EmptyInput,

    /// Operands did not share rank, or a planar-only operation received a
    /// non-planar operand.
    #[error("rank mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A 1-indexed coordinate, row, or column index fell outside its valid
    /// inclusive range.
    #[error("index {index} outside valid range [1, {max}]")]
    IndexOutOfRange { index: usize, max: usize },

    /// A scalar divisor (or a ray offset norm) was within tolerance of zero.
    #[error("divisor is within tolerance of zero")]
    DivisionByZero,

    /// A structural precondition on a matrix, path, or face was violated.
    #[error("invalid shape: {0}")]
    InvalidShape(&'static str),

    /// An inverse was requested on a matrix with a near-zero pivot.
    #[error("matrix is singular within tolerance")]
    Singular,
}

pub type Result<T> = std::result::Result<T, GeomError>;
