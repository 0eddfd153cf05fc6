// src/error.rs
//! Error types for vector operations.

use std::fmt;

/// Errors produced by [`Vector`](crate::vector::Vector) operations.
///
/// The enum is the common category all vector errors fall under; match on
/// it broadly, or on individual variants to handle one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Construction was attempted with zero components.
    ZeroDimension,
    /// A binary operation combined vectors of unequal dimension.
    DimensionMismatch {
        /// Dimension of the left-hand operand.
        left: usize,
        /// Dimension of the right-hand operand.
        right: usize,
    },
    /// A zero-magnitude vector was normalized or used as a divisor.
    ZeroMagnitude,
    /// Generic invalid operation, reserved for cases outside the kinds above.
    Other(String),
}

impl VectorError {
    /// True for the dimension-related kinds: [`ZeroDimension`] and
    /// [`DimensionMismatch`].
    ///
    /// [`ZeroDimension`]: VectorError::ZeroDimension
    /// [`DimensionMismatch`]: VectorError::DimensionMismatch
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            VectorError::ZeroDimension | VectorError::DimensionMismatch { .. }
        )
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::ZeroDimension => write!(f, "cannot have a 0-dimensional vector"),
            VectorError::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {}D vs {}D", left, right)
            }
            VectorError::ZeroMagnitude => {
                write!(f, "operation undefined for a zero-magnitude vector")
            }
            VectorError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for VectorError {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, VectorError>;
