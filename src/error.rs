//! Error types for matrix operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

use crate::primitives::Dimension;

/// Main error type for matrix operations.
///
/// Every domain operation reports failure through this enum; nothing in the
/// library aborts the process. Out-of-bounds element access is the one
/// exception and panics, since it is a programming error rather than a
/// domain condition.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
/// use matriz::primitives::Dimension;
///
/// let err = MatrizError::DimensionMismatch {
///     left: Dimension::new(2, 2).unwrap(),
///     right: Dimension::new(2, 3).unwrap(),
/// };
/// assert!(err.to_string().contains("dimensions don't match"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// A dimension with a zero side was requested.
    InvalidDimension {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Supplied element data does not fill the requested shape.
    DataLength {
        /// Elements required by the shape
        expected: usize,
        /// Elements actually supplied
        actual: usize,
    },

    /// Addition operands have different shapes.
    DimensionMismatch {
        /// Left operand shape
        left: Dimension,
        /// Right operand shape
        right: Dimension,
    },

    /// Multiplication inner dimensions differ (A columns != B rows).
    IncompatibleShape {
        /// Left operand shape
        left: Dimension,
        /// Right operand shape
        right: Dimension,
    },

    /// Determinant/adjoint/inverse requested on a non-square matrix.
    NotSquare {
        /// Rows of the offending matrix
        rows: usize,
        /// Columns of the offending matrix
        cols: usize,
    },

    /// Determinant requested on a degenerate size (no 0x0 submatrix exists).
    Undefined {
        /// Rows of the offending matrix
        rows: usize,
        /// Columns of the offending matrix
        cols: usize,
    },

    /// Matrix is singular (zero determinant, non-invertible).
    SingularMatrix {
        /// The determinant value
        det: f64,
    },

    /// Console input was rejected before reaching the core.
    Parse(String),

    /// I/O error while reading or writing the console streams.
    Io(std::io::Error),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidDimension { rows, cols } => {
                write!(f, "Invalid dimension: {rows}x{cols}, both sides must be positive")
            }
            MatrizError::DataLength { expected, actual } => {
                write!(f, "Data length must equal rows * cols: expected {expected}, got {actual}")
            }
            MatrizError::DimensionMismatch { left, right } => {
                write!(f, "Matrix dimensions don't match: {left} vs {right}")
            }
            MatrizError::IncompatibleShape { left, right } => {
                write!(
                    f,
                    "Matrices {left} and {right} are not compatible: A columns ({}) != B rows ({})",
                    left.cols(),
                    right.rows()
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Non-square matrices don't have determinants: {rows}x{cols}")
            }
            MatrizError::Undefined { rows, cols } => {
                write!(f, "Determinant can't be computed for dimension: {rows}x{cols}")
            }
            MatrizError::SingularMatrix { det } => {
                write!(f, "Singular matrix detected: determinant = {det}, cannot invert")
            }
            MatrizError::Parse(msg) => write!(f, "Parse error: {msg}"),
            MatrizError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for MatrizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrizError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MatrizError {
    fn from(err: std::io::Error) -> Self {
        MatrizError::Io(err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
