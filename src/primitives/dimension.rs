//! Matrix shape descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MatrizError;

/// A (rows, columns) shape descriptor for a matrix.
///
/// Both sides are strictly positive; the constructor rejects zero. Values
/// are immutable once created; [`transpose`](Dimension::transpose) returns
/// a new Dimension rather than mutating.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Dimension;
///
/// let dim = Dimension::new(2, 3).unwrap();
/// assert_eq!(dim.transpose(), Dimension::new(3, 2).unwrap());
/// assert_eq!(dim.to_string(), "2x3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    rows: usize,
    cols: usize,
}

impl Dimension {
    /// Creates a dimension with the given sides.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidDimension`] if either side is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrizError> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total element count (`rows * cols`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Always false: both sides are at least one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when rows equal columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns a new dimension with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
#[path = "dimension_tests.rs"]
mod tests;
