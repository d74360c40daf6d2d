//! Matrix type for 2D numeric data.

use serde::{Deserialize, Serialize};

use crate::error::MatrizError;

use super::Dimension;

/// A 2D matrix of values in row-major storage.
///
/// The shape is fixed at construction; the grid is never resized. Each
/// matrix exclusively owns its storage; every operation returns a freshly
/// constructed result, never a view into an operand.
///
/// # Examples
///
/// ```
/// use matriz::primitives::{Dimension, Matrix};
///
/// let dim = Dimension::new(2, 3).unwrap();
/// let m = Matrix::from_vec(dim, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    dim: Dimension,
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DataLength`] if the data length doesn't match
    /// `dim.len()`.
    pub fn from_vec(dim: Dimension, data: Vec<T>) -> Result<Self, MatrizError> {
        if data.len() != dim.len() {
            return Err(MatrizError::DataLength {
                expected: dim.len(),
                actual: data.len(),
            });
        }
        Ok(Self { data, dim })
    }

    /// Creates a matrix by evaluating a generator at every position, filling
    /// in row-major order.
    pub fn from_fn<F>(dim: Dimension, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(dim.len());
        for row in 0..dim.rows() {
            for col in 0..dim.cols() {
                data.push(f(row, col));
            }
        }
        Self { data, dim }
    }

    /// Returns the dimension.
    #[must_use]
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.dim.rows(), self.dim.cols())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.dim.rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.dim.cols()
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.check_index(row, col);
        self.data[row * self.dim.cols() + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.check_index(row, col);
        self.data[row * self.dim.cols() + col] = value;
    }

    fn check_index(&self, row: usize, col: usize) {
        assert!(
            row < self.dim.rows() && col < self.dim.cols(),
            "index ({row}, {col}) out of bounds for {}",
            self.dim
        );
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(dim: Dimension) -> Self {
        Self {
            data: vec![0.0; dim.len()],
            dim,
        }
    }

    /// Creates an n×n identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidDimension`] if `n` is zero.
    pub fn identity(n: usize) -> Result<Self, MatrizError> {
        let dim = Dimension::new(n, n)?;
        Ok(Self::from_fn(dim, |row, col| if row == col { 1.0 } else { 0.0 }))
    }

    /// Creates a matrix from parsed input rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidDimension`] for empty input and
    /// [`MatrizError::DataLength`] for a ragged row.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrizError> {
        let first_len = rows.first().map_or(0, Vec::len);
        let dim = Dimension::new(rows.len(), first_len)?;
        for row in rows {
            if row.len() != dim.cols() {
                return Err(MatrizError::DataLength {
                    expected: dim.cols(),
                    actual: row.len(),
                });
            }
        }
        let data = rows.iter().flatten().copied().collect();
        Ok(Self { data, dim })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, MatrizError> {
        if self.dim != other.dim {
            return Err(MatrizError::DimensionMismatch {
                left: self.dim,
                right: other.dim,
            });
        }
        Ok(Self::from_fn(self.dim, |row, col| {
            self.get(row, col) + other.get(row, col)
        }))
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| scalar * x).collect(),
            dim: self.dim,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each result element accumulates from 0.0, one term per inner index in
    /// increasing order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IncompatibleShape`] carrying both shapes if
    /// `self.cols != other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrizError> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrizError::IncompatibleShape {
                left: self.dim,
                right: other.dim,
            });
        }

        let dim = Dimension::new(self.n_rows(), other.n_cols())?;
        Ok(Self::from_fn(dim, |row, col| {
            let mut sum = 0.0;
            for k in 0..self.n_cols() {
                sum += self.get(row, k) * other.get(k, col);
            }
            sum
        }))
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
