//! Transposes, determinant, adjoint, and inverse.
//!
//! Every operation here produces a freshly constructed matrix or scalar and
//! leaves its input untouched. The determinant is the recursive cofactor
//! expansion along row 0, O(n!) and intentionally so; this crate targets
//! small pedagogical matrices, not LU-factored workloads.

use crate::error::MatrizError;
use crate::primitives::{Dimension, Matrix};

impl Matrix<f64> {
    /// Reflects across the main diagonal: result(r,c) = A(c,r).
    #[must_use]
    pub fn transpose_main(&self) -> Self {
        Self::from_fn(self.dim().transpose(), |row, col| self.get(col, row))
    }

    /// Reflects across the anti-diagonal: result(r,c) = A(rows-c-1, cols-r-1).
    #[must_use]
    pub fn transpose_secondary(&self) -> Self {
        let (rows, cols) = self.shape();
        Self::from_fn(self.dim().transpose(), |row, col| {
            self.get(rows - col - 1, cols - row - 1)
        })
    }

    /// Mirrors left-right: result(r,c) = A(r, cols-c-1).
    #[must_use]
    pub fn transpose_vertical(&self) -> Self {
        let cols = self.n_cols();
        Self::from_fn(self.dim(), |row, col| self.get(row, cols - col - 1))
    }

    /// Mirrors top-bottom: result(r,c) = A(rows-r-1, c).
    #[must_use]
    pub fn transpose_horizontal(&self) -> Self {
        let rows = self.n_rows();
        Self::from_fn(self.dim(), |row, col| self.get(rows - row - 1, col))
    }

    /// Determinant of the submatrix formed by deleting `target_row` and
    /// `target_col`, with the remaining indices re-packed.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for a non-square matrix and
    /// [`MatrizError::Undefined`] for a 1×1 matrix, whose submatrix would be
    /// 0×0.
    pub fn minor(&self, target_row: usize, target_col: usize) -> Result<f64, MatrizError> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(MatrizError::NotSquare { rows, cols });
        }
        let sub_dim = match Dimension::new(rows - 1, cols - 1) {
            Ok(dim) => dim,
            Err(_) => return Err(MatrizError::Undefined { rows, cols }),
        };
        let submatrix = Self::from_fn(sub_dim, |minor_row, minor_col| {
            let source_row = if minor_row < target_row { minor_row } else { minor_row + 1 };
            let source_col = if minor_col < target_col { minor_col } else { minor_col + 1 };
            self.get(source_row, source_col)
        });
        submatrix.determinant()
    }

    /// Signed minor: `(-1)^(row+col) * minor(row, col)`.
    ///
    /// # Errors
    ///
    /// Propagates the failures of [`minor`](Matrix::minor).
    pub fn cofactor(&self, target_row: usize, target_col: usize) -> Result<f64, MatrizError> {
        let sign = if (target_row + target_col) % 2 == 0 { 1.0 } else { -1.0 };
        Ok(sign * self.minor(target_row, target_col)?)
    }

    /// Determinant by cofactor expansion along row 0.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for a non-square matrix. The
    /// `Undefined` guard for a zero-sized matrix is kept even though
    /// [`Dimension`] cannot represent one.
    pub fn determinant(&self) -> Result<f64, MatrizError> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(MatrizError::NotSquare { rows, cols });
        }
        if rows < 1 {
            return Err(MatrizError::Undefined { rows, cols });
        }
        if rows == 1 {
            return Ok(self.get(0, 0));
        }
        if rows == 2 {
            return Ok(self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0));
        }

        let reference_row = 0;
        let mut determinant = 0.0;
        for reference_col in 0..cols {
            determinant +=
                self.get(reference_row, reference_col) * self.cofactor(reference_row, reference_col)?;
        }
        Ok(determinant)
    }

    /// The adjugate: the transpose of the cofactor matrix.
    ///
    /// Squareness is validated once here, so a failure surfaces at the
    /// entry point instead of deep in the minor recursion.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for a non-square matrix and
    /// [`MatrizError::Undefined`] for a 1×1 matrix.
    pub fn adjoint(&self) -> Result<Self, MatrizError> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(MatrizError::NotSquare { rows, cols });
        }
        let mut cofactors = Self::zeros(self.dim());
        for row in 0..rows {
            for col in 0..cols {
                cofactors.set(row, col, self.cofactor(row, col)?);
            }
        }
        Ok(cofactors.transpose_main())
    }

    /// The inverse by the adjoint method: `adjoint(A) / det(A)`.
    ///
    /// The singularity test is exact equality with zero, matching the
    /// calculator's observable behavior; near-singular matrices are
    /// inverted with whatever precision the arithmetic allows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::SingularMatrix`] when the determinant is
    /// exactly zero, and propagates [`MatrizError::NotSquare`] /
    /// [`MatrizError::Undefined`] from the determinant.
    pub fn inverse(&self) -> Result<Self, MatrizError> {
        let determinant = self.determinant()?;
        if determinant == 0.0 {
            return Err(MatrizError::SingularMatrix { det: determinant });
        }
        let adjoint = self.adjoint()?;
        Ok(Self::from_fn(adjoint.dim(), |row, col| {
            adjoint.get(row, col) / determinant
        }))
    }
}

#[cfg(test)]
#[path = "linalg_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_linalg_contract.rs"]
mod contract_tests;
