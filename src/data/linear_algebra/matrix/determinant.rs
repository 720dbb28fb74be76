//! # Determinants and inverses
//!
//! Computed by cofactor expansion along the first row. The cost grows factorially with the size
//! of the matrix, which is acceptable for the small matrices this crate is meant for.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Real;
use crate::error::LinearAlgebraError;

impl<F: Real> DenseMatrix<F> {
    /// Determinant of a square matrix.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the number of rows and columns differ.
    pub fn determinant(&self) -> Result<F, LinearAlgebraError> {
        self.check_square()?;

        Ok(self.determinant_unchecked())
    }

    /// Whether the determinant is exactly zero.
    pub fn is_singular(&self) -> Result<bool, LinearAlgebraError> {
        Ok(self.determinant()? == F::zero())
    }

    /// Determinant of the matrix without row `i` and column `j`.
    ///
    /// The minor of a `1` x `1` matrix is one, such that the inverse of a `1` x `1` matrix is the
    /// reciprocal of its only element.
    ///
    /// # Errors
    ///
    /// `NotSquare` for a non square matrix, `IndexOutOfBounds` for a position outside of it.
    pub fn minor(&self, i: usize, j: usize) -> Result<F, LinearAlgebraError> {
        self.check_square()?;
        self.check_row_index(i)?;
        self.check_column_index(j)?;

        Ok(self.minor_unchecked(i, j))
    }

    /// Signed minor.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<F, LinearAlgebraError> {
        Ok(checkerboard_sign::<F>(i, j) * self.minor(i, j)?)
    }

    /// Matrix of all cofactors.
    pub fn cofactor_matrix(&self) -> Result<Self, LinearAlgebraError> {
        self.check_square()?;

        let data = (0..self.nr_rows)
            .map(|i| (0..self.nr_columns).map(|j| self.cofactor_unchecked(i, j)).collect())
            .collect();

        Ok(Self { data, nr_rows: self.nr_rows, nr_columns: self.nr_columns })
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Self, LinearAlgebraError> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Inverse through the adjugate.
    ///
    /// # Errors
    ///
    /// `NotSquare` for a non square matrix, `Singular` if the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self, LinearAlgebraError> {
        let determinant = self.determinant()?;
        if determinant == F::zero() {
            return Err(LinearAlgebraError::Singular);
        }

        Ok(self.adjugate()?.scalar_multiply(determinant.recip()))
    }

    fn check_square(&self) -> Result<(), LinearAlgebraError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinearAlgebraError::NotSquare { nr_rows: self.nr_rows, nr_columns: self.nr_columns })
        }
    }

    fn determinant_unchecked(&self) -> F {
        debug_assert!(self.is_square());

        match self.nr_rows {
            1 => self.data[0][0],
            2 => self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0],
            _ => (0..self.nr_columns)
                .filter(|&j| self.data[0][j] != F::zero())
                .map(|j| self.data[0][j] * self.cofactor_unchecked(0, j))
                .fold(F::zero(), |total, term| total + term),
        }
    }

    fn cofactor_unchecked(&self, i: usize, j: usize) -> F {
        checkerboard_sign::<F>(i, j) * self.minor_unchecked(i, j)
    }

    fn minor_unchecked(&self, i: usize, j: usize) -> F {
        if self.nr_rows == 1 {
            return F::one();
        }

        self.without(i, j).determinant_unchecked()
    }

    /// Copy without row `i` and column `j`.
    fn without(&self, i: usize, j: usize) -> Self {
        debug_assert!(self.nr_rows > 1 && self.nr_columns > 1);

        let data = self.data.iter().enumerate()
            .filter(|&(row_index, _)| row_index != i)
            .map(|(_, row)| {
                row.iter().enumerate()
                    .filter(|&(column_index, _)| column_index != j)
                    .map(|(_, &value)| value)
                    .collect()
            })
            .collect();

        Self { data, nr_rows: self.nr_rows - 1, nr_columns: self.nr_columns - 1 }
    }
}

fn checkerboard_sign<F: Real>(i: usize, j: usize) -> F {
    if (i + j) % 2 == 0 { F::one() } else { -F::one() }
}
