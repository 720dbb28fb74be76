//! # Row echelon form
//!
//! Gaussian elimination without row swaps: a zero pivot is repaired by adding a row from below.
//! Pivots are scaled to one. Entries above the pivots are not eliminated, so the result is not in
//! reduced row echelon form.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Real;

impl<F: Real> DenseMatrix<F> {
    /// A row echelon form of this matrix.
    ///
    /// The receiver is not modified. Only exact zeros are skipped when searching for a pivot.
    pub fn row_echelon_form(&self) -> Self {
        self.row_echelon_form_within(F::zero())
    }

    /// A row echelon form in which values with an absolute value of at most `tolerance` are not
    /// used as pivots.
    pub fn row_echelon_form_within(&self, tolerance: F) -> Self {
        let mut result = self.clone();
        result.reduce(tolerance);
        result
    }

    /// Number of pivots in the row echelon form.
    pub fn rank(&self) -> usize {
        self.rank_within(F::zero())
    }

    /// Number of pivots in the row echelon form, computed with the given tolerance.
    pub fn rank_within(&self, tolerance: F) -> usize {
        self.clone().reduce(tolerance)
    }

    /// Bring this matrix into row echelon form, in place.
    ///
    /// # Return value
    ///
    /// The number of pivots.
    fn reduce(&mut self, tolerance: F) -> usize {
        let mut pivot_row = 0;

        for column in 0..self.nr_columns {
            if pivot_row == self.nr_rows {
                break;
            }

            let Some(source) = self.first_element_beyond(column, pivot_row, tolerance).index else {
                // Nothing to pivot on in this column
                continue;
            };
            if source != pivot_row {
                self.mul_add_rows(source, pivot_row, F::one());
            }

            let pivot = self.data[pivot_row][column];
            self.scale_row(pivot_row, pivot.recip());
            self.data[pivot_row][column] = F::one();
            self.make_elements_zero_using_row(pivot_row, column, pivot_row + 1..self.nr_rows);

            pivot_row += 1;
        }

        pivot_row
    }
}
