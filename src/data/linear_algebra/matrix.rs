//! # Dense matrices
//!
//! A row-major matrix of real numbers. Every operation that produces a matrix allocates a new one.
//! In place mutation is limited to a small set of row and column operations (see the "Mutation"
//! block below), which the Simplex tableau and the echelon reduction use.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::linear_algebra::IndexElementPair;
use crate::data::number_types::traits::Real;
use crate::error::LinearAlgebraError;

mod determinant;
mod echelon;

/// Uses a `Vec<Vec<F>>` as underlying data structure.
///
/// Never zero-sized in either dimension. Dimensions only change through `delete_row` and
/// `delete_column`.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Real> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of the same, positive length.
    ///
    /// # Errors
    ///
    /// `Empty` if there are no rows or the rows have no elements, `Ragged` if the rows don't all
    /// have the same length.
    pub fn new(data: Vec<Vec<F>>) -> Result<Self, LinearAlgebraError> {
        let (nr_rows, nr_columns) = data_dimensions(&data)?;
        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a square identity matrix of size `size`.
    ///
    /// # Panics
    ///
    /// If `size` is zero.
    pub fn identity(size: usize) -> Self {
        assert!(size > 0, "an identity matrix needs at least one row");

        let data = (0..size)
            .map(|i| (0..size).map(|j| if i == j { F::one() } else { F::zero() }).collect())
            .collect();

        Self { data, nr_rows: size, nr_columns: size }
    }

    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    ///
    /// # Panics
    ///
    /// If either dimension is zero.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        assert!(nr_rows > 0 && nr_columns > 0, "a matrix needs at least one row and one column");

        Self { data: vec![vec![F::zero(); nr_columns]; nr_rows], nr_rows, nr_columns }
    }

    /// A single row filled with `value`.
    ///
    /// # Panics
    ///
    /// If `len` is zero.
    pub fn constant_row(value: F, len: usize) -> Self {
        assert!(len > 0, "a row needs at least one element");

        Self { data: vec![vec![value; len]], nr_rows: 1, nr_columns: len }
    }

    /// A `1` x `values.len()` matrix.
    pub fn row_vector(values: Vec<F>) -> Result<Self, LinearAlgebraError> {
        Self::new(vec![values])
    }

    /// A `values.len()` x `1` matrix.
    pub fn column_vector(values: Vec<F>) -> Result<Self, LinearAlgebraError> {
        Self::new(values.into_iter().map(|value| vec![value]).collect())
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Whether the number of rows equals the number of columns.
    pub fn is_square(&self) -> bool {
        self.nr_rows == self.nr_columns
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Copy of row `i`.
    ///
    /// Changing the returned values doesn't affect the matrix.
    pub fn row(&self, i: usize) -> Vec<F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].clone()
    }

    /// Copy of column `j`.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[F]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Get the data of this matrix.
    pub fn into_data(self) -> Vec<Vec<F>> {
        self.data
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the matrices don't have the same size.
    pub fn add(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.elementwise(other, |left, right| left + right)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the matrices don't have the same size.
    pub fn sub(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.elementwise(other, |left, right| left - right)
    }

    fn elementwise(
        &self,
        other: &Self,
        operation: impl Fn(F, F) -> F,
    ) -> Result<Self, LinearAlgebraError> {
        if self.nr_rows != other.nr_rows || self.nr_columns != other.nr_columns {
            return Err(self.dimension_mismatch(other));
        }

        let data = self.data.iter().zip(&other.data)
            .map(|(row, other_row)| {
                row.iter().zip(other_row)
                    .map(|(&left, &right)| operation(left, right))
                    .collect()
            })
            .collect();

        Ok(Self { data, nr_rows: self.nr_rows, nr_columns: self.nr_columns })
    }

    /// Multiply every element with `scalar`.
    pub fn scalar_multiply(&self, scalar: F) -> Self {
        let data = self.data.iter()
            .map(|row| row.iter().map(|&value| value * scalar).collect())
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: self.nr_columns }
    }

    /// A new matrix with rows and columns swapped.
    ///
    /// The receiver is not modified.
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns).map(|j| self.column(j)).collect();

        Self { data, nr_rows: self.nr_columns, nr_columns: self.nr_rows }
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of columns of `self` differs from the number of rows of
    /// `other`.
    pub fn multiply(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        if self.nr_columns != other.nr_rows {
            return Err(self.dimension_mismatch(other));
        }

        let data = self.data.iter()
            .map(|row| {
                (0..other.nr_columns)
                    .map(|j| {
                        row.iter().zip(&other.data)
                            .map(|(&left, other_row)| left * other_row[j])
                            .fold(F::zero(), |total, term| total + term)
                    })
                    .collect()
            })
            .collect();

        Ok(Self { data, nr_rows: self.nr_rows, nr_columns: other.nr_columns })
    }

    /// Concatenate another matrix to the "right" (high column indices) of this matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of rows differs.
    pub fn merge_horizontal(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        if self.nr_rows != other.nr_rows {
            return Err(self.dimension_mismatch(other));
        }

        let data = self.data.iter().zip(&other.data)
            .map(|(row, other_row)| row.iter().chain(other_row).copied().collect())
            .collect();

        Ok(Self { data, nr_rows: self.nr_rows, nr_columns: self.nr_columns + other.nr_columns })
    }

    /// Concatenate another matrix "below" (high row indices) this matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of columns differs.
    pub fn merge_vertical(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        if self.nr_columns != other.nr_columns {
            return Err(self.dimension_mismatch(other));
        }

        let data = self.data.iter().chain(&other.data).cloned().collect();

        Ok(Self { data, nr_rows: self.nr_rows + other.nr_rows, nr_columns: self.nr_columns })
    }

    fn dimension_mismatch(&self, other: &Self) -> LinearAlgebraError {
        LinearAlgebraError::DimensionMismatch {
            rows1: self.nr_rows,
            cols1: self.nr_columns,
            rows2: other.nr_rows,
            cols2: other.nr_columns,
        }
    }

    fn check_row_index(&self, i: usize) -> Result<(), LinearAlgebraError> {
        if i < self.nr_rows {
            Ok(())
        } else {
            Err(LinearAlgebraError::IndexOutOfBounds { index: i, len: self.nr_rows })
        }
    }

    fn check_column_index(&self, j: usize) -> Result<(), LinearAlgebraError> {
        if j < self.nr_columns {
            Ok(())
        } else {
            Err(LinearAlgebraError::IndexOutOfBounds { index: j, len: self.nr_columns })
        }
    }
}

/// Mutation.
///
/// The only operations that change a matrix in place.
impl<F: Real> DenseMatrix<F> {
    /// Change row `i` to the provided `values`.
    ///
    /// The values are copied.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` for a row that doesn't exist, `LengthMismatch` if the number of values
    /// is not equal to the number of columns.
    pub fn set_row(&mut self, i: usize, values: &[F]) -> Result<(), LinearAlgebraError> {
        self.check_row_index(i)?;
        if values.len() != self.nr_columns {
            return Err(LinearAlgebraError::LengthMismatch {
                expected: self.nr_columns,
                actual: values.len(),
            });
        }

        self.data[i] = values.to_vec();

        Ok(())
    }

    /// Change column `j` to the provided `values`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` for a column that doesn't exist, `LengthMismatch` if the number of
    /// values is not equal to the number of rows.
    pub fn set_column(&mut self, j: usize, values: &[F]) -> Result<(), LinearAlgebraError> {
        self.check_column_index(j)?;
        if values.len() != self.nr_rows {
            return Err(LinearAlgebraError::LengthMismatch {
                expected: self.nr_rows,
                actual: values.len(),
            });
        }

        for (row, &value) in self.data.iter_mut().zip(values) {
            row[j] = value;
        }

        Ok(())
    }

    /// Remove row `i`, shifting all rows below it up by one.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` for a row that doesn't exist, `Empty` when removing the last remaining
    /// row.
    pub fn delete_row(&mut self, i: usize) -> Result<(), LinearAlgebraError> {
        self.check_row_index(i)?;
        if self.nr_rows == 1 {
            return Err(LinearAlgebraError::Empty);
        }

        self.data.remove(i);
        self.nr_rows -= 1;

        Ok(())
    }

    /// Remove column `j`, shifting all columns to the right of it left by one.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` for a column that doesn't exist, `Empty` when removing the last
    /// remaining column.
    pub fn delete_column(&mut self, j: usize) -> Result<(), LinearAlgebraError> {
        self.check_column_index(j)?;
        if self.nr_columns == 1 {
            return Err(LinearAlgebraError::Empty);
        }

        for row in &mut self.data {
            row.remove(j);
        }
        self.nr_columns -= 1;

        Ok(())
    }

    /// Remove the bottom row.
    pub fn delete_last_row(&mut self) -> Result<(), LinearAlgebraError> {
        self.delete_row(self.nr_rows - 1)
    }

    /// Remove the rightmost column.
    pub fn delete_last_column(&mut self) -> Result<(), LinearAlgebraError> {
        self.delete_column(self.nr_columns - 1)
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn scale_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = *value * factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read_value = self.data[read_row][j];
            self.data[write_row][j] = self.data[write_row][j] + factor * read_value;
        }
    }

    /// Zero out `column` in each of `rows` by subtracting a multiple of `pivot_row`.
    ///
    /// The multiple is the value of the row being changed in `column`, so the pivot row should
    /// have a one in `column`. The eliminated entries are set to exactly zero. The pivot row
    /// itself is skipped if it is part of `rows`.
    pub fn make_elements_zero_using_row(
        &mut self,
        pivot_row: usize,
        column: usize,
        rows: impl IntoIterator<Item = usize>,
    ) {
        debug_assert!(pivot_row < self.nr_rows);
        debug_assert!(column < self.nr_columns);
        debug_assert!(self.data[pivot_row][column] == F::one());

        for row in rows {
            if row == pivot_row {
                continue;
            }

            let factor = self.data[row][column];
            if factor != F::zero() {
                self.mul_add_rows(pivot_row, row, -factor);
                self.data[row][column] = F::zero();
            }
        }
    }

    /// Make the element at (`i`, `j`) non-zero by adding a row below it.
    ///
    /// The row added is the first one below `i` with a non-zero value in column `j`. Nothing
    /// happens when the element is non-zero already.
    ///
    /// # Return value
    ///
    /// Whether the element is non-zero afterwards.
    pub fn make_element_non_zero_using_row(&mut self, i: usize, j: usize) -> bool {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        if self.data[i][j] != F::zero() {
            return true;
        }

        match self.first_non_zero_element_in_column(j, i + 1).index {
            Some(source) => {
                self.mul_add_rows(source, i, F::one());
                true
            },
            None => false,
        }
    }
}

/// Scanning for zero and non-zero elements.
impl<F: Real> DenseMatrix<F> {
    /// Whether row `i` is zero from column `start` onwards.
    pub fn all_elements_zero_in_row(&self, i: usize, start: usize) -> bool {
        debug_assert!(i < self.nr_rows);
        debug_assert!(start <= self.nr_columns);

        self.data[i][start..].iter().all(|&value| value == F::zero())
    }

    /// Whether column `j` is zero from row `start` downwards.
    pub fn all_elements_zero_in_column(&self, j: usize, start: usize) -> bool {
        debug_assert!(j < self.nr_columns);
        debug_assert!(start <= self.nr_rows);

        self.data[start..].iter().all(|row| row[j] == F::zero())
    }

    /// First non-zero element in column `j`, starting the search at row `start`.
    ///
    /// # Return value
    ///
    /// The row index and value of that element, or an absent index with a zero value if the
    /// column is zero from `start` downwards.
    pub fn first_non_zero_element_in_column(&self, j: usize, start: usize) -> IndexElementPair<F> {
        self.first_element_beyond(j, start, F::zero())
    }

    /// First element in column `j`, from row `start` downwards, with an absolute value strictly
    /// larger than `tolerance`.
    pub(crate) fn first_element_beyond(
        &self,
        j: usize,
        start: usize,
        tolerance: F,
    ) -> IndexElementPair<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().enumerate()
            .skip(start)
            .map(|(i, row)| (i, row[j]))
            .find(|&(_, value)| value.abs() > tolerance)
            .map_or_else(
                || IndexElementPair::none(F::zero()),
                |(i, value)| IndexElementPair::new(i, value),
            )
    }
}

impl<F: Real> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let rows = self.data.iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join("\n");
        write!(f, "{}", rows)
    }
}

/// If all row lengths agree, return the dimensions of `data`.
fn data_dimensions<F>(data: &[Vec<F>]) -> Result<(usize, usize), LinearAlgebraError> {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);
    if nr_rows == 0 || nr_columns == 0 {
        return Err(LinearAlgebraError::Empty);
    }

    match data.iter().map(Vec::len).enumerate().find(|&(_, length)| length != nr_columns) {
        Some((row, actual)) => Err(LinearAlgebraError::Ragged { row, expected: nr_columns, actual }),
        None => Ok((nr_rows, nr_columns)),
    }
}
