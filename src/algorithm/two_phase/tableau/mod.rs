//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is a dense matrix with one row per constraint and a final objective row. The last
//! column holds the right-hand side. The objective row contains the relative costs in maximization
//! form: a positive value means that bringing that column into the basis improves the objective.
//! The right-hand side of the objective row is the negated objective value.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter;
use std::ops::Range;

use itertools::Itertools;
use log::trace;

use crate::data::linear_algebra::IndexElementPair;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Real;
use crate::error::LinearAlgebraError;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// Holds a basis column for each constraint row. That column is a unit column with its one in
/// that row, and has a zero relative cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau<F> {
    /// Constraint rows followed by the objective row, right-hand side in the last column.
    matrix: DenseMatrix<F>,
    /// Basis column index for each constraint row.
    basis: Vec<usize>,
}

impl<F: Real> Tableau<F> {
    /// Create a new tableau.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Constraint rows, objective row and a right-hand side column.
    /// * `basis`: For every constraint row, the column that is a unit column with its one in that
    /// row.
    pub(crate) fn new(matrix: DenseMatrix<F>, basis: Vec<usize>) -> Self {
        debug_assert_eq!(basis.len() + 1, matrix.nr_rows());
        debug_assert!(basis.iter().all(|&j| j + 1 < matrix.nr_columns()));

        Self { matrix, basis }
    }

    /// Number of constraint rows, excluding the objective row.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variable columns, excluding the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }

    fn objective_row(&self) -> usize {
        self.nr_rows()
    }

    fn rhs_column(&self) -> usize {
        self.nr_columns()
    }

    /// Entry of the constraint part of the tableau.
    pub fn element(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.matrix.value(i, j)
    }

    /// Relative cost of a column, positive if increasing that variable improves the objective.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.matrix.value(self.objective_row(), j)
    }

    /// Right-hand side value of a constraint row, the value of the basic variable of that row.
    pub fn constraint_value(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        self.matrix.value(i, self.rhs_column())
    }

    /// Objective value of the current basic solution.
    ///
    /// A zero value is positive zero.
    pub fn objective_function_value(&self) -> F {
        F::zero() - self.matrix.value(self.objective_row(), self.rhs_column())
    }

    /// Column that is basic in row `i`.
    pub fn basis_column(&self, i: usize) -> usize {
        debug_assert!(i < self.nr_rows());

        self.basis[i]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, j: usize) -> bool {
        debug_assert!(j < self.nr_columns());

        self.basis.contains(&j)
    }

    /// Row in which column `j` is a unit column, if it is one.
    ///
    /// A unit column has a one in exactly one constraint row and a zero in all other rows,
    /// including the objective row. This is a property of the matrix only; the basis bookkeeping
    /// is not consulted.
    pub fn basic_row(&self, j: usize) -> Option<usize> {
        debug_assert!(j < self.nr_columns());

        if self.relative_cost(j) != F::zero() {
            return None;
        }

        let mut row = None;
        for i in 0..self.nr_rows() {
            let value = self.element(i, j);
            if value == F::one() && row.is_none() {
                row = Some(i);
            } else if value != F::zero() {
                return None;
            }
        }

        row
    }

    /// Values of the first `nr_variables` variables in the current basic solution.
    ///
    /// Non-basic variables are zero.
    pub fn current_bfs(&self, nr_variables: usize) -> Vec<F> {
        debug_assert!(nr_variables <= self.nr_columns());

        let mut values = vec![F::zero(); nr_variables];
        for (i, &j) in self.basis.iter().enumerate() {
            if j < nr_variables {
                values[j] = self.constraint_value(i);
            }
        }

        values
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between its right-hand side and the entry in the
    /// pivot column, among the rows where that entry is larger than `tolerance`. Slightly negative
    /// right-hand sides are read as zero. Ties are broken in favor of the lowest row index.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on with its ratio. If there is no such row, the index is absent,
    /// the ratio is infinite and the column can be increased without bound.
    pub fn select_primal_pivot_row(&self, column: usize, tolerance: F) -> IndexElementPair<F> {
        debug_assert!(column < self.nr_columns());

        let mut chosen = IndexElementPair::none(F::infinity());
        for row in 0..self.nr_rows() {
            let xij = self.element(row, column);
            if xij > tolerance {
                let ratio = max_zero(self.constraint_value(row)) / xij;
                if chosen.is_none() || ratio < chosen.element {
                    chosen = IndexElementPair::new(row, ratio);
                }
            }
        }

        chosen
    }

    /// Brings a column into the basis by pivoting on the element at (`pivot_row`, `pivot_column`).
    ///
    /// Afterwards, the pivot column is exactly the unit vector of the pivot row, including a
    /// zero relative cost.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());

        let pivot = self.matrix.value(pivot_row, pivot_column);
        debug_assert!(pivot != F::zero());
        trace!(
            "Pivot on ({}, {}) with value {}: column {} leaves the basis",
            pivot_row, pivot_column, pivot, self.basis[pivot_row],
        );

        let objective_row = self.objective_row();
        self.matrix.scale_row(pivot_row, pivot.recip());
        self.matrix.set_value(pivot_row, pivot_column, F::one());
        self.matrix.make_elements_zero_using_row(pivot_row, pivot_column, 0..=objective_row);

        self.basis[pivot_row] = pivot_column;
    }

    /// Make the relative cost of every basis column zero by subtracting multiples of constraint
    /// rows from the objective row.
    pub(crate) fn price_out(&mut self) {
        let objective_row = self.objective_row();
        for (i, &j) in self.basis.iter().enumerate() {
            let cost = self.matrix.value(objective_row, j);
            if cost != F::zero() {
                self.matrix.mul_add_rows(i, objective_row, -cost);
                self.matrix.set_value(objective_row, j, F::zero());
            }
        }
    }

    /// Overwrite the right-hand side of a constraint row.
    pub(crate) fn set_constraint_value(&mut self, i: usize, value: F) {
        debug_assert!(i < self.nr_rows());

        let rhs_column = self.rhs_column();
        self.matrix.set_value(i, rhs_column, value);
    }

    /// Remove a range of non-basic columns, shifting the columns after it to the left.
    pub(crate) fn remove_columns(&mut self, columns: Range<usize>) -> Result<(), LinearAlgebraError> {
        debug_assert!(columns.end <= self.nr_columns());
        debug_assert!(self.basis.iter().all(|j| !columns.contains(j)));

        let (width, end) = (columns.len(), columns.end);
        for j in columns.rev() {
            self.matrix.delete_column(j)?;
        }
        for j in &mut self.basis {
            if *j >= end {
                *j -= width;
            }
        }

        Ok(())
    }

    /// Replace the objective row by `costs` and price it out against the current basis.
    ///
    /// # Arguments
    ///
    /// * `costs`: Cost of each column in maximization form; the objective value starts at zero.
    pub(crate) fn replace_objective(&mut self, costs: &[F]) -> Result<(), LinearAlgebraError> {
        let row = costs.iter().copied().chain(iter::once(F::zero())).collect();
        let row = DenseMatrix::row_vector(row)?;

        self.matrix.delete_last_row()?;
        self.matrix = self.matrix.merge_vertical(&row)?;
        self.price_out();

        Ok(())
    }
}

fn max_zero<F: Real>(value: F) -> F {
    if value > F::zero() { value } else { F::zero() }
}

/// Check whether the tableau currently has a valid basic solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_solution_state<F: Real>(tableau: &Tableau<F>) {
    // Basis columns are unique
    for i in 0..tableau.nr_rows() {
        for k in (i + 1)..tableau.nr_rows() {
            debug_assert_ne!(tableau.basis[i], tableau.basis[k]);
        }
    }

    // Basis columns are unit columns in the row they are registered for
    (0..tableau.nr_rows())
        .map(|i| (i, tableau.basis[i]))
        .for_each(|(i, j)| debug_assert_eq!(
            tableau.basic_row(j), Some(i),
            "Column {} is not equal to e_{}", j, i,
        ));
}

impl<F: Real> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        writeln!(f, "{}", self.matrix)?;
        writeln!(f, "objective value: {}", self.objective_function_value())?;
        let basis = self.basis.iter().enumerate()
            .map(|(i, j)| format!("{}: x{}", i, j))
            .join(", ");
        writeln!(f, "basis: {}", basis)
    }
}
