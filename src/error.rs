//! # Error reporting
//!
//! Violations of dimension contracts, singular inversions and an exhausted iteration budget.
//!
//! Infeasible or unbounded linear programs are not errors: they are regular outcomes of the
//! solver, see `Status`.
use thiserror::Error;

/// Errors raised by the dense matrix operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinearAlgebraError {
    /// A matrix needs at least one row and one column.
    #[error("matrix must have at least one row and one column")]
    Empty,

    /// Not all rows have the same length.
    #[error("row {row} has length {actual}, expected {expected}")]
    Ragged {
        /// Index of the first row with a deviating length.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the deviating row.
        actual: usize,
    },

    /// The dimensions of two operands are incompatible.
    #[error("incompatible matrix dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    DimensionMismatch {
        /// Rows in the first matrix.
        rows1: usize,
        /// Columns in the first matrix.
        cols1: usize,
        /// Rows in the second matrix.
        rows2: usize,
        /// Columns in the second matrix.
        cols2: usize,
    },

    /// A row or column of the wrong length was provided.
    #[error("expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Length required by the matrix.
        expected: usize,
        /// Length provided.
        actual: usize,
    },

    /// A row or column index is out of range.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of rows or columns.
        len: usize,
    },

    /// The operation is only defined for square matrices.
    #[error("matrix of size {nr_rows}x{nr_columns} is not square")]
    NotSquare {
        /// Rows in the matrix.
        nr_rows: usize,
        /// Columns in the matrix.
        nr_columns: usize,
    },

    /// The determinant is zero, so there is no inverse.
    #[error("singular matrix: cannot invert")]
    Singular,
}

/// Errors raised while building or solving a linear program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinearProgramError {
    /// The shapes of `c`, `A` and `b` don't agree.
    #[error(
        "constraint matrix is {nr_rows}x{nr_columns}, but b has length {b_len} and c has length {c_len}"
    )]
    Dimension {
        /// Rows in the constraint matrix.
        nr_rows: usize,
        /// Columns in the constraint matrix.
        nr_columns: usize,
        /// Length of the right-hand side.
        b_len: usize,
        /// Length of the cost vector.
        c_len: usize,
    },

    /// A matrix operation failed while the problem was set up.
    #[error(transparent)]
    LinearAlgebra(#[from] LinearAlgebraError),

    /// The configured maximum number of pivots was reached before a terminal state.
    #[error("no terminal state reached within {iterations} pivots")]
    IterationLimit {
        /// Number of pivots performed.
        iterations: usize,
    },
}
