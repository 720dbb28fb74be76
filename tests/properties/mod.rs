//! # Properties that hold for all inputs
//!
//! Random small matrices and linear programs with integer coefficients, such that the exact
//! answers are well conditioned.
use proptest::collection::vec;
use proptest::prelude::*;

use dense_simplex::data::linear_algebra::matrix::DenseMatrix;
use dense_simplex::data::linear_program::LinearProgram;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Rows of a `nr_rows` x `nr_columns` matrix with entries in `values`.
fn rows(
    nr_rows: usize,
    nr_columns: usize,
    values: std::ops::RangeInclusive<i32>,
) -> impl Strategy<Value = Vec<Vec<f64>>> {
    vec(vec(values.prop_map(f64::from), nr_columns), nr_rows)
}

/// Square matrices of size one to four with a non-zero determinant.
fn non_singular_matrix() -> impl Strategy<Value = DenseMatrix<f64>> {
    (1usize..=4)
        .prop_flat_map(|size| rows(size, size, -5..=5))
        .prop_filter_map("singular", |data| {
            let matrix = DenseMatrix::new(data).ok()?;
            // Integer entries, so a non-zero determinant is at least one in absolute value
            (matrix.determinant().ok()?.abs() > 0.5).then_some(matrix)
        })
}

/// A matrix together with the same rows in a shuffled order.
fn matrix_and_row_permutation() -> impl Strategy<Value = (DenseMatrix<f64>, DenseMatrix<f64>)> {
    (1usize..=5, 1usize..=5)
        .prop_flat_map(|(nr_rows, nr_columns)| rows(nr_rows, nr_columns, -3..=3))
        .prop_flat_map(|data| (Just(data.clone()), Just(data).prop_shuffle()))
        .prop_map(|(data, shuffled)| {
            (DenseMatrix::new(data).unwrap(), DenseMatrix::new(shuffled).unwrap())
        })
}

/// Programs with positive coefficients: the origin is feasible and every variable is bounded.
fn positive_program() -> impl Strategy<Value = LinearProgram<f64>> {
    (1usize..=4, 1usize..=4)
        .prop_flat_map(|(m, n)| (
            vec((1..=5).prop_map(f64::from), n),
            rows(m, n, 1..=5),
            vec((1..=10).prop_map(f64::from), m),
        ))
        .prop_map(|(c, a, b)| LinearProgram::from_data(c, a, b).unwrap())
}

/// Programs with mixed signs: any of the three outcomes is possible.
fn mixed_program() -> impl Strategy<Value = LinearProgram<f64>> {
    (1usize..=4, 1usize..=4)
        .prop_flat_map(|(m, n)| (
            vec((-5..=5).prop_map(f64::from), n),
            rows(m, n, -5..=5),
            vec((-5..=10).prop_map(f64::from), m),
        ))
        .prop_map(|(c, a, b)| LinearProgram::from_data(c, a, b).unwrap())
}
