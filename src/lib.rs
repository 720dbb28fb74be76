//! # Dense matrices and a two phase Simplex solver
//!
//! Linear programs of the form
//!
//! ```text
//! max c x
//! s.t. A x <= b
//!        x >= 0
//! ```
//!
//! are solved with the two phase Simplex method on an explicit, dense tableau. The matrix type
//! that holds the tableau is usable on its own: it offers elementwise algebra, multiplication,
//! determinants, inverses and row echelon reduction.
//!
//! ```
//! use dense_simplex::algorithm::two_phase::Simplex;
//! use dense_simplex::data::linear_program::LinearProgram;
//! use dense_simplex::data::linear_program::solution::Status;
//!
//! let program = LinearProgram::from_data(
//!     vec![2_f64, 5_f64],
//!     vec![vec![2_f64, -1_f64], vec![1_f64, 2_f64], vec![-1_f64, 2_f64]],
//!     vec![4_f64, 9_f64, 3_f64],
//! ).unwrap();
//! let result = Simplex::new(&program).run().unwrap();
//! assert_eq!(result.status(), Status::Successful);
//! assert!((result.value() - 21_f64).abs() < 1e-9);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
