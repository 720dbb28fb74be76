//! # Representation of solver outcomes
//!
//! Every run of the solver produces a result, also when the problem turns out to be infeasible or
//! unbounded. Such outcomes are described by the `Status` of the result.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::linear_program::linear_combination;
use crate::data::number_types::traits::Real;

/// Terminal state of the solver.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Successful,
    Unbounded,
    Unfeasible,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            Status::Successful => "SUCCESSFUL",
            Status::Unbounded => "UNBOUNDED",
            Status::Unfeasible => "UNFEASIBLE",
        })
    }
}

/// Outcome of solving a linear program.
///
/// The meaning of the values depends on the status:
///
/// * `Successful`: `value` is the optimal objective value attained by `x_values`.
/// * `Unbounded`: `value` is positive infinity, `x_values` is the vertex at which an improving
/// direction without bound was found.
/// * `Unfeasible`: `value` is negative infinity and `x_values` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgrammingResult<F> {
    value: F,
    x_values: Vec<F>,
    status: Status,
    /// Cost vector of the program that was solved, kept for display and verification.
    c: Vec<F>,
}

impl<F: Real> LinearProgrammingResult<F> {
    /// Create a new result with status `Successful`.
    ///
    /// # Arguments
    ///
    /// * `value`: Objective value.
    /// * `x_values`: Value of each of the original variables.
    /// * `c`: Cost vector of the program.
    pub fn new(value: F, x_values: Vec<F>, c: Vec<F>) -> Self {
        Self { value, x_values, status: Status::Successful, c }
    }

    /// Result for a program without feasible solutions.
    pub fn unfeasible(c: Vec<F>) -> Self {
        Self { value: F::neg_infinity(), x_values: Vec::new(), status: Status::Unfeasible, c }
    }

    /// Change the status.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Objective value.
    pub fn value(&self) -> F {
        self.value
    }

    /// Values of the original variables.
    pub fn x_values(&self) -> &[F] {
        &self.x_values
    }

    /// Terminal state of the solver.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Cost vector of the program that was solved.
    pub fn c(&self) -> &[F] {
        &self.c
    }

    /// Recompute `c x` for a vector `x`, typically `self.x_values()`.
    pub fn objective_value_of(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.c.len());

        self.c.iter().zip(x)
            .map(|(&cost, &value)| cost * value)
            .fold(F::zero(), |total, term| total + term)
    }
}

impl<F: Real> Display for LinearProgrammingResult<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(
            f,
            "{}",
            self.x_values.iter().enumerate().map(|(j, value)| format!("x{}={}", j, value)).join(", "),
        )?;
        writeln!(f, "max {} = {}", linear_combination(self.c.iter(), 'x'), self.value)?;
        write!(f, "Status: {}", self.status)
    }
}
