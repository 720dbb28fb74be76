//! # Representing linear programs
//!
//! A linear program in the form
//!
//! ```text
//! max c x
//! s.t. A x <= b
//!        x >= 0
//! ```
//!
//! together with its dual and textual renderings of both.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Real;
use crate::error::LinearProgramError;

pub mod solution;

/// A maximization problem with `<=` constraints on non-negative variables.
///
/// The shapes of the cost vector, the constraint matrix and the right-hand side agree; this is
/// checked when the program is created.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    /// Cost vector of length `n`.
    c: Vec<F>,
    /// Constraint matrix of size `m` x `n`.
    a: DenseMatrix<F>,
    /// Right-hand side of length `m`.
    b: Vec<F>,
}

impl<F: Real> LinearProgram<F> {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `c`: Coefficients of the objective function, one per variable.
    /// * `a`: Constraint matrix, one row per constraint.
    /// * `b`: Right-hand side, one value per constraint. May contain negative values.
    ///
    /// # Errors
    ///
    /// `Dimension` if the lengths of `b` and `c` don't match the size of `a`.
    pub fn new(c: Vec<F>, a: DenseMatrix<F>, b: Vec<F>) -> Result<Self, LinearProgramError> {
        if a.nr_rows() != b.len() || a.nr_columns() != c.len() {
            return Err(LinearProgramError::Dimension {
                nr_rows: a.nr_rows(),
                nr_columns: a.nr_columns(),
                b_len: b.len(),
                c_len: c.len(),
            });
        }

        Ok(Self { c, a, b })
    }

    /// Create a new linear program from the rows of the constraint matrix.
    ///
    /// # Errors
    ///
    /// If the rows don't form a matrix, or if the dimensions don't agree.
    pub fn from_data(c: Vec<F>, a: Vec<Vec<F>>, b: Vec<F>) -> Result<Self, LinearProgramError> {
        Self::new(c, DenseMatrix::new(a)?, b)
    }

    /// Cost vector.
    pub fn c(&self) -> &[F] {
        &self.c
    }

    /// Constraint matrix.
    pub fn a(&self) -> &DenseMatrix<F> {
        &self.a
    }

    /// Right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Number of variables `n`, excluding the slacks.
    pub fn nr_variables(&self) -> usize {
        self.c.len()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }

    /// The dual program, written as a maximization problem of the same shape.
    ///
    /// The dual `min b y s.t. A^T y >= c, y >= 0` is equivalent to
    /// `max -b y s.t. -A^T y <= -c, y >= 0`, which is what is returned. Its optimal value is the
    /// negation of the optimal value of the dual, so for a feasible and bounded program the optimal
    /// values of the program and the returned program sum to zero.
    pub fn dual(&self) -> Self {
        Self {
            c: self.b.iter().map(|&value| -value).collect(),
            a: self.a.transpose().scalar_multiply(-F::one()),
            b: self.c.iter().map(|&value| -value).collect(),
        }
    }

    /// Textual rendering of the dual, see `DualFormulation`.
    pub fn dual_formulation(&self) -> DualFormulation<'_, F> {
        DualFormulation { program: self }
    }

    /// Value `c x` of the objective function.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        dot(&self.c, x)
    }

    /// Whether `x` satisfies all constraints, allowing violations of at most `tolerance`.
    pub fn is_feasible(&self, x: &[F], tolerance: F) -> bool {
        x.len() == self.nr_variables()
            && x.iter().all(|&value| value >= -tolerance)
            && self.a.rows().zip(&self.b).all(|(row, &bound)| dot(row, x) <= bound + tolerance)
    }
}

fn dot<F: Real>(left: &[F], right: &[F]) -> F {
    left.iter().zip(right)
        .map(|(&l, &r)| l * r)
        .fold(F::zero(), |total, term| total + term)
}

/// Render a linear combination like `(2*x0)+(-1*x1)`.
pub(crate) fn linear_combination<F: Display>(
    coefficients: impl IntoIterator<Item = F>,
    variable: char,
) -> String {
    coefficients.into_iter().enumerate()
        .map(|(j, coefficient)| format!("({}*{}{})", coefficient, variable, j))
        .join("+")
}

fn non_negativity(nr_variables: usize, variable: char) -> String {
    format!("{} >= 0", (0..nr_variables).map(|j| format!("{}{}", variable, j)).join(", "))
}

impl<F: Real> Display for LinearProgram<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "max {}", linear_combination(self.c.iter(), 'x'))?;
        for (row, bound) in self.a.rows().zip(&self.b) {
            writeln!(f, "{} <= {}", linear_combination(row.iter(), 'x'), bound)?;
        }
        write!(f, "{}", non_negativity(self.nr_variables(), 'x'))
    }
}

/// The dual of a linear program in its natural minimization form:
///
/// ```text
/// min b y
/// s.t. A^T y >= c
///          y >= 0
/// ```
///
/// Only used for display, see `LinearProgram::dual` for a solvable version.
#[derive(Debug, Clone, Copy)]
pub struct DualFormulation<'a, F> {
    program: &'a LinearProgram<F>,
}

impl<F: Real> Display for DualFormulation<'_, F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let program = self.program;

        writeln!(f, "min {}", linear_combination(program.b.iter(), 'y'))?;
        for (j, bound) in program.c.iter().enumerate() {
            writeln!(f, "{} >= {}", linear_combination(program.a.column(j), 'y'), bound)?;
        }
        write!(f, "{}", non_negativity(program.nr_constraints(), 'y'))
    }
}
