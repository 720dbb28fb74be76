//! # Small programs with a known outcome
//!
//! Each of the three possible outcomes of the solver, as well as degeneracy and infeasible origins,
//! and the textual renderings of programs and results.
use dense_simplex::data::linear_program::LinearProgram;
use dense_simplex::data::linear_program::solution::LinearProgrammingResult;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Tolerance used when comparing computed values.
const EPSILON: f64 = 1e-9;

/// Create a program from literal data.
fn program(c: &[f64], a: &[&[f64]], b: &[f64]) -> LinearProgram<f64> {
    LinearProgram::from_data(
        c.to_vec(),
        a.iter().map(|row| row.to_vec()).collect(),
        b.to_vec(),
    ).unwrap()
}

/// Verify that the solution values satisfy all constraints and attain the reported value.
fn assert_consistent(program: &LinearProgram<f64>, result: &LinearProgrammingResult<f64>) {
    assert_eq!(result.x_values().len(), program.nr_variables());
    assert!(program.is_feasible(result.x_values(), EPSILON));
    approx::assert_abs_diff_eq!(
        result.objective_value_of(result.x_values()),
        result.value(),
        epsilon = EPSILON,
    );
}
