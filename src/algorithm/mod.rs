//! # Algorithms
use crate::algorithm::two_phase::Simplex;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::LinearProgrammingResult;
use crate::data::number_types::traits::Real;
use crate::error::LinearProgramError;

pub mod two_phase;

/// A problem formulation that can be solved.
pub trait Solve<F> {
    /// Solve this problem with default settings.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    fn solve(&self) -> Result<LinearProgrammingResult<F>, LinearProgramError>;
}

impl<F: Real> Solve<F> for LinearProgram<F> {
    fn solve(&self) -> Result<LinearProgrammingResult<F>, LinearProgramError> {
        Simplex::new(self).run()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::Solve;
    use crate::data::linear_program::solution::Status;
    use crate::tests::problem_2;

    #[test]
    fn solve() {
        let result = problem_2::create_program().solve().unwrap();
        assert_eq!(result.status(), Status::Successful);
    }
}
