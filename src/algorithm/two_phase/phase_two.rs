//! # Phase two: optimizing the original objective
use log::debug;

use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_solution_state, Tableau};
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::traits::Real;
use crate::error::LinearProgramError;

/// Create the tableau of the original program from the final tableau of phase one.
///
/// The artificial columns are removed, and the objective row is replaced by the costs of the
/// program, priced out against the basis that phase one found.
///
/// # Arguments
///
/// * `tableau`: Phase one tableau without artificial variables in the basis.
/// * `program`: The program being solved.
pub(crate) fn from_artificial<F: Real>(
    mut tableau: Tableau<F>,
    program: &LinearProgram<F>,
) -> Result<Tableau<F>, LinearProgramError> {
    let (m, n) = (program.nr_constraints(), program.nr_variables());
    debug_assert_eq!(tableau.nr_columns(), n + 2 * m);

    tableau.remove_columns(n + m..n + 2 * m)?;

    let mut costs = program.c().to_vec();
    costs.resize(n + m, F::zero());
    tableau.replace_objective(&costs)?;

    debug_assert_in_basic_solution_state(&tableau);
    debug!(
        "Phase two starts with {} rows, objective value {}",
        tableau.nr_rows(), tableau.objective_function_value(),
    );

    Ok(tableau)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::config::SimplexConfig;
    use crate::algorithm::two_phase::phase_one::{build, compute_bfs, FeasibilityResult};
    use crate::algorithm::two_phase::phase_two::from_artificial;
    use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
    use crate::tests::problem_4;

    #[test]
    fn from_phase_one() {
        let program = problem_4::create_program();
        let tableau = build(&program).unwrap();
        let mut pivots = 0;
        let result = compute_bfs::<_, FirstProfitable>(tableau, 10, &SimplexConfig::default(), &mut pivots);

        let Ok(FeasibilityResult::Feasible(tableau)) = result else {
            panic!("the program is feasible");
        };
        let tableau = from_artificial(tableau, &program).unwrap();

        assert_eq!(tableau.nr_columns(), 10);
        assert_eq!(tableau.nr_rows(), 5);
        // The basic solution of phase one is feasible for the program
        let x = tableau.current_bfs(5);
        assert!(program.is_feasible(&x, 1e-9));
        assert_abs_diff_eq!(tableau.objective_function_value(), program.objective_value(&x), epsilon = 1e-9);
        for i in 0..tableau.nr_rows() {
            assert_abs_diff_eq!(tableau.relative_cost(tableau.basis_column(i)), 0f64);
        }
    }
}
