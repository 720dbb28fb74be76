//! # Phase one: finding a basic feasible solution
//!
//! An artificial variable is added to every constraint. Maximizing the negated sum of the
//! artificial variables drives them to zero if the program is feasible.
use log::{debug, warn};

use crate::algorithm::two_phase::{primal, Termination};
use crate::algorithm::two_phase::config::SimplexConfig;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::traits::Real;
use crate::error::LinearProgramError;

/// Build the tableau of the artificial problem.
///
/// Columns are ordered as the original variables, one slack per constraint, one artificial
/// variable per constraint, and the right-hand side. Constraints with a negative right-hand side
/// are negated, such that the artificial variables form a feasible basis. The objective row is
/// priced out against that basis.
pub(crate) fn build<F: Real>(program: &LinearProgram<F>) -> Result<Tableau<F>, LinearProgramError> {
    let (m, n) = (program.nr_constraints(), program.nr_variables());
    let negative_rows = program.b().iter()
        .enumerate()
        .filter(|&(_, &value)| value < F::zero())
        .map(|(i, _)| i)
        .collect::<Vec<_>>();

    let mut artificial = DenseMatrix::identity(m);
    for &i in &negative_rows {
        artificial.set_value(i, i, -F::one());
    }
    let rhs = DenseMatrix::column_vector(program.b().to_vec())?;
    let constraints = program.a()
        .merge_horizontal(&DenseMatrix::identity(m))?
        .merge_horizontal(&artificial)?
        .merge_horizontal(&rhs)?;

    let objective = DenseMatrix::zeros(1, n + m)
        .merge_horizontal(&DenseMatrix::constant_row(-F::one(), m))?
        .merge_horizontal(&DenseMatrix::zeros(1, 1))?;

    let mut matrix = constraints.merge_vertical(&objective)?;
    for &i in &negative_rows {
        matrix.scale_row(i, -F::one());
    }

    let mut tableau = Tableau::new(matrix, (n + m..n + 2 * m).collect());
    tableau.price_out();

    Ok(tableau)
}

/// Outcome of the first phase.
#[derive(Debug, PartialEq)]
pub(crate) enum FeasibilityResult<F> {
    /// A basic feasible solution without artificial variables in the basis was found. The
    /// tableau has only original and slack variables in the basis.
    Feasible(Tableau<F>),
    /// The program has no feasible solutions.
    Infeasible,
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the original program is found.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau as created by `build`.
/// * `first_artificial`: Index of the first artificial column.
///
/// The artificial cost and the artificial values are compared against the tolerance scaled by the
/// largest right-hand side, as round-off in the phase one tableau grows with it.
///
/// # Errors
///
/// When the iteration limit is reached.
pub(crate) fn compute_bfs<F, PR>(
    mut tableau: Tableau<F>,
    first_artificial: usize,
    config: &SimplexConfig<F>,
    pivots: &mut usize,
) -> Result<FeasibilityResult<F>, LinearProgramError>
where
    F: Real,
    PR: PivotRule<F>,
{
    let threshold = config.tolerance * rhs_scale(&tableau);

    match primal::<F, PR>(&mut tableau, config, pivots)? {
        Termination::Optimal => {},
        Termination::Unbounded => {
            warn!("Artificial cost can not be unbounded, reporting the program as infeasible");
            return Ok(FeasibilityResult::Infeasible);
        },
    }

    let value = tableau.objective_function_value();
    let artificial_values_zero = (0..tableau.nr_rows())
        .filter(|&i| tableau.basis_column(i) >= first_artificial)
        .all(|i| tableau.constraint_value(i) <= threshold);
    if value.abs() > threshold || !artificial_values_zero {
        debug!("Phase one ended with artificial cost {}: infeasible", value);
        return Ok(FeasibilityResult::Infeasible);
    }

    remove_artificial_basis_variables(&mut tableau, first_artificial);
    debug!("Phase one found a basic feasible solution after {} pivots", pivots);

    Ok(FeasibilityResult::Feasible(tableau))
}

/// The largest right-hand side of the constraint rows, but at least one.
fn rhs_scale<F: Real>(tableau: &Tableau<F>) -> F {
    (0..tableau.nr_rows())
        .map(|i| tableau.constraint_value(i).abs())
        .fold(F::one(), |scale, value| scale.max(value))
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// Every constraint row has a slack column, so the rows of the tableau restricted to the original
/// and slack columns are linearly independent. A row with a basic artificial variable therefore
/// has a non-zero entry in a non-basic original or slack column; the largest one is pivoted on.
fn remove_artificial_basis_variables<F: Real>(tableau: &mut Tableau<F>, first_artificial: usize) {
    for row in 0..tableau.nr_rows() {
        if tableau.basis_column(row) < first_artificial {
            continue;
        }

        // The artificial variable is still basic, at a level of at most the threshold
        tableau.set_constraint_value(row, F::zero());
        let mut pivot: Option<(usize, F)> = None;
        for column in (0..first_artificial).filter(|&j| !tableau.is_in_basis(j)) {
            let value = tableau.element(row, column).abs();
            if pivot.is_none_or(|(_, largest)| value > largest) {
                pivot = Some((column, value));
            }
        }

        if let Some((column, value)) = pivot {
            debug_assert!(value > F::zero());
            tableau.bring_into_basis(column, row);
        }
    }
}
