//! # The Simplex algorithm
//!
//! The two phase Simplex method on a dense tableau. The first phase searches a basic feasible
//! solution using artificial variables, the second phase optimizes the objective of the program
//! starting from that solution.
//!
//! Both the entering column and the leaving row are chosen by a first index wins rule by default.
//! For degenerate programs, this decides which of several optimal vertices is returned; the
//! optimal value does not depend on it.
use std::marker::PhantomData;

use log::{debug, warn};

use crate::algorithm::two_phase::config::SimplexConfig;
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_solution_state, Tableau};
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::{LinearProgrammingResult, Status};
use crate::data::number_types::traits::Real;
use crate::error::LinearProgramError;

pub mod config;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// Solver for a single linear program.
///
/// The pivot rule used for choosing entering columns is a type parameter.
///
/// # Example
///
/// ```
/// use dense_simplex::algorithm::two_phase::Simplex;
/// use dense_simplex::algorithm::two_phase::config::SimplexConfig;
/// use dense_simplex::algorithm::two_phase::strategy::pivot_rule::SteepestDescentAlongVariable;
/// use dense_simplex::data::linear_program::LinearProgram;
/// use dense_simplex::data::linear_program::solution::Status;
///
/// let program = LinearProgram::from_data(
///     vec![2_f64, 1_f64],
///     vec![vec![-1_f64, 1_f64], vec![1_f64, -2_f64]],
///     vec![1_f64, 2_f64],
/// ).unwrap();
/// let config = SimplexConfig::default().with_max_iterations(100);
/// let result = Simplex::<_, SteepestDescentAlongVariable>::with_config(&program, config)
///     .run()
///     .unwrap();
/// assert_eq!(result.status(), Status::Unbounded);
/// ```
#[derive(Debug)]
pub struct Simplex<'a, F, PR = FirstProfitable> {
    program: &'a LinearProgram<F>,
    config: SimplexConfig<F>,
    pivot_rule: PhantomData<PR>,
}

impl<'a, F: Real> Simplex<'a, F> {
    /// Solver with the default configuration and the `FirstProfitable` pivot rule.
    ///
    /// The number of pivots is limited by `SimplexConfig::iteration_limit`, so that `run` returns
    /// an `IterationLimit` error instead of cycling forever on a degenerate program.
    pub fn new(program: &'a LinearProgram<F>) -> Self {
        Self::with_config(program, SimplexConfig::default())
    }
}

impl<'a, F: Real, PR: PivotRule<F>> Simplex<'a, F, PR> {
    /// Solver with a specific configuration.
    pub fn with_config(program: &'a LinearProgram<F>, config: SimplexConfig<F>) -> Self {
        Self { program, config, pivot_rule: PhantomData }
    }

    /// The tableau with which the first phase starts.
    ///
    /// Exposed for inspection; `run` builds its own.
    pub fn build_phase_one(&self) -> Result<Tableau<F>, LinearProgramError> {
        phase_one::build(self.program)
    }

    /// Solve the program.
    ///
    /// # Return value
    ///
    /// A result with status `Successful`, `Unbounded` or `Unfeasible`.
    ///
    /// # Errors
    ///
    /// `IterationLimit` if the maximum number of pivots was reached before both phases
    /// terminated.
    pub fn run(&self) -> Result<LinearProgrammingResult<F>, LinearProgramError> {
        let (m, n) = (self.program.nr_constraints(), self.program.nr_variables());
        let c = self.program.c().to_vec();
        let config = SimplexConfig {
            max_iterations: Some(self.config.iteration_limit(n + 2 * m)),
            ..self.config
        };
        let mut pivots = 0;

        debug!("Phase one: {} constraints, {} variables", m, n);
        let tableau = self.build_phase_one()?;
        let feasibility = phase_one::compute_bfs::<F, PR>(tableau, n + m, &config, &mut pivots)?;
        let tableau = match feasibility {
            FeasibilityResult::Feasible(tableau) => tableau,
            FeasibilityResult::Infeasible => {
                debug!("Infeasible after {} pivots", pivots);
                return Ok(LinearProgrammingResult::unfeasible(c));
            },
        };

        let mut tableau = phase_two::from_artificial(tableau, self.program)?;
        let termination = primal::<F, PR>(&mut tableau, &config, &mut pivots)?;
        let x_values = tableau.current_bfs(n);

        let result = match termination {
            Termination::Optimal => {
                let value = tableau.objective_function_value();
                debug!("Optimal value {} after {} pivots", value, pivots);
                LinearProgrammingResult::new(value, x_values, c)
            },
            Termination::Unbounded => {
                debug!("Unbounded after {} pivots", pivots);
                let mut result = LinearProgrammingResult::new(F::infinity(), x_values, c);
                result.set_status(Status::Unbounded);
                result
            },
        };

        Ok(result)
    }
}

/// How the pivoting loop ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Termination {
    /// No column has a positive relative cost.
    Optimal,
    /// A column with a positive relative cost has no positive entries.
    Unbounded,
}

/// Pivot until no column has a positive relative cost, or until an improving column without
/// bound is found.
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible solution state.
/// * `pivots`: Number of pivots performed so far, shared between the phases.
///
/// No limit applies if `config.max_iterations` is `None`.
///
/// # Errors
///
/// `IterationLimit` when another pivot would exceed the configured maximum.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    config: &SimplexConfig<F>,
    pivots: &mut usize,
) -> Result<Termination, LinearProgramError>
where
    F: Real,
    PR: PivotRule<F>,
{
    let mut rule = PR::new();
    loop {
        debug_assert_in_basic_solution_state(tableau);

        let Some(column) = rule.select_primal_pivot_column(tableau, config.tolerance).index else {
            break Ok(Termination::Optimal);
        };
        let Some(row) = tableau.select_primal_pivot_row(column, config.tolerance).index else {
            break Ok(Termination::Unbounded);
        };

        if config.max_iterations.is_some_and(|max_iterations| *pivots >= max_iterations) {
            warn!("Iteration limit of {} pivots reached", pivots);
            break Err(LinearProgramError::IterationLimit { iterations: *pivots });
        }
        tableau.bring_into_basis(column, row);
        *pivots += 1;
    }
}
