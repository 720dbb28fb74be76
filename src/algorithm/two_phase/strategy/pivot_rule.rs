//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use std::ops::Range;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::IndexElementPair;
use crate::data::number_types::traits::Real;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule<F> {
    /// Create a new instance.
    ///
    /// A fresh instance is created for each phase.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau in a basic solution state.
    /// * `tolerance`: Relative costs at or below this value are not considered improving.
    ///
    /// # Return value
    ///
    /// The entering column with its relative cost, or an absent index if the current basic
    /// solution is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, tolerance: F) -> IndexElementPair<F>;
}

fn first_profitable<F: Real>(
    tableau: &Tableau<F>,
    columns: Range<usize>,
    tolerance: F,
) -> Option<(usize, F)> {
    columns
        .filter(|&column| !tableau.is_in_basis(column))
        .map(|column| (column, tableau.relative_cost(column)))
        .find(|&(_, cost)| cost > tolerance)
}

fn into_pair<F: Real>(candidate: Option<(usize, F)>) -> IndexElementPair<F> {
    candidate.map_or_else(
        || IndexElementPair::none(F::zero()),
        |(column, cost)| IndexElementPair::new(column, cost),
    )
}

/// Simply pivot on the first column which has a positive relative cost.
///
/// Columns are scanned in increasing index order, so the lowest profitable index wins.
#[derive(Debug, Default)]
pub struct FirstProfitable;
impl<F: Real> PivotRule<F> for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, tolerance: F) -> IndexElementPair<F> {
        into_pair(first_profitable(tableau, 0..tableau.nr_columns(), tolerance))
    }
}

/// Small modification w.r.t. the `FirstProfitable` rule; it starts the search from the last
/// column selected.
#[derive(Debug, Default)]
pub struct FirstProfitableWithMemory {
    last_selected: Option<usize>,
}
impl<F: Real> PivotRule<F> for FirstProfitableWithMemory {
    fn new() -> Self {
        Self { last_selected: None }
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, tolerance: F) -> IndexElementPair<F> {
        let nr_columns = tableau.nr_columns();
        let potential = self.last_selected
            .map_or_else(
                || first_profitable(tableau, 0..nr_columns, tolerance),
                |last| {
                    first_profitable(tableau, (last + 1)..nr_columns, tolerance)
                        .or_else(|| first_profitable(tableau, 0..(last + 1), tolerance))
                },
            );

        self.last_selected = potential.map(|(column, _)| column);
        into_pair(potential)
    }
}

/// Pivot on the column with the largest relative cost.
///
/// The lowest index wins among equal costs.
#[derive(Debug, Default)]
pub struct SteepestDescentAlongVariable;
impl<F: Real> PivotRule<F> for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, tolerance: F) -> IndexElementPair<F> {
        let mut largest: Option<(usize, F)> = None;
        for (j, cost) in (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| cost > tolerance) {
            match largest {
                Some((_, existing_cost)) if cost <= existing_cost => {},
                _ => largest = Some((j, cost)),
            }
        }

        into_pair(largest)
    }
}
