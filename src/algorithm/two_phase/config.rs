//! # Solver configuration
use std::cmp::max;

use num_traits::NumCast;

use crate::data::linear_algebra::EPSILON;
use crate::data::number_types::traits::Real;

/// Number of pivots allowed per column of the phase one tableau when no maximum is configured.
pub const PIVOTS_PER_COLUMN: usize = 100;

/// Numerical and termination settings of the Simplex method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexConfig<F> {
    /// Absolute values at or below this value count as zero when choosing pivots and when checking
    /// feasibility.
    pub tolerance: F,
    /// Maximum number of pivots over both phases.
    ///
    /// If `None`, the limit is derived from the size of the program, see `iteration_limit`. The
    /// pivot rules do not prevent cycling on degenerate programs, so some limit always applies.
    pub max_iterations: Option<usize>,
}

impl<F: Real> Default for SimplexConfig<F> {
    fn default() -> Self {
        Self {
            tolerance: <F as NumCast>::from(EPSILON).unwrap_or_else(F::epsilon),
            max_iterations: None,
        }
    }
}

impl<F> SimplexConfig<F> {
    /// Maximum number of pivots for a program whose phase one tableau has `nr_columns` variable
    /// columns.
    pub fn iteration_limit(&self, nr_columns: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| PIVOTS_PER_COLUMN.saturating_mul(max(nr_columns, 1)))
    }

    /// Replace the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Limit the number of pivots.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::config::SimplexConfig;

    #[test]
    fn default() {
        let config = SimplexConfig::<f64>::default();
        assert_eq!(config.tolerance, 1e-10);
        assert_eq!(config.max_iterations, None);
        assert_eq!(config.iteration_limit(7), 700);

        let config = SimplexConfig::<f32>::default().with_max_iterations(3).with_tolerance(1e-4);
        assert_eq!(config.max_iterations, Some(3));
        assert_eq!(config.iteration_limit(7), 3);
        assert_eq!(config.tolerance, 1e-4);
    }
}
