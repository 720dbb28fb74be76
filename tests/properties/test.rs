use approx::{assert_abs_diff_eq, relative_eq};
use proptest::prelude::*;

use dense_simplex::algorithm::Solve;
use dense_simplex::algorithm::two_phase::Simplex;
use dense_simplex::algorithm::two_phase::config::SimplexConfig;
use dense_simplex::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use dense_simplex::data::linear_algebra::matrix::DenseMatrix;
use dense_simplex::data::linear_program::solution::Status;

use super::{matrix_and_row_permutation, mixed_program, non_singular_matrix, positive_program};

proptest! {
    #[test]
    fn inverse_is_two_sided(matrix in non_singular_matrix()) {
        let inverse = matrix.inverse().unwrap();
        let identity = DenseMatrix::<f64>::identity(matrix.nr_rows());

        for product in [matrix.multiply(&inverse).unwrap(), inverse.multiply(&matrix).unwrap()] {
            for (row, expected_row) in product.rows().zip(identity.rows()) {
                for (&value, &expected) in row.iter().zip(expected_row) {
                    assert_abs_diff_eq!(value, expected, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn rank_independent_of_row_order((matrix, shuffled) in matrix_and_row_permutation()) {
        let rank = matrix.rank_within(1e-9);
        prop_assert!(rank <= matrix.nr_rows().min(matrix.nr_columns()));
        prop_assert_eq!(rank, shuffled.rank_within(1e-9));
        prop_assert_eq!(rank, matrix.transpose().rank_within(1e-9));
    }

    #[test]
    fn echelon_form_shape((matrix, _) in matrix_and_row_permutation()) {
        let echelon = matrix.row_echelon_form();
        let mut last_pivot = None;
        for row in echelon.rows() {
            match row.iter().position(|&value| value != 0f64) {
                Some(pivot) => {
                    prop_assert!(last_pivot.is_none_or(|last| pivot > last));
                    assert_abs_diff_eq!(row[pivot], 1f64, epsilon = 1e-12);
                    last_pivot = Some(pivot);
                },
                None => last_pivot = Some(usize::MAX - 1),
            }
        }
    }

    #[test]
    fn strong_duality(program in positive_program()) {
        let primal = program.solve().unwrap();
        prop_assert_eq!(primal.status(), Status::Successful);
        prop_assert!(program.is_feasible(primal.x_values(), 1e-9));

        let dual = program.dual().solve().unwrap();
        prop_assert_eq!(dual.status(), Status::Successful);
        prop_assert!(relative_eq!(primal.value(), -dual.value(), epsilon = 1e-9, max_relative = 1e-9));
    }

    #[test]
    fn outcome_consistent(program in mixed_program()) {
        let config = SimplexConfig::default().with_max_iterations(1_000);
        let result = Simplex::<_, FirstProfitable>::with_config(&program, config).run();
        prop_assume!(result.is_ok());
        let result = result.unwrap();

        match result.status() {
            Status::Successful => {
                prop_assert!(program.is_feasible(result.x_values(), 1e-7));
                assert_abs_diff_eq!(result.objective_value_of(result.x_values()), result.value(), epsilon = 1e-7);

                let dual = Simplex::<_, FirstProfitable>::with_config(&program.dual(), config).run();
                prop_assume!(dual.is_ok());
                let dual = dual.unwrap();
                prop_assert_eq!(dual.status(), Status::Successful);
                prop_assert!(relative_eq!(result.value(), -dual.value(), epsilon = 1e-7, max_relative = 1e-7));
            },
            Status::Unbounded => {
                prop_assert_eq!(result.value(), f64::INFINITY);
                prop_assert!(program.is_feasible(result.x_values(), 1e-7));
            },
            Status::Unfeasible => {
                prop_assert!(result.x_values().is_empty());
                prop_assert_eq!(result.value(), f64::NEG_INFINITY);
            },
        }
    }
}
