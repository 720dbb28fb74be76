use approx::assert_abs_diff_eq;

use dense_simplex::algorithm::Solve;
use dense_simplex::algorithm::two_phase::Simplex;
use dense_simplex::algorithm::two_phase::config::SimplexConfig;
use dense_simplex::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use dense_simplex::data::linear_program::solution::Status;
use dense_simplex::error::LinearProgramError;

use super::{assert_consistent, EPSILON, program};

#[test]
fn bounded() {
    let program = program(
        &[2f64, 5f64],
        &[&[2f64, -1f64], &[1f64, 2f64], &[-1f64, 2f64]],
        &[4f64, 9f64, 3f64],
    );
    let result = Simplex::new(&program).run().unwrap();

    assert_eq!(result.status(), Status::Successful);
    assert_abs_diff_eq!(result.value(), 21f64, epsilon = EPSILON);
    assert_consistent(&program, &result);
}

#[test]
fn unbounded() {
    let program = program(
        &[2f64, 1f64],
        &[&[-1f64, 1f64], &[1f64, -2f64]],
        &[1f64, 2f64],
    );
    let result = program.solve().unwrap();

    assert_eq!(result.status(), Status::Unbounded);
    assert_eq!(result.value(), f64::INFINITY);
    // The vertex at which the unbounded direction was found is feasible
    assert_eq!(result.x_values().len(), 2);
    assert!(program.is_feasible(result.x_values(), EPSILON));
}

#[test]
fn infeasible() {
    let program = program(
        &[-1f64, 2f64, -2f64],
        &[&[1f64, 1f64, 1f64], &[-1f64, -1f64, 1f64]],
        &[-5f64, -5f64],
    );
    let result = program.solve().unwrap();

    assert_eq!(result.status(), Status::Unfeasible);
    assert_eq!(result.value(), f64::NEG_INFINITY);
    assert!(result.x_values().is_empty());
}

#[test]
fn degenerate() {
    let program = program(
        &[2f64, 1f64],
        &[&[3f64, 1f64], &[1f64, -1f64], &[0f64, 1f64]],
        &[6f64, 2f64, 3f64],
    );

    for result in [
        Simplex::new(&program).run().unwrap(),
        Simplex::<_, SteepestDescentAlongVariable>::with_config(&program, SimplexConfig::default()).run().unwrap(),
    ] {
        assert_eq!(result.status(), Status::Successful);
        assert_abs_diff_eq!(result.value(), 5f64, epsilon = EPSILON);
        assert_consistent(&program, &result);
    }
}

#[test]
fn wikipedia() {
    let program = program(
        &[2f64, 3f64, 4f64],
        &[&[3f64, 2f64, 1f64], &[2f64, 5f64, 3f64]],
        &[10f64, 15f64],
    );
    let result = program.solve().unwrap();

    assert_eq!(result.status(), Status::Successful);
    assert_abs_diff_eq!(result.value(), 20f64, epsilon = EPSILON);
    assert_consistent(&program, &result);
}

#[test]
fn negative_rhs() {
    let program = program(
        &[-1f64; 5],
        &[
            &[-1f64, -1f64, -1f64, 0f64, 0f64],
            &[0f64, 0f64, -1f64, -1f64, -1f64],
            &[-1f64, 0f64, 0f64, 0f64, 0f64],
            &[0f64, -1f64, 0f64, 0f64, 0f64],
            &[0f64, 0f64, -1f64, 0f64, 0f64],
        ],
        &[-1f64; 5],
    );
    let result = program.solve().unwrap();

    assert_eq!(result.status(), Status::Successful);
    assert_abs_diff_eq!(result.value(), -3f64, epsilon = EPSILON);
    assert_consistent(&program, &result);
}

#[test]
fn equality_through_opposite_inequalities() {
    // x0 + x1 = 2 as two inequalities, maximize x0 - x1
    let program = program(
        &[1f64, -1f64],
        &[&[1f64, 1f64], &[-1f64, -1f64]],
        &[2f64, -2f64],
    );
    let result = program.solve().unwrap();

    assert_eq!(result.status(), Status::Successful);
    assert_abs_diff_eq!(result.value(), 2f64, epsilon = EPSILON);
    assert_consistent(&program, &result);
}

#[test]
fn strong_duality() {
    let program = program(
        &[2f64, 5f64],
        &[&[2f64, -1f64], &[1f64, 2f64], &[-1f64, 2f64]],
        &[4f64, 9f64, 3f64],
    );
    let primal = program.solve().unwrap();
    let dual = program.dual().solve().unwrap();

    assert_eq!(dual.status(), Status::Successful);
    assert_abs_diff_eq!(primal.value(), -dual.value(), epsilon = EPSILON);
}

#[test]
fn iteration_limit() {
    let program = program(
        &[2f64, 5f64],
        &[&[2f64, -1f64], &[1f64, 2f64], &[-1f64, 2f64]],
        &[4f64, 9f64, 3f64],
    );
    let config = SimplexConfig::default().with_max_iterations(0);
    let result = Simplex::<_, FirstProfitable>::with_config(&program, config).run();

    assert_eq!(result, Err(LinearProgramError::IterationLimit { iterations: 0 }));
}

#[test]
fn textual_rendering() {
    let program = program(
        &[-1f64, 2f64, -2f64],
        &[&[1f64, 1f64, -1f64], &[-1f64, -1f64, 1f64]],
        &[5f64, -5f64],
    );

    let primal = "max (-1*x0)+(2*x1)+(-2*x2)
(1*x0)+(1*x1)+(-1*x2) <= 5
(-1*x0)+(-1*x1)+(1*x2) <= -5
x0, x1, x2 >= 0";
    let dual = "min (5*y0)+(-5*y1)
(1*y0)+(-1*y1) >= -1
(1*y0)+(-1*y1) >= 2
(-1*y0)+(1*y1) >= -2
y0, y1 >= 0";
    assert_eq!(program.to_string(), primal);
    assert_eq!(program.dual_formulation().to_string(), dual);

    let result = program.solve().unwrap();
    assert!(result.to_string().ends_with("Status: SUCCESSFUL"));
    assert!(result.to_string().contains("max (-1*x0)+(2*x1)+(-2*x2) = "));
}
