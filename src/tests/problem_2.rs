//! A bounded program with a unique optimum at a vertex where two constraints are tight.
use crate::data::linear_program::LinearProgram;

/// max 2 x0 + 5 x1
/// s.t. 2 x0 - x1 <= 4
///      x0 + 2 x1 <= 9
///      -x0 + 2 x1 <= 3
pub fn create_program() -> LinearProgram<f64> {
    LinearProgram::from_data(
        vec![2f64, 5f64],
        vec![
            vec![2f64, -1f64],
            vec![1f64, 2f64],
            vec![-1f64, 2f64],
        ],
        vec![4f64, 9f64, 3f64],
    ).unwrap()
}

pub fn optimal_value() -> f64 {
    21f64
}
