//! # Traits
//!
//! The matrices and the Simplex method are written for any binary floating point type. The
//! ordering needed by the ratio test and the pivot rules is the partial order of the floats, with
//! the understanding that no `NaN` values enter the computation.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// A finite precision real number.
///
/// Automatically implemented for all types satisfying the trait's bounds. The `Debug` and
/// `Display` bounds are there so that values can be logged and shown in the textual renderings of
/// problems and solutions.
pub trait Real: Float + Debug + Display {
}
impl<T: Float + Debug + Display> Real for T {
}
