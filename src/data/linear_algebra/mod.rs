//! # Linear algebra primitives
//!
//! A dense, row-major matrix and the small value type produced when scanning a matrix for a
//! pivot candidate.
pub mod matrix;

/// Default absolute tolerance below which a value is considered to be zero by the solver.
pub const EPSILON: f64 = 1e-10;

/// A position in a row or column, together with the value found there.
///
/// Produced by selection procedures: pivot rules, the ratio test and scans for non-zero
/// elements. An absent `index` means that no candidate was found; `element` then holds the
/// neutral value of the selection (for example, infinity for a minimum ratio).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexElementPair<F> {
    /// Row or column index of the candidate, if there is one.
    pub index: Option<usize>,
    /// Value at that index.
    pub element: F,
}

impl<F> IndexElementPair<F> {
    /// A candidate at `index` with value `element`.
    pub fn new(index: usize, element: F) -> Self {
        Self { index: Some(index), element }
    }

    /// No candidate was found.
    ///
    /// # Arguments
    ///
    /// * `element`: The value the selection would report when nothing qualifies.
    pub fn none(element: F) -> Self {
        Self { index: None, element }
    }

    /// Whether no candidate was found.
    pub fn is_none(&self) -> bool {
        self.index.is_none()
    }
}
