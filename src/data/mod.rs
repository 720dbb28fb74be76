//! # Data structures
//!
//! Number types, dense linear algebra and the representation of linear programs and their
//! solutions.
pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
