//! # Tests that require a look inside the crate.
//!
//! Each problem module provides:
//!
//! * `fn create_program()`
//! * `fn optimal_value()`
//!
//! and optionally the expected intermediate forms, such as `fn artificial_tableau_form()`.
pub mod problem_2;
