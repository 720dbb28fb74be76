//! # Number types
//!
//! All computations happen in finite precision. Exact or symbolic arithmetic is not supported.
pub mod traits;
