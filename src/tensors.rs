//! Matrices and vectors with entries in a generic ring.
pub mod matrix;
