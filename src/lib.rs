//! Explica computes exact solutions of small linear systems and matrix
//! inverses, and records every intermediate operation so the complete
//! derivation can be rendered step by step.
//!
//! All arithmetic happens on [Rational](domains::rational::Rational)
//! values kept in lowest terms, so results are exact. Four strategies are
//! available: Cramer's rule, adjugate (cofactor) inversion, and
//! Gauss-Jordan elimination for both solving and inversion. Each returns
//! its result together with an ordered list of
//! [SolutionStep](steps::SolutionStep)s; failures carry the steps
//! produced before the problem was detected.
//!
//! For example:
//!
//! ```
//! use explica::domains::rational::Q;
//! use explica::tensors::matrix::{Matrix, Vector};
//!
//! let a = Matrix::from_nested_vec(
//!     vec![vec![2.into(), 1.into()], vec![1.into(), 1.into()]],
//!     Q,
//! )
//! .unwrap();
//! let b = Vector::new(vec![5.into(), 3.into()], Q);
//!
//! let sol = a.solve_cramer(&b).unwrap();
//! assert_eq!(sol.variables[0].value, 2.into());
//! assert_eq!(sol.variables[1].value, 1.into());
//! ```

pub mod determinant;
pub mod domains;
pub mod printer;
mod solve;
pub mod steps;
pub mod tensors;
pub mod utils;
