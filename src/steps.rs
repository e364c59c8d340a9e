//! The narration data model.
//!
//! Every solver produces, next to its exact result, an ordered list of
//! [SolutionStep]s describing each intermediate operation in the order it
//! happened. The variants form a closed set so a renderer can match
//! exhaustively; steps are appended chronologically and never mutated
//! afterwards. Failures are data too: a [SolveError] carries the steps
//! accumulated before the problem was detected, so the partial derivation
//! can still be shown.

use std::fmt::{self, Display};

use smallvec::SmallVec;
use smartstring::{LazyCompact, SmartString};

use crate::{
    determinant::{Determinant, Sign},
    domains::Ring,
    tensors::matrix::Matrix,
};

/// Rows to emphasize when rendering the matrices of a row-operation step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RowHighlight {
    /// The pivot row that was normalized.
    Pivot(u32),
    /// The pivot row and the row it modified.
    Eliminate { pivot: u32, target: u32 },
    /// The two rows that were exchanged.
    Swap(u32, u32),
}

/// The derivation record of a single cofactor: its position label (`C23`
/// for row 2, column 3), the checkerboard sign, the minor and the full
/// derivation of the minor's determinant.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CofactorDetail<F: Ring> {
    pub label: SmartString<LazyCompact>,
    pub sign: Sign,
    pub minor: Matrix<F>,
    pub minor_det: Determinant<F>,
    pub value: F::Element,
}

/// A single chronological step of a solver run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolutionStep<F: Ring> {
    /// A titled snapshot of a matrix, with an optional one-line note.
    State {
        title: String,
        matrix: Matrix<F>,
        note: Option<String>,
    },
    /// A matrix whose determinant was computed, with the full derivation.
    Determinant {
        title: String,
        matrix: Matrix<F>,
        det: Determinant<F>,
    },
    /// All cofactor derivations of a matrix together with the assembled
    /// cofactor matrix.
    Cofactors {
        title: String,
        details: Vec<CofactorDetail<F>>,
        matrix: Matrix<F>,
    },
    /// The division `Δvar / Δ` that produces one Cramer variable.
    CramerDivision {
        title: String,
        variable: SmartString<LazyCompact>,
        numerator: F::Element,
        denominator: F::Element,
        value: F::Element,
        calculation: String,
    },
    /// Scaling of the adjugate by `1/det` into the inverse.
    InverseScaling {
        title: String,
        scalar: F::Element,
        adjugate: Matrix<F>,
        inverse: Matrix<F>,
    },
    /// A single Gauss-Jordan row operation with before and after
    /// snapshots and one calculation string per modified cell.
    RowOperation {
        operation: String,
        before: Matrix<F>,
        after: Matrix<F>,
        detailed_calculations: Vec<String>,
        highlight: RowHighlight,
    },
}

/// One solved unknown, in input column order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SolvedVariable<F: Ring> {
    pub name: SmartString<LazyCompact>,
    pub value: F::Element,
}

/// Variable names in column order: x, y, z, w, v, then x6, x7, …
pub fn variable_name(index: usize) -> SmartString<LazyCompact> {
    const NAMES: [&str; 5] = ["x", "y", "z", "w", "v"];
    match NAMES.get(index) {
        Some(name) => (*name).into(),
        None => format!("x{}", index + 1).into(),
    }
}

/// Solution of a square system by Cramer's rule.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CramerSolution<F: Ring> {
    pub variables: SmallVec<[SolvedVariable<F>; 5]>,
    /// The determinant of the coefficient matrix.
    pub det: F::Element,
    pub steps: Vec<SolutionStep<F>>,
}

/// Solution of a square system by Gauss-Jordan elimination.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EliminationSolution<F: Ring> {
    pub variables: SmallVec<[SolvedVariable<F>; 5]>,
    pub steps: Vec<SolutionStep<F>>,
}

/// An inverse matrix together with the derivation that produced it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MatrixInverse<F: Ring> {
    pub inverse: Matrix<F>,
    pub steps: Vec<SolutionStep<F>>,
}

/// Why a solver gave up.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SolveErrorKind {
    /// The coefficient determinant is zero (Cramer's rule).
    NoUniqueSolution,
    /// The determinant is zero (adjugate inversion).
    NotInvertible,
    /// Fewer pivots than rows: singular, infinitely many solutions.
    Underdetermined,
    /// A zero row with a nonzero right-hand side: `0 = k`.
    Inconsistent,
}

impl Display for SolveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveErrorKind::NoUniqueSolution => {
                write!(f, "The determinant is 0. The system has no unique solution")
            }
            SolveErrorKind::NotInvertible => {
                write!(f, "The determinant is 0. The matrix has no inverse")
            }
            SolveErrorKind::Underdetermined => {
                write!(f, "The system is singular and has infinitely many solutions")
            }
            SolveErrorKind::Inconsistent => {
                write!(f, "The system is inconsistent (0 = k) and has no solution")
            }
        }
    }
}

/// A failed solve: the reason plus the steps produced before the failure
/// was detected.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SolveError<F: Ring> {
    pub kind: SolveErrorKind,
    pub steps: Vec<SolutionStep<F>>,
}

impl<F: Ring> SolveError<F> {
    pub(crate) fn new(kind: SolveErrorKind, steps: Vec<SolutionStep<F>>) -> SolveError<F> {
        SolveError { kind, steps }
    }
}

impl<F: Ring> Display for SolveError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::variable_name;

    #[test]
    fn variable_names() {
        let names: Vec<_> = (0..7).map(|i| variable_name(i).to_string()).collect();
        assert_eq!(names, ["x", "y", "z", "w", "v", "x6", "x7"]);
    }
}
