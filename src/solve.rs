//! The four solver entry points: Cramer's rule, adjugate inversion, and
//! Gauss-Jordan elimination for both solving and inversion.
//!
//! All entry points follow the same pattern: compute determinants or
//! eliminate, branch on zero, and build the result together with the step
//! narrative. Inputs are copied before any mutation, so a caller's
//! matrices are never altered.

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    determinant::Sign,
    domains::Field,
    steps::{
        variable_name, CofactorDetail, CramerSolution, EliminationSolution, MatrixInverse,
        RowHighlight, SolutionStep, SolveError, SolveErrorKind, SolvedVariable,
    },
    tensors::matrix::{Matrix, Vector},
};

impl<F: Field> Matrix<F> {
    /// Solve `A x = b` by Cramer's rule.
    ///
    /// Emits one determinant step for the system, then, per variable, a
    /// determinant step for the column-replaced matrix followed by the
    /// division that produces the variable's value. A zero system
    /// determinant aborts with [SolveErrorKind::NoUniqueSolution].
    pub fn solve_cramer(&self, b: &Vector<F>) -> Result<CramerSolution<F>, SolveError<F>> {
        if self.nrows != self.ncols {
            panic!(
                "Cannot apply Cramer's rule to a non-square matrix: ({},{})",
                self.nrows, self.ncols
            );
        }
        if b.len() != self.nrows as usize {
            panic!(
                "Right-hand side does not match the system: {} vs {} rows",
                b.len(),
                self.nrows
            );
        }

        let f = self.field.clone();
        let mut steps = Vec::new();

        let det_a = self.det_traced();
        steps.push(SolutionStep::Determinant {
            title: "Step 1: Compute the determinant of the system (Δ)".to_owned(),
            matrix: self.clone(),
            det: det_a.clone(),
        });

        if F::is_zero(&det_a.value) {
            debug!("Zero system determinant, no unique solution");
            return Err(SolveError::new(SolveErrorKind::NoUniqueSolution, steps));
        }

        let mut variables = SmallVec::new();
        for i in 0..self.ncols {
            let name = variable_name(i as usize);

            let mut m_i = self.clone();
            for r in 0..m_i.nrows {
                m_i[(r, i)] = b[r].clone();
            }

            let det_i = m_i.det_traced();
            let value = f.div(&det_i.value, &det_a.value);

            steps.push(SolutionStep::Determinant {
                title: format!(
                    "Step {}: Compute the determinant for the variable {} (Δ{})",
                    i + 2,
                    name,
                    name
                ),
                matrix: m_i,
                det: det_i.clone(),
            });
            steps.push(SolutionStep::CramerDivision {
                title: format!("Step {}.1: Find the value of {}", i + 2, name),
                variable: name.clone(),
                numerator: det_i.value,
                denominator: det_a.value.clone(),
                value: value.clone(),
                calculation: format!("{} = Δ{} / Δ", name, name),
            });

            variables.push(SolvedVariable { name, value });
        }

        Ok(CramerSolution {
            variables,
            det: det_a.value,
            steps,
        })
    }

    /// Invert the matrix via the adjugate: the cofactor matrix is built
    /// cell by cell, transposed, and scaled by `1/det`.
    ///
    /// A zero determinant aborts with [SolveErrorKind::NotInvertible].
    pub fn inv_adjugate(&self) -> Result<MatrixInverse<F>, SolveError<F>> {
        if self.nrows != self.ncols {
            panic!(
                "Cannot invert a non-square matrix: ({},{})",
                self.nrows, self.ncols
            );
        }

        let f = self.field.clone();
        let mut steps = Vec::new();

        let det_a = self.det_traced();
        steps.push(SolutionStep::Determinant {
            title: "Step 1: Compute the determinant of the matrix (det(A))".to_owned(),
            matrix: self.clone(),
            det: det_a.clone(),
        });

        if F::is_zero(&det_a.value) {
            debug!("Zero determinant, matrix is not invertible");
            return Err(SolveError::new(SolveErrorKind::NotInvertible, steps));
        }

        let mut details = Vec::with_capacity(self.nrows as usize * self.ncols as usize);
        let mut cofactors = Matrix::new(self.nrows, self.ncols, f.clone());
        for r in 0..self.nrows {
            for c in 0..self.ncols {
                let sign = Sign::of_position(r, c);
                let minor = self.minor(r, c);
                let minor_det = minor.det_traced();
                let value = sign.apply(&f, &minor_det.value);

                details.push(CofactorDetail {
                    label: format!("C{}{}", r + 1, c + 1).into(),
                    sign,
                    minor,
                    minor_det,
                    value: value.clone(),
                });
                cofactors[(r, c)] = value;
            }
        }
        steps.push(SolutionStep::Cofactors {
            title: "Step 2: Compute the cofactor matrix C(A)".to_owned(),
            details,
            matrix: cofactors.clone(),
        });

        let adjugate = cofactors.transpose();
        steps.push(SolutionStep::State {
            title: "Step 3: Compute the adjugate matrix adj(A) = C(A)ᵀ".to_owned(),
            matrix: adjugate.clone(),
            note: Some("The adjugate is the transpose of the cofactor matrix.".to_owned()),
        });

        let scalar = f.inv(&det_a.value);
        let inverse = adjugate.mul_scalar(&scalar);
        steps.push(SolutionStep::InverseScaling {
            title: "Step 4: Compute the inverse A⁻¹ = (1/det(A)) * adj(A)".to_owned(),
            scalar,
            adjugate,
            inverse: inverse.clone(),
        });

        Ok(MatrixInverse { inverse, steps })
    }

    /// Solve `A x = b` by Gauss-Jordan elimination of the augmented
    /// matrix `[A | b]`.
    pub fn solve_gauss_jordan(
        &self,
        b: &Vector<F>,
    ) -> Result<EliminationSolution<F>, SolveError<F>> {
        if self.nrows != self.ncols {
            panic!(
                "Cannot eliminate a non-square system: ({},{})",
                self.nrows, self.ncols
            );
        }
        if b.len() != self.nrows as usize {
            panic!(
                "Right-hand side does not match the system: {} vs {} rows",
                b.len(),
                self.nrows
            );
        }

        let n = self.nrows;
        let mut aug = Matrix::new(n, n + 1, self.field.clone());
        for r in 0..n {
            for c in 0..n {
                aug[(r, c)] = self[(r, c)].clone();
            }
            aug[(r, n)] = b[r].clone();
        }

        let (steps, result) = run_gauss_jordan(aug, n);
        let reduced = match result {
            Ok(m) => m,
            Err(kind) => return Err(SolveError::new(kind, steps)),
        };

        let mut variables = SmallVec::new();
        for i in 0..n {
            variables.push(SolvedVariable {
                name: variable_name(i as usize),
                value: reduced[(i, n)].clone(),
            });
        }

        Ok(EliminationSolution { variables, steps })
    }

    /// Invert the matrix by Gauss-Jordan elimination of `[A | I]`: when
    /// the left block reaches the identity, the right block is the
    /// inverse.
    pub fn inv_gauss_jordan(&self) -> Result<MatrixInverse<F>, SolveError<F>> {
        if self.nrows != self.ncols {
            panic!(
                "Cannot invert a non-square matrix: ({},{})",
                self.nrows, self.ncols
            );
        }

        let f = self.field.clone();
        let n = self.nrows;
        let mut aug = Matrix::new(n, 2 * n, f.clone());
        for r in 0..n {
            for c in 0..n {
                aug[(r, c)] = self[(r, c)].clone();
            }
            aug[(r, n + r)] = f.one();
        }

        let (mut steps, result) = run_gauss_jordan(aug, n);

        // the shared sweep titles the first snapshot for a solve
        if let Some(SolutionStep::State { title, .. }) = steps.first_mut() {
            *title = "Step 1: Build the augmented matrix [A | I]".to_owned();
        }

        let reduced = match result {
            Ok(m) => m,
            Err(kind) => return Err(SolveError::new(kind, steps)),
        };

        let mut inverse = Matrix::new(n, n, f);
        for r in 0..n {
            for c in 0..n {
                inverse[(r, c)] = reduced[(r, n + c)].clone();
            }
        }

        Ok(MatrixInverse { inverse, steps })
    }
}

/// Emit the initial snapshot of the augmented matrix and run the
/// elimination sweep.
fn run_gauss_jordan<F: Field>(
    aug: Matrix<F>,
    max_col: u32,
) -> (Vec<SolutionStep<F>>, Result<Matrix<F>, SolveErrorKind>) {
    let mut steps = vec![SolutionStep::State {
        title: "Step 1: Build the augmented matrix [A | b]".to_owned(),
        matrix: aug.clone(),
        note: None,
    }];

    let result = eliminate(aug, max_col, &mut steps);
    (steps, result)
}

/// Reduce an augmented matrix to reduced row-echelon form, pivoting only
/// in the first `max_col` columns and emitting one step per row
/// operation.
///
/// A column without a pivot is skipped without advancing the pivot row.
/// After the sweep, a solve-shaped matrix (one extra column) with a
/// nonzero right-hand side in a pivot-free row is inconsistent; fewer
/// pivots than rows is singular.
fn eliminate<F: Field>(
    mut m: Matrix<F>,
    max_col: u32,
    steps: &mut Vec<SolutionStep<F>>,
) -> Result<Matrix<F>, SolveErrorKind> {
    let f = m.field().clone();
    let nrows = m.nrows;
    let ncols = m.ncols;

    let mut pivot_row = 0;
    for col in 0..max_col {
        if pivot_row >= nrows {
            break;
        }

        let Some(found) = (pivot_row..nrows).find(|&r| !F::is_zero(&m[(r, col)])) else {
            debug!("No pivot in column {}", col + 1);
            continue;
        };

        if found != pivot_row {
            let before = m.clone();
            m.swap_rows(found, pivot_row);
            steps.push(SolutionStep::RowOperation {
                operation: format!("Swap R{} and R{}", pivot_row + 1, found + 1),
                before,
                after: m.clone(),
                detailed_calculations: Vec::new(),
                highlight: RowHighlight::Swap(pivot_row, found),
            });
        }

        let pivot = m[(pivot_row, col)].clone();
        if !f.is_one(&pivot) {
            let before = m.clone();
            let mut detailed = Vec::new();
            for c in col..ncols {
                let old = m[(pivot_row, c)].clone();
                let new = f.div(&old, &pivot);
                detailed.push(format!(
                    "Row {}, Col {}: {} / {} = {}",
                    pivot_row + 1,
                    c + 1,
                    old,
                    pivot,
                    new
                ));
                m[(pivot_row, c)] = new;
            }
            steps.push(SolutionStep::RowOperation {
                operation: format!("R{} → R{} / {}", pivot_row + 1, pivot_row + 1, pivot),
                before,
                after: m.clone(),
                detailed_calculations: detailed,
                highlight: RowHighlight::Pivot(pivot_row),
            });
        }

        for k in 0..nrows {
            if k == pivot_row {
                continue;
            }
            let factor = m[(k, col)].clone();
            if F::is_zero(&factor) {
                continue;
            }

            let before = m.clone();
            let mut detailed = Vec::new();
            for c in col..ncols {
                let old = m[(k, c)].clone();
                let pivot_value = m[(pivot_row, c)].clone();
                let mut new = old.clone();
                f.sub_mul_assign(&mut new, &factor, &pivot_value);
                detailed.push(format!(
                    "Row {}, Col {}: {} - ({} * {}) = {}",
                    k + 1,
                    c + 1,
                    old,
                    factor,
                    pivot_value,
                    new
                ));
                m[(k, c)] = new;
            }
            steps.push(SolutionStep::RowOperation {
                operation: format!(
                    "R{} → R{} - ({}) * R{}",
                    k + 1,
                    k + 1,
                    factor,
                    pivot_row + 1
                ),
                before,
                after: m.clone(),
                detailed_calculations: detailed,
                highlight: RowHighlight::Eliminate {
                    pivot: pivot_row,
                    target: k,
                },
            });
        }

        pivot_row += 1;
    }

    // a solve-shaped augmented matrix has exactly one extra column
    if ncols == nrows + 1 {
        for k in pivot_row..nrows {
            if !F::is_zero(&m[(k, ncols - 1)]) {
                debug!("Row {} reduces to 0 = {}", k + 1, m[(k, ncols - 1)]);
                return Err(SolveErrorKind::Inconsistent);
            }
        }
    }

    if pivot_row < nrows {
        debug!("Only {} pivots for {} rows", pivot_row, nrows);
        return Err(SolveErrorKind::Underdetermined);
    }

    steps.push(SolutionStep::State {
        title: "Reduced row-echelon form".to_owned(),
        matrix: m.clone(),
        note: Some("Every pivot is 1 and is the only nonzero entry in its column.".to_owned()),
    });

    Ok(m)
}
