//! Recursive determinant computation that records its own derivation.
//!
//! Every size is handled by the closed form a reader would use on paper:
//! the `2x2` product difference, Sarrus' rule for `3x3`, and cofactor
//! expansion along the first row for anything larger. The expansion path
//! is exponential; the intended matrix sizes are small and the goal is a
//! legible derivation, not performance.

use std::fmt::{self, Display};

use tracing::debug;

use crate::{domains::Ring, tensors::matrix::Matrix};

/// The sign of a cofactor term.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// The checkerboard sign `(-1)^(row+col)` of a matrix position.
    pub fn of_position(row: u32, col: u32) -> Sign {
        if (row + col) % 2 == 0 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    /// Apply the sign to a ring element.
    pub fn apply<F: Ring>(&self, field: &F, e: &F::Element) -> F::Element {
        match self {
            Sign::Plus => e.clone(),
            Sign::Minus => field.neg(e),
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => f.write_str("+"),
            Sign::Minus => f.write_str("-"),
        }
    }
}

/// A determinant value together with the record of how it was derived.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Determinant<F: Ring> {
    pub value: F::Element,
    pub tree: CalculationNode<F>,
}

/// One diagonal product of Sarrus' rule.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SarrusTerm<F: Ring> {
    pub factors: [F::Element; 3],
    pub product: F::Element,
}

/// One term of a cofactor expansion along the first row: the signed entry,
/// the minor it multiplies and the full derivation of the minor's
/// determinant.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExpansionTerm<F: Ring> {
    pub sign: Sign,
    pub entry: F::Element,
    pub minor: Matrix<F>,
    pub minor_det: Determinant<F>,
}

/// How a determinant value was derived, as a traversable tree. Each
/// expansion term owns the record of its minor's determinant, so the tree
/// has no shared nodes and its depth shrinks with the minors.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CalculationNode<F: Ring> {
    /// A `1x1` determinant: the single entry.
    Base { result: F::Element },
    /// A `2x2` determinant: `a*d - b*c`.
    TwoByTwo {
        a: F::Element,
        b: F::Element,
        c: F::Element,
        d: F::Element,
        result: F::Element,
    },
    /// A `3x3` determinant by Sarrus' rule: the sum of the three positive
    /// diagonal products minus the sum of the three negative ones.
    Sarrus {
        positive: [SarrusTerm<F>; 3],
        negative: [SarrusTerm<F>; 3],
        positive_sum: F::Element,
        negative_sum: F::Element,
        result: F::Element,
    },
    /// Cofactor expansion along the first row. Zero entries are skipped;
    /// their terms contribute nothing.
    Expansion {
        terms: Vec<ExpansionTerm<F>>,
        result: F::Element,
    },
}

impl<F: Ring> CalculationNode<F> {
    /// The value this node derives.
    pub fn result(&self) -> &F::Element {
        match self {
            CalculationNode::Base { result }
            | CalculationNode::TwoByTwo { result, .. }
            | CalculationNode::Sarrus { result, .. }
            | CalculationNode::Expansion { result, .. } => result,
        }
    }
}

impl<F: Ring> Matrix<F> {
    /// Compute the determinant together with a full trace of the
    /// derivation.
    ///
    /// Panics if the matrix is not square or is empty; the solver entry
    /// points guarantee the shape before calling.
    pub fn det_traced(&self) -> Determinant<F> {
        if self.nrows != self.ncols {
            panic!(
                "Cannot compute the determinant of a non-square matrix: ({},{})",
                self.nrows, self.ncols
            );
        }

        let f = &self.field;
        match self.nrows {
            0 => panic!("Cannot compute the determinant of an empty matrix"),
            1 => {
                let result = self.data[0].clone();
                Determinant {
                    value: result.clone(),
                    tree: CalculationNode::Base { result },
                }
            }
            2 => {
                let (a, b, c, d) = (
                    self.data[0].clone(),
                    self.data[1].clone(),
                    self.data[2].clone(),
                    self.data[3].clone(),
                );
                let result = f.sub(&f.mul(&a, &d), &f.mul(&b, &c));
                Determinant {
                    value: result.clone(),
                    tree: CalculationNode::TwoByTwo { a, b, c, d, result },
                }
            }
            3 => self.det_sarrus(),
            _ => self.det_expansion(),
        }
    }

    fn det_sarrus(&self) -> Determinant<F> {
        let f = &self.field;
        let term = |positions: [(u32, u32); 3]| {
            let factors = positions.map(|(r, c)| self[(r, c)].clone());
            let product = f.mul(&f.mul(&factors[0], &factors[1]), &factors[2]);
            SarrusTerm { factors, product }
        };

        let positive = [
            [(0, 0), (1, 1), (2, 2)],
            [(0, 1), (1, 2), (2, 0)],
            [(0, 2), (1, 0), (2, 1)],
        ]
        .map(&term);
        let negative = [
            [(0, 2), (1, 1), (2, 0)],
            [(0, 0), (1, 2), (2, 1)],
            [(0, 1), (1, 0), (2, 2)],
        ]
        .map(&term);

        let sum = |terms: &[SarrusTerm<F>; 3]| {
            let mut s = f.add(&terms[0].product, &terms[1].product);
            f.add_assign(&mut s, &terms[2].product);
            s
        };
        let positive_sum = sum(&positive);
        let negative_sum = sum(&negative);
        let result = f.sub(&positive_sum, &negative_sum);

        Determinant {
            value: result.clone(),
            tree: CalculationNode::Sarrus {
                positive,
                negative,
                positive_sum,
                negative_sum,
                result,
            },
        }
    }

    fn det_expansion(&self) -> Determinant<F> {
        let f = &self.field;
        let mut total = f.zero();
        let mut terms = Vec::new();

        for col in 0..self.ncols {
            let entry = self[(0, col)].clone();
            if F::is_zero(&entry) {
                continue;
            }

            let sign = Sign::of_position(0, col);
            let minor = self.minor(0, col);
            let minor_det = minor.det_traced();

            let term_value = sign.apply(f, &f.mul(&entry, &minor_det.value));
            f.add_assign(&mut total, &term_value);

            terms.push(ExpansionTerm {
                sign,
                entry,
                minor,
                minor_det,
            });
        }

        debug!(
            "Expanded a {0}x{0} determinant into {1} terms",
            self.nrows,
            terms.len()
        );

        Determinant {
            value: total.clone(),
            tree: CalculationNode::Expansion {
                terms,
                result: total,
            },
        }
    }
}
