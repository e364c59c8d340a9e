//! Renders matrices and vectors in the aligned `| … |` layout.
//!
//! The solvers embed these strings directly into step records, so the
//! exact shape produced here is part of the public contract: every entry
//! is right-aligned to a fixed width and rows are separated by newlines.

use std::fmt::{self, Display};

use crate::{
    domains::Ring,
    tensors::matrix::{Matrix, Vector},
};

/// The column width every entry is right-aligned to.
const ENTRY_WIDTH: usize = 8;

/// Prints a matrix as one `| … |` line per row.
pub struct MatrixPrinter<'a, F: Ring> {
    pub matrix: &'a Matrix<F>,
}

impl<'a, F: Ring> MatrixPrinter<'a, F> {
    pub fn new(matrix: &'a Matrix<F>) -> MatrixPrinter<'a, F> {
        MatrixPrinter { matrix }
    }
}

impl<'a, F: Ring> Display for MatrixPrinter<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for row in self.matrix.row_iter() {
            if !first {
                f.write_str("\n")?;
            }
            first = false;

            f.write_str("|")?;
            for e in row {
                write!(f, " {:>width$}", e.to_string(), width = ENTRY_WIDTH)?;
            }
            f.write_str(" |")?;
        }
        Ok(())
    }
}

/// Prints a vector as a single `| … |` line.
pub struct VectorPrinter<'a, F: Ring> {
    pub vector: &'a Vector<F>,
}

impl<'a, F: Ring> VectorPrinter<'a, F> {
    pub fn new(vector: &'a Vector<F>) -> VectorPrinter<'a, F> {
        VectorPrinter { vector }
    }
}

impl<'a, F: Ring> Display for VectorPrinter<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for e in self.vector.iter() {
            write!(f, " {:>width$}", e.to_string(), width = ENTRY_WIDTH)?;
        }
        f.write_str(" |")
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::rational::Q,
        tensors::matrix::{Matrix, Vector},
    };

    #[test]
    fn matrix_layout() {
        let a = Matrix::from_nested_vec(
            vec![vec![1.into(), (-1, 2).into()], vec![10.into(), 4.into()]],
            Q,
        )
        .unwrap();

        assert_eq!(
            a.to_string(),
            "|        1     -1/2 |\n|       10        4 |"
        );
    }

    #[test]
    fn vector_layout() {
        let v = Vector::new(vec![5.into(), (3, 4).into()], Q);
        assert_eq!(v.to_string(), "|        5      3/4 |");
    }
}
