use explica::{
    domains::rational::{Q, Rational},
    steps::SolveErrorKind,
    tensors::matrix::{Matrix, Vector},
};

fn matrix(rows: Vec<Vec<i64>>) -> Matrix<Q> {
    Matrix::from_nested_vec(
        rows.into_iter()
            .map(|r| r.into_iter().map(|e| e.into()).collect())
            .collect(),
        Q,
    )
    .unwrap()
}

fn vector(entries: Vec<i64>) -> Vector<Q> {
    Vector::new(entries.into_iter().map(|e| e.into()).collect(), Q)
}

fn column(entries: &[Rational]) -> Matrix<Q> {
    Matrix::from_linear(entries.to_vec(), entries.len() as u32, 1, Q).unwrap()
}

#[test]
fn cramer_exact_integers() {
    let a = matrix(vec![vec![2, 1], vec![1, 1]]);
    let b = vector(vec![5, 3]);

    let sol = a.solve_cramer(&b).unwrap();
    assert_eq!(sol.det, Rational::one());
    assert_eq!(sol.variables[0].value, 2.into());
    assert_eq!(sol.variables[0].value.denominator(), 1);
    assert_eq!(sol.variables[1].value, 1.into());
    assert_eq!(sol.variables[1].value.denominator(), 1);
}

#[test]
fn cramer_singular_system() {
    let a = matrix(vec![vec![1, 0], vec![0, 0]]);
    let b = vector(vec![1, 0]);

    let err = a.solve_cramer(&b).unwrap_err();
    assert_eq!(err.kind, SolveErrorKind::NoUniqueSolution);
    assert!(!err.steps.is_empty());
}

#[test]
fn adjugate_inverse_of_diagonal() {
    let a = matrix(vec![vec![2, 0], vec![0, 2]]);

    let inv = a.inv_adjugate().unwrap();
    let expected = matrix(vec![vec![1, 0], vec![0, 1]]).mul_scalar(&(1, 2).into());
    assert_eq!(inv.inverse, expected);
}

#[test]
fn gauss_jordan_three_unknowns() {
    let a = matrix(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 10]]);
    let b = vector(vec![6, 15, 25]);

    let sol = a.solve_gauss_jordan(&b).unwrap();
    let values: Vec<_> = sol.variables.iter().map(|v| v.value).collect();
    assert_eq!(values, vec![1.into(), 1.into(), 1.into()]);

    // verify by substitution
    let x = column(&values);
    let expected = column(&[6.into(), 15.into(), 25.into()]);
    assert_eq!(&a * &x, expected);
}

#[test]
fn gauss_jordan_rank_deficient() {
    let a = matrix(vec![vec![1, 1], vec![2, 2]]);
    let b = vector(vec![1, 2]);

    let err = a.solve_gauss_jordan(&b).unwrap_err();
    assert_eq!(err.kind, SolveErrorKind::Underdetermined);
}

#[test]
fn solvers_agree() {
    let a = matrix(vec![vec![3, 2, 15], vec![4, 9, 6], vec![7, 8, 17]]);
    let b = vector(vec![1, 2, 3]);

    let cramer = a.solve_cramer(&b).unwrap();
    let gauss = a.solve_gauss_jordan(&b).unwrap();

    for (c, g) in cramer.variables.iter().zip(&gauss.variables) {
        assert_eq!(c.name, g.name);
        assert_eq!(c.value, g.value);
    }
}

#[test]
fn solvers_agree_on_expansion_sizes() {
    // 4x4 exercises the cofactor-expansion determinant path
    let a = matrix(vec![
        vec![3, 2, 15, 4],
        vec![9, 6, 7, 8],
        vec![17, 45, 23, 12],
        vec![13, 14, 15, 16],
    ]);
    let b = vector(vec![1, 0, 2, -1]);

    let cramer = a.solve_cramer(&b).unwrap();
    let gauss = a.solve_gauss_jordan(&b).unwrap();

    for (c, g) in cramer.variables.iter().zip(&gauss.variables) {
        assert_eq!(c.value, g.value);
    }

    // substitute back into the system
    let x = column(&cramer.variables.iter().map(|v| v.value).collect::<Vec<_>>());
    let expected = column(&[1.into(), 0.into(), 2.into(), (-1).into()]);
    assert_eq!(&a * &x, expected);
}

#[test]
fn inversion_strategies_agree() {
    let a = matrix(vec![vec![3, 2, 15], vec![4, 9, 6], vec![7, 8, 17]]);

    let adj = a.inv_adjugate().unwrap();
    let gauss = a.inv_gauss_jordan().unwrap();
    assert_eq!(adj.inverse, gauss.inverse);

    assert_eq!(&a * &adj.inverse, Matrix::identity(3, Q));
    assert_eq!(&adj.inverse * &a, Matrix::identity(3, Q));
}

#[test]
fn four_by_four_inverse() {
    let a = matrix(vec![
        vec![3, 2, 15, 4],
        vec![9, 6, 7, 8],
        vec![17, 45, 23, 12],
        vec![13, 14, 15, 16],
    ]);

    let adj = a.inv_adjugate().unwrap();
    let gauss = a.inv_gauss_jordan().unwrap();
    assert_eq!(adj.inverse, gauss.inverse);
    assert_eq!(&a * &adj.inverse, Matrix::identity(4, Q));
}

#[test]
fn singular_inverse_fails_both_ways() {
    let a = matrix(vec![vec![1, 2], vec![2, 4]]);

    assert_eq!(
        a.inv_adjugate().unwrap_err().kind,
        SolveErrorKind::NotInvertible
    );
    assert_eq!(
        a.inv_gauss_jordan().unwrap_err().kind,
        SolveErrorKind::Underdetermined
    );
}

#[test]
fn fractional_entries() {
    // 1/2 x + 1/3 y = 1 ; 1/4 x - y = 0, from decimal input
    let a = Matrix::from_nested_vec(
        vec![
            vec![Rational::from_f64(0.5), (1, 3).into()],
            vec![Rational::from_f64(0.25), (-1).into()],
        ],
        Q,
    )
    .unwrap();
    let b = vector(vec![1, 0]);

    let cramer = a.solve_cramer(&b).unwrap();
    let gauss = a.solve_gauss_jordan(&b).unwrap();

    assert_eq!(cramer.variables[0].value, (12, 7).into());
    assert_eq!(cramer.variables[1].value, (3, 7).into());
    for (c, g) in cramer.variables.iter().zip(&gauss.variables) {
        assert_eq!(c.value, g.value);
    }
}
