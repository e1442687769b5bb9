#![allow(non_snake_case)]
use lamina::algebra::*;

// diag(2,3,4) in every storage kind that can hold it
fn diag_234() -> Vec<Matrix<f64>> {
    let settings = AlgebraSettings::<f64>::default();
    let rows = [
        [2., 0., 0.], //
        [0., 3., 0.], //
        [0., 0., 4.], //
    ];
    vec![
        DenseMatrix::from(&rows).into(),
        DiagonalMatrix::from_diagonal(vec![2., 3., 4.]).into(),
        TridiagonalMatrix::from_dense_rows(&rows).unwrap().into(),
        CrsMatrix::from_dense_rows(&rows, &settings).unwrap().into(),
    ]
}

#[test]
fn test_diagonal_times_ones() {
    for A in diag_234() {
        let y = A.multiply_vector(&[1., 1., 1.]).unwrap();
        assert_eq!(y, vec![2., 3., 4.], "{}", A.kind());
    }
}

#[test]
fn test_diagonal_squared() {
    let expected: Matrix<f64> = DiagonalMatrix::from_diagonal(vec![4., 9., 16.]).into();
    for A in diag_234() {
        let A2 = A.multiply(&A).unwrap();
        // the tridiagonal product has a pentadiagonal band and is dense
        let kind = match A.kind() {
            StorageKind::Tridiagonal => StorageKind::Dense,
            k => k,
        };
        assert_eq!(A2.kind(), kind);
        assert!(A2.approx_eq(&expected, 0.), "{}", A.kind());
        assert_eq!(A2.get(2, 2).unwrap(), 16.);
        assert_eq!(A2.get(0, 2).unwrap(), 0.);
    }
}

#[test]
fn test_diagonal_properties() {
    for A in diag_234() {
        assert!((A.determinant().unwrap() - 24.).abs() < 1e-12, "{}", A.kind());
        assert_eq!(A.trace().unwrap(), 9.);
        assert_eq!(A.inf_norm().unwrap(), 4.);
        assert_eq!(A.frobenius_norm().unwrap(), 29f64.sqrt());
        assert!(A.is_symmetric(0.));
        assert!(A.nnz() >= 3);
    }
}

#[test]
fn test_mixed_kinds_agree() {
    let mats = diag_234();
    for A in &mats {
        for B in &mats {
            assert!(A.approx_eq(B, 0.));
            let s = A.scalar_product(B).unwrap();
            assert_eq!(s, 29.);
        }
    }
}
