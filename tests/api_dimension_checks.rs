#![allow(non_snake_case)]
use lamina::{algebra::*, factor::*};

// a collection of tests to ensure that operands of
// incompatible dimension are rejected with an error

fn api_dim_check_data() -> (Matrix<f64>, Matrix<f64>, Matrix<f64>) {
    let settings = AlgebraSettings::<f64>::default();
    let A = DenseMatrix::zeros((4, 3)).into();
    let B = CrsMatrix::new(3, 2, &settings).into();
    let D = DiagonalMatrix::identity(4).into();
    (A, B, D)
}

#[test]
fn api_dim_check_working() {
    // These should work because dimensions are compatible.
    let (A, B, D) = api_dim_check_data();
    assert_eq!(A.multiply(&B).unwrap().size(), (4, 2));
    assert_eq!(D.multiply(&A).unwrap().size(), (4, 3));
    assert_eq!(A.add(&A).unwrap().size(), (4, 3));
    assert_eq!(A.multiply_vector(&[1., 2., 3.]).unwrap().len(), 4);
}

#[test]
fn api_dim_check_bad_multiply() {
    let (A, B, D) = api_dim_check_data();
    assert_eq!(
        B.multiply(&A),
        Err(MatrixError::IncompatibleDimension {
            op: "multiply",
            lhs: (3, 2),
            rhs: (4, 3)
        })
    );
    assert!(A.multiply(&D).is_err());
}

#[test]
fn api_dim_check_bad_sum() {
    let (A, B, D) = api_dim_check_data();
    assert!(A.add(&B).is_err());
    assert!(A.subtract(&D).is_err());
    assert!(A.scalar_product(&D).is_err());
}

#[test]
fn api_dim_check_bad_vector() {
    let (A, _, _) = api_dim_check_data();
    assert_eq!(
        A.multiply_vector(&[1., 2.]),
        Err(MatrixError::VectorLength {
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn api_dim_check_not_square() {
    let (A, _, _) = api_dim_check_data();
    let settings = AlgebraSettings::<f64>::default();
    assert!(matches!(A.trace(), Err(MatrixError::NotSquare { .. })));
    assert!(matches!(A.determinant(), Err(MatrixError::NotSquare { .. })));
    assert!(matches!(
        LuDecomposition::new(&A, &settings),
        Err(FactorizationError::NotSquare { nrows: 4, ncols: 3 })
    ));
    assert!(matches!(
        CholeskyDecomposition::new(&A, &settings),
        Err(FactorizationError::NotSquare { .. })
    ));
}

#[test]
fn api_dim_check_banded_writes() {
    let mut D = DiagonalMatrix::<f64>::new(3);
    assert!(matches!(D.set(0, 1, 1.), Err(MatrixError::InvalidArgument(_))));
    assert!(D.set(0, 1, 0.).is_ok());
    assert!(D.set(3, 3, 1.).is_err());
    assert!(D.set_all(1.).is_err());

    let mut T = TridiagonalMatrix::<f64>::new(4);
    assert!(T.set(1, 2, 1.).is_ok());
    assert!(matches!(T.set(0, 2, 1.), Err(MatrixError::InvalidArgument(_))));
}

#[test]
fn api_dim_check_tridiagonal_bands() {
    assert_eq!(
        TridiagonalMatrix::<f64>::from_bands(&[1.], &[1., 2., 3.], &[1., 1.]),
        Err(MatrixError::VectorLength {
            expected: 2,
            found: 1
        })
    );

    let T: Matrix<f64> = TridiagonalMatrix::from_bands(&[5.], &[1., 2.], &[6.])
        .unwrap()
        .into();
    assert_eq!(T.get(1, 0), Ok(5.));
    assert!(matches!(
        T.get(2, 1),
        Err(MatrixError::IndexOutOfBounds { .. })
    ));
    if let Matrix::Tridiagonal(B) = &T {
        assert_eq!((B.lower(), B.diag(), B.upper()), (&[5.][..], &[1., 2.][..], &[6.][..]));
    }
}
