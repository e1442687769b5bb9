#![allow(non_snake_case)]
use crate::algebra::*;
use itertools::iproduct;

fn test_dense_4x4() -> DenseMatrix<f64> {
    DenseMatrix::from(&[
        [1., 2., 0., -1.], //
        [3., -4., 5., 0.], //
        [0., 1., 1., 2.],  //
        [-2., 0., 6., 3.], //
    ])
}

fn test_diagonal_4x4() -> DiagonalMatrix<f64> {
    DiagonalMatrix::from_diagonal(vec![2., -1., 3., 0.5])
}

fn test_tridiagonal_4x4() -> TridiagonalMatrix<f64> {
    // A =
    //[ 4.0  -3.0    ⋅     ⋅ ]
    //[ 1.0   8.0  -1.0    ⋅ ]
    //[  ⋅   -1.0   2.0  -3.0]
    //[  ⋅     ⋅    2.0   1.0]
    TridiagonalMatrix::from_bands(&[1., -1., 2.], &[4., 8., 2., 1.], &[-3., -1., -3.]).unwrap()
}

fn test_sparse_4x4() -> CrsMatrix<f64> {
    // A =
    //[  ⋅     ⋅    7.0    ⋅ ]
    //[ 1.0    ⋅     ⋅     ⋅ ]
    //[  ⋅     ⋅     ⋅   -3.0]
    //[  ⋅    5.0    ⋅    1.0]
    let settings = AlgebraSettings::<f64>::default();
    CrsMatrix::from_dense_rows(
        &[
            [0., 0., 7., 0.],  //
            [1., 0., 0., 0.],  //
            [0., 0., 0., -3.], //
            [0., 5., 0., 1.],  //
        ],
        &settings,
    )
    .unwrap()
}

fn all_kinds() -> Vec<Matrix<f64>> {
    vec![
        test_dense_4x4().into(),
        test_diagonal_4x4().into(),
        test_tridiagonal_4x4().into(),
        test_sparse_4x4().into(),
    ]
}

// the same operation on dense copies of both operands
fn dense_reference<F>(A: &Matrix<f64>, B: &Matrix<f64>, op: F) -> Matrix<f64>
where
    F: Fn(&Matrix<f64>, &Matrix<f64>) -> Matrix<f64>,
{
    let Ad: Matrix<f64> = A.to_dense().into();
    let Bd: Matrix<f64> = B.to_dense().into();
    op(&Ad, &Bd)
}

fn expected_sum_kind(a: StorageKind, b: StorageKind) -> StorageKind {
    use StorageKind::*;
    match (a, b) {
        (Dense, Dense) => Dense,
        (Diagonal, Diagonal) => Diagonal,
        (Diagonal | Tridiagonal, Diagonal | Tridiagonal) => Tridiagonal,
        (Sparse, Sparse) => Sparse,
        _ => Dense,
    }
}

fn expected_product_kind(a: StorageKind, b: StorageKind) -> StorageKind {
    use StorageKind::*;
    match (a, b) {
        (Diagonal, Diagonal) => Diagonal,
        (Diagonal, Tridiagonal) | (Tridiagonal, Diagonal) => Tridiagonal,
        (Sparse, Sparse) => Sparse,
        _ => Dense,
    }
}

#[test]
fn test_add_subtract_table() {
    let mats = all_kinds();
    for (A, B) in iproduct!(mats.iter(), mats.iter()) {
        let expected = expected_sum_kind(A.kind(), B.kind());

        let C = A.add(B).unwrap();
        assert_eq!(C.kind(), expected, "{} + {}", A.kind(), B.kind());
        let R = dense_reference(A, B, |a, b| a.add(b).unwrap());
        assert!(C.approx_eq(&R, 1e-12));

        let C = A.subtract(B).unwrap();
        assert_eq!(C.kind(), expected, "{} - {}", A.kind(), B.kind());
        let R = dense_reference(A, B, |a, b| a.subtract(b).unwrap());
        assert!(C.approx_eq(&R, 1e-12));
    }
}

#[test]
fn test_multiply_table() {
    let mats = all_kinds();
    for (A, B) in iproduct!(mats.iter(), mats.iter()) {
        let C = A.multiply(B).unwrap();
        let expected = expected_product_kind(A.kind(), B.kind());
        assert_eq!(C.kind(), expected, "{} * {}", A.kind(), B.kind());

        let R = dense_reference(A, B, |a, b| a.multiply(b).unwrap());
        assert!(C.approx_eq(&R, 1e-12), "{} * {}", A.kind(), B.kind());
    }
}

#[test]
fn test_scalar_product_table() {
    let mats = all_kinds();
    for (A, B) in iproduct!(mats.iter(), mats.iter()) {
        let s = A.scalar_product(B).unwrap();
        let Ad: Matrix<f64> = A.to_dense().into();
        let Bd: Matrix<f64> = B.to_dense().into();
        let r = Ad.scalar_product(&Bd).unwrap();
        assert!((s - r).abs() < 1e-12, "{} . {}", A.kind(), B.kind());
    }
}

#[test]
fn test_multiply_vector_all_kinds() {
    let x = [1., -2., 0.5, 3.];
    for A in all_kinds() {
        let y = A.multiply_vector(&x).unwrap();
        let r = A.to_dense().mul_vector(&x);
        assert!(y.iter().zip(&r).all(|(a, b)| (a - b).abs() < 1e-12));

        assert_eq!(
            A.multiply_vector(&x[..3]),
            Err(MatrixError::VectorLength {
                expected: 4,
                found: 3
            })
        );
    }
}

#[test]
fn test_dimension_mismatch() {
    let A: Matrix<f64> = test_dense_4x4().into();
    let B: Matrix<f64> = DenseMatrix::zeros((3, 4)).into();

    assert!(matches!(
        A.add(&B),
        Err(MatrixError::IncompatibleDimension { op: "add", .. })
    ));
    assert!(matches!(
        A.scalar_product(&B),
        Err(MatrixError::IncompatibleDimension { .. })
    ));
    // 4x4 * 3x4
    assert!(matches!(
        A.multiply(&B),
        Err(MatrixError::IncompatibleDimension { op: "multiply", .. })
    ));
    // 3x4 * 4x4 is fine
    assert_eq!(B.multiply(&A).unwrap().size(), (3, 4));
}

#[test]
fn test_unary_kinds() {
    for A in all_kinds() {
        let kind = A.kind();
        assert_eq!(A.scalar_multiply(2.).kind(), kind);
        assert_eq!(A.scalar_divide(2.).unwrap().kind(), kind);
        assert_eq!(A.negate().kind(), kind);
        assert_eq!(A.transpose().kind(), kind);
        assert!(matches!(
            A.scalar_divide(0.),
            Err(MatrixError::InvalidArgument(_))
        ));

        let T: Matrix<f64> = A.to_dense().transpose().into();
        assert!(A.transpose().approx_eq(&T, 0.));
        assert!(A.transpose().transpose().approx_eq(&A, 0.));

        let N = A.add(&A.negate()).unwrap();
        assert_eq!(N.frobenius_norm().unwrap(), 0.);

        // f(0) = 1 reaches every implicit cell
        let M = A.map_elements(|x| x + 1.);
        assert_eq!(M.kind(), StorageKind::Dense);
        let ones = A.map_elements(|_| 1.);
        let total: f64 = A.to_dense().data().iter().sum();
        assert_eq!(M.scalar_product(&ones).unwrap(), total + 16.);
    }
}

#[test]
fn test_block_products() {
    use StorageKind::*;
    let mats = all_kinds();
    for (A, B) in iproduct!(mats.iter(), mats.iter()) {
        let C = A.direct_sum(B);
        let expected = match (A.kind(), B.kind()) {
            (Diagonal, Diagonal) => Diagonal,
            (Diagonal | Tridiagonal, Diagonal | Tridiagonal) => Tridiagonal,
            (Sparse, _) | (_, Sparse) => Sparse,
            _ => Dense,
        };
        assert_eq!(C.kind(), expected, "{} (+) {}", A.kind(), B.kind());
        assert_eq!(C.size(), (8, 8));
        let R = dense_reference(A, B, |a, b| a.direct_sum(b));
        assert!(C.approx_eq(&R, 0.));

        let C = A.tensor_product(B);
        let expected = match (A.kind(), B.kind()) {
            (Diagonal, Diagonal) => Diagonal,
            (Sparse, _) | (_, Sparse) => Sparse,
            _ => Dense,
        };
        assert_eq!(C.kind(), expected, "{} (x) {}", A.kind(), B.kind());
        assert_eq!(C.size(), (16, 16));
        let R = dense_reference(A, B, |a, b| a.tensor_product(b));
        assert!(C.approx_eq(&R, 0.));
        if let Matrix::Sparse(S) = &C {
            assert!(S.check_format().is_ok());
        }
    }
}

#[test]
fn test_sparse_square() {
    // diag(2,3,4) stored sparse
    let settings = AlgebraSettings::<f64>::default();
    let S: Matrix<f64> = CrsMatrix::from_dense_rows(
        &[
            [2., 0., 0.], //
            [0., 3., 0.], //
            [0., 0., 4.], //
        ],
        &settings,
    )
    .unwrap()
    .into();

    assert_eq!(S.multiply_vector(&[1., 1., 1.]).unwrap(), vec![2., 3., 4.]);

    let S2 = S.multiply(&S).unwrap();
    assert_eq!(S2.kind(), StorageKind::Sparse);
    assert_eq!(S2.nnz(), 3);
    let D: Matrix<f64> = DiagonalMatrix::from_diagonal(vec![4., 9., 16.]).into();
    assert!(S2.approx_eq(&D, 0.));
}

#[test]
fn test_complex_parts() {
    use num_complex::Complex;
    let c = |re: f64, im: f64| Complex::new(re, im);
    let settings = AlgebraSettings::<f64>::default();

    let Z = DenseMatrix::from(&[
        [c(1., 2.), c(0., 0.), c(0., 0.)],  //
        [c(3., 0.), c(0., -1.), c(4., 4.)], //
        [c(0., 0.), c(5., 0.), c(6., -6.)], //
    ]);
    let T = TridiagonalMatrix::from_dense_rows(&[
        [c(1., 2.), c(0., 0.), c(0., 0.)],  //
        [c(3., 0.), c(0., -1.), c(4., 4.)], //
        [c(0., 0.), c(5., 0.), c(6., -6.)], //
    ])
    .unwrap();
    let kinds: Vec<Matrix<Complex<f64>>> = vec![
        Z.clone().into(),
        T.clone().into(),
        CrsMatrix::from_storage(&T, &settings).into(),
    ];

    let re = DenseMatrix::from(&[[1., 0., 0.], [3., 0., 4.], [0., 5., 6.]]);
    let im = DenseMatrix::from(&[[2., 0., 0.], [0., -1., 4.], [0., 0., -6.]]);
    for A in &kinds {
        assert_eq!(A.real().kind(), A.kind());
        assert_eq!(A.real().to_dense(), re);
        assert_eq!(A.imag().to_dense(), im);
        assert_eq!(A.conjugate().kind(), A.kind());
        assert_eq!(A.conjugate().element(1, 2), c(4., -4.));
        // conjugate then transpose is the adjoint
        assert_eq!(A.conjugate().transpose(), A.conjugate_transpose());
    }

    // purely real entries leave no stored imaginary part
    if let Matrix::Sparse(S) = &kinds[2] {
        assert_eq!(S.nnz(), 6);
    }
    assert_eq!(kinds[2].imag().nnz(), 4);

    let D: Matrix<Complex<f64>> = DiagonalMatrix::from_diagonal(vec![c(1., -1.), c(0., 2.)]).into();
    assert_eq!(D.imag(), Matrix::from(DiagonalMatrix::from_diagonal(vec![-1., 2.])));
}
