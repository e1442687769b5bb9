#![allow(non_snake_case)]
use lamina::{algebra::*, factor::*};
use num_complex::Complex;

// deterministic entries in [-1, 1)
fn lcg(seed: &mut u64) -> f64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    ((*seed >> 11) as f64 / (1u64 << 53) as f64) * 2. - 1.
}

// diagonally dominant, so well conditioned
fn test_matrix_random(n: usize, seed: u64) -> DenseMatrix<f64> {
    let mut seed = seed;
    let mut A = DenseMatrix::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let v = lcg(&mut seed);
            A.set(i, j, if i == j { v + n as f64 } else { v }).unwrap();
        }
    }
    A
}

macro_rules! generate_test_lu_reconstruction {
    ($fxx:ty, $test_name:ident, $tol:expr) => {
        #[test]
        fn $test_name() {
            let n = 6;
            let A: Matrix<$fxx> = test_matrix_random(n, 17).map(|x| x as $fxx).into();
            let settings = AlgebraSettings::<$fxx>::default();
            let lu = LuDecomposition::new(&A, &settings).unwrap();

            let L: Matrix<$fxx> = lu.l().clone().into();
            let U: Matrix<$fxx> = lu.u().clone().into();
            let LU = L.multiply(&U).unwrap();

            // P·A
            let mut PA = DenseMatrix::<$fxx>::zeros((n, n));
            for i in 0..n {
                let p = lu.pivot()[i] as usize;
                for j in 0..n {
                    PA.set(i, j, A.get(p, j).unwrap()).unwrap();
                }
            }
            assert!(LU.approx_eq(&PA.into(), $tol));

            // pivot entries are a permutation
            let mut seen = vec![false; n];
            for &p in &lu.pivot()[..n] {
                seen[p as usize] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    };
}

generate_test_lu_reconstruction!(f32, test_lu_reconstruction_f32, 1e-4);
generate_test_lu_reconstruction!(f64, test_lu_reconstruction_f64, 1e-12);

#[test]
fn test_lu_parity_and_determinant() {
    // the reversal permutation of 3 rows is one swap
    let A: Matrix<f64> = DenseMatrix::from(&[
        [0., 0., 1.], //
        [0., 1., 0.], //
        [1., 0., 0.], //
    ])
    .into();
    let settings = AlgebraSettings::<f64>::default();
    let lu = LuDecomposition::new(&A, &settings).unwrap();
    assert_eq!(lu.pivot(), &[2, 1, 0, -1]);
    assert_eq!(lu.parity(), -1);
    assert_eq!(lu.determinant(), -1.);
    assert_eq!(A.determinant().unwrap(), -1.);
}

#[test]
fn test_solve_and_inverse() {
    let n = 5;
    let A: Matrix<f64> = test_matrix_random(n, 3).into();
    let settings = AlgebraSettings::<f64>::default();
    let lu = LuDecomposition::new(&A, &settings).unwrap();

    let x0: Vec<f64> = (0..n).map(|i| i as f64 - 2.).collect();
    let b = A.multiply_vector(&x0).unwrap();
    let x = lu.solve(&b).unwrap();
    assert!(x.iter().zip(&x0).all(|(a, b)| (a - b).abs() < 1e-12));

    let Ainv: Matrix<f64> = lu.inverse().unwrap().into();
    let I: Matrix<f64> = DenseMatrix::identity(n).into();
    assert!(Ainv.multiply(&A).unwrap().approx_eq(&I, 1e-12));

    let B = DenseMatrix::from(&[
        [1., 0.], //
        [0., 1.], //
        [1., 1.], //
        [2., 0.], //
        [0., 2.], //
    ]);
    let X: Matrix<f64> = lu.solve_matrix(&B).unwrap().into();
    assert!(A.multiply(&X).unwrap().approx_eq(&B.into(), 1e-12));
}

#[test]
fn test_cholesky_reconstruction() {
    // AᵀA + I is positive definite
    let n = 6;
    let A: Matrix<f64> = test_matrix_random(n, 99).into();
    let I: Matrix<f64> = DiagonalMatrix::identity(n).into();
    let S = A.transpose().multiply(&A).unwrap().add(&I).unwrap();
    assert!(S.is_symmetric(1e-12));

    let settings = AlgebraSettings::<f64>::default();
    let chol = CholeskyDecomposition::new(&S, &settings).unwrap();
    let L: Matrix<f64> = chol.l().clone().into();
    let U: Matrix<f64> = chol.u().clone().into();

    assert!(chol.l().is_tril());
    assert!(U.approx_eq(&L.transpose(), 0.));
    assert!(L.multiply(&U).unwrap().approx_eq(&S, 1e-10));

    let lu = LuDecomposition::new(&S, &settings).unwrap();
    assert!((chol.logdet() - lu.determinant().ln()).abs() < 1e-10);
}

#[test]
fn test_cholesky_hermitian() {
    let c = |re: f64, im: f64| Complex::new(re, im);
    let H: Matrix<Complex<f64>> = TridiagonalMatrix::from_bands(
        &[c(0., -1.), c(1., 1.)],
        &[c(5., 0.), c(4., 0.), c(6., 0.)],
        &[c(0., 1.), c(1., -1.)],
    )
    .unwrap()
    .into();
    assert!(H.is_hermitian(0.));

    let settings = AlgebraSettings::<f64>::default();
    let chol = CholeskyDecomposition::new(&H, &settings).unwrap();
    let L: Matrix<Complex<f64>> = chol.l().clone().into();
    let U: Matrix<Complex<f64>> = chol.u().clone().into();
    assert!(U.approx_eq(&L.conjugate_transpose(), 0.));
    assert!(L.multiply(&U).unwrap().approx_eq(&H, 1e-12));
}

#[test]
fn test_frozen_matrix() {
    let A: Matrix<f64> = test_matrix_random(4, 5).into();
    let det = A.determinant().unwrap();

    let F = A.freeze();
    assert!(!F.is_factored());

    // read access goes through to the matrix
    assert_eq!(F.size(), (4, 4));
    assert!(F.trace().is_ok());

    let mut pivot = vec![0isize; 5];
    F.lu_with_pivot(&mut pivot).unwrap();
    assert!(F.is_factored());
    assert!(pivot[4] == 1 || pivot[4] == -1);
    assert!((F.determinant().unwrap() - det).abs() < 1e-12);

    let A = F.into_inner();
    assert_eq!(A.kind(), StorageKind::Dense);
}

#[test]
fn test_qr_reconstruction() {
    let n = 5;
    let settings = AlgebraSettings::<f64>::default();
    let Ad = test_matrix_random(n, 29);
    for A in [
        Matrix::from(Ad.clone()),
        Matrix::from(CrsMatrix::from_storage(&Ad, &settings)),
    ] {
        let qr = QrDecomposition::new(&A, &settings).unwrap();
        let Q: Matrix<f64> = qr.q().clone().into();
        let R: Matrix<f64> = qr.r().clone().into();
        assert!(Q.is_unitary(1e-12), "{}", A.kind());
        assert!(qr.r().is_triu());
        assert!(Q.multiply(&R).unwrap().approx_eq(&A, 1e-12));

        // agrees with the LU solve
        let b = [1., -2., 3., 0.5, 4.];
        let x1 = qr.solve(&b).unwrap();
        let x2 = LuDecomposition::new(&A, &settings).unwrap().solve(&b).unwrap();
        assert!(x1.iter().zip(&x2).all(|(a, b)| (a - b).abs() < 1e-12));
    }
}

#[test]
fn test_qr_complex() {
    let n = 4;
    let (Re, Im) = (test_matrix_random(n, 3), test_matrix_random(n, 5));
    let mut Z = DenseMatrix::<Complex<f64>>::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            Z.set(i, j, Complex::new(Re[(i, j)], Im[(i, j)])).unwrap();
        }
    }
    let Z: Matrix<Complex<f64>> = Z.into();
    assert!(Z.real().approx_eq(&Re.clone().into(), 0.));
    assert!(Z.imag().approx_eq(&Im.into(), 0.));

    let settings = AlgebraSettings::<f64>::default();
    let qr = QrDecomposition::new(&Z, &settings).unwrap();
    let Q: Matrix<Complex<f64>> = qr.q().clone().into();
    let R: Matrix<Complex<f64>> = qr.r().clone().into();
    assert!(Q.is_unitary(1e-12));
    // a complex unitary factor is not orthogonal in general
    assert!(!Q.multiply(&Q.transpose()).unwrap().approx_eq(&DenseMatrix::identity(n).into(), 1e-6));
    assert!(Q.multiply(&R).unwrap().approx_eq(&Z, 1e-12));
    for i in 0..n {
        for j in 0..i {
            assert_eq!(R.get(i, j).unwrap(), Complex::new(0., 0.));
        }
    }
}
