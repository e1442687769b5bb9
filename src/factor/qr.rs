#![allow(non_snake_case)]

use super::triangular::solve_upper;
use super::*;
use crate::algebra::{AlgebraSettings, DenseMatrix, ElementT, FieldT, MatrixStorage};
use num_traits::{Float, One, Zero};
use tracing::{debug, warn};

/// QR decomposition `A = Q·R` by Householder reflections.
///
/// `Q` is orthogonal (unitary for complex domains) and `R` is upper
/// triangular, both dense and in the factorization field.  Each reflection
/// `H = I - 2·v·vᴴ/(vᴴ·v)` zeroes one column below the diagonal; a column that
/// is already zero at or below the tolerance is skipped and leaves a zero on
/// the diagonal of `R`.
///
/// ```
/// use lamina::algebra::*;
/// use lamina::factor::*;
///
/// let A = DenseMatrix::<f64>::from(&[
///     [3., 1.], //
///     [4., 2.], //
/// ]);
/// let qr = QrDecomposition::new(&A, &AlgebraSettings::<f64>::default()).unwrap();
///
/// assert!((qr.r()[(0, 0)].abs() - 5.).abs() < 1e-12);
/// assert!(qr.r()[(1, 0)] == 0.);
/// let x = qr.solve(&[5., 8.]).unwrap();
/// assert!((x[0] - 1.).abs() < 1e-12 && (x[1] - 2.).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct QrDecomposition<F>
where
    F: FieldT,
{
    Q: DenseMatrix<F>,
    R: DenseMatrix<F>,
    // first column without a reflection
    deficient: Option<usize>,
}

impl<F> QrDecomposition<F>
where
    F: FieldT,
{
    /// Factor a square matrix of any storage kind.
    pub fn new<E, M>(A: &M, settings: &AlgebraSettings<F::Real>) -> Result<Self, FactorizationError>
    where
        E: ElementT<Field = F>,
        M: MatrixStorage<E> + ?Sized,
    {
        let n = check_factorizable(A)?;
        let tol = settings.tolerance;
        debug!(n, kind = %A.kind(), "QR decomposition start");

        let mut R = field_copy(A);
        let mut Q = DenseMatrix::<F>::identity(n);
        let mut deficient = None;
        let two = F::Real::one() + F::Real::one();
        let mut v = vec![F::zero(); n];

        for k in 0..n {
            let norm = (k..n)
                .fold(F::Real::zero(), |acc, i| acc + R[(i, k)].magnitude_sq())
                .sqrt();
            if norm <= tol {
                warn!(column = k, "QR decomposition: zero column");
                for i in (k + 1)..n {
                    R[(i, k)] = F::zero();
                }
                if deficient.is_none() {
                    deficient = Some(k);
                }
                continue;
            }

            // alpha = -phase(x₀)·‖x‖ keeps v₀ = x₀ - alpha free of cancellation
            let x0 = R[(k, k)];
            let phase = if x0.magnitude() > F::Real::zero() {
                x0 / F::from_real(x0.magnitude())
            } else {
                F::one()
            };
            let alpha = -(phase * F::from_real(norm));

            for i in k..n {
                v[i] = R[(i, k)];
            }
            v[k] -= alpha;
            let vnorm_sq = (k..n).fold(F::Real::zero(), |acc, i| acc + v[i].magnitude_sq());
            let beta = F::from_real(two / vnorm_sq);

            // R ← H·R, column k is known exactly
            R[(k, k)] = alpha;
            for i in (k + 1)..n {
                R[(i, k)] = F::zero();
            }
            for j in (k + 1)..n {
                let s = (k..n).fold(F::zero(), |acc, i| acc + v[i].conj() * R[(i, j)]) * beta;
                for i in k..n {
                    R[(i, j)] -= s * v[i];
                }
            }

            // Q ← Q·H
            for r in 0..n {
                let s = (k..n).fold(F::zero(), |acc, i| acc + Q[(r, i)] * v[i]) * beta;
                for i in k..n {
                    Q[(r, i)] -= s * v[i].conj();
                }
            }
        }

        debug!(n, full_rank = deficient.is_none(), "QR decomposition finished");
        Ok(Self { Q, R, deficient })
    }

    /// dimension of the factored matrix
    pub fn dim(&self) -> usize {
        self.R.m
    }

    /// orthogonal (unitary) factor
    pub fn q(&self) -> &DenseMatrix<F> {
        &self.Q
    }

    /// upper triangular factor
    pub fn r(&self) -> &DenseMatrix<F> {
        &self.R
    }

    pub fn is_full_rank(&self) -> bool {
        self.deficient.is_none()
    }

    /// first column left without a reflection
    pub fn deficient_column(&self) -> Option<usize> {
        self.deficient
    }

    /// Solve `A·x = b` as `R·x = Qᴴ·b`
    pub fn solve(&self, b: &[F]) -> Result<Vec<F>, FactorizationError> {
        let n = self.dim();
        check_length(n, b.len())?;
        if let Some(column) = self.deficient {
            return Err(FactorizationError::Singular { column });
        }
        let mut x: Vec<F> = (0..n)
            .map(|j| (0..n).fold(F::zero(), |acc, i| acc + self.Q[(i, j)].conj() * b[i]))
            .collect();
        solve_upper(&self.R, &mut x);
        Ok(x)
    }
}

#[cfg(test)]
macro_rules! generate_test_qr {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let A = DenseMatrix::<$fxx>::from(&[
                [12., -51., 4.], //
                [6., 167., -68.], //
                [-4., 24., -41.], //
            ]);
            let settings = AlgebraSettings::<$fxx>::default();
            let qr = QrDecomposition::new(&A, &settings).unwrap();
            let tol = 1e-3 as $fxx;

            // A = Q·R
            let QR = qr.q().mul_dense(qr.r());
            for (a, b) in QR.data().iter().zip(A.data()) {
                assert!((a - b).abs() < tol);
            }
            assert!(qr.r().is_triu());
            assert!(qr.is_full_rank());

            // Qᵀ·Q = I
            let QtQ = qr.q().transpose().mul_dense(qr.q());
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1. } else { 0. };
                    assert!((QtQ[(i, j)] - expected).abs() < (1e-4 as $fxx));
                }
            }

            // |diag(R)| = (14, 175, 35)
            for (i, d) in [14., 175., 35.].into_iter().enumerate() {
                assert!((qr.r()[(i, i)].abs() - (d as $fxx)).abs() < tol);
            }
        }
    };
}

#[cfg(test)]
generate_test_qr!(f32, test_qr_f32);
#[cfg(test)]
generate_test_qr!(f64, test_qr_f64);

#[test]
fn test_qr_rank_deficient() {
    let A = DenseMatrix::<f64>::from(&[
        [0., 1.], //
        [0., 2.], //
    ]);
    let qr = QrDecomposition::new(&A, &AlgebraSettings::<f64>::default()).unwrap();
    assert_eq!(qr.deficient_column(), Some(0));
    let QR = qr.q().mul_dense(qr.r());
    assert!(QR.data().iter().zip(A.data()).all(|(a, b): (&f64, &f64)| (a - b).abs() < 1e-12));
    assert!(qr.r().is_triu());
    assert_eq!(qr.solve(&[1., 2.]), Err(FactorizationError::Singular { column: 0 }));
}
