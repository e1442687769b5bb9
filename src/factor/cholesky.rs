#![allow(non_snake_case)]

use super::triangular::{solve_lower, solve_lower_adjoint};
use super::*;
use crate::algebra::{AlgebraSettings, DenseMatrix, ElementT, FieldT, MatrixStorage};
use num_traits::{Float, One, Zero};
use tracing::debug;

/// Cholesky decomposition `A = L·Lᴴ` of a symmetric or Hermitian positive
/// definite matrix.
///
/// Only the lower triangle of `A` is read; symmetry is not verified.  A matrix that
/// is not positive definite fails with
/// [`NotPositiveDefinite`](FactorizationError::NotPositiveDefinite) naming the
/// first column whose diagonal radicand is not positive.
#[derive(Debug, Clone)]
pub struct CholeskyDecomposition<F>
where
    F: FieldT,
{
    L: DenseMatrix<F>,
    U: DenseMatrix<F>,
}

impl<F> CholeskyDecomposition<F>
where
    F: FieldT,
{
    pub fn new<E, M>(A: &M, settings: &AlgebraSettings<F::Real>) -> Result<Self, FactorizationError>
    where
        E: ElementT<Field = F>,
        M: MatrixStorage<E> + ?Sized,
    {
        let n = check_factorizable(A)?;
        let tol = settings.tolerance;
        debug!(n, kind = %A.kind(), "Cholesky decomposition start");

        let Ain = field_copy(A);
        let mut L = DenseMatrix::<F>::zeros((n, n));

        for j in 0..n {
            // diagonal radicand A[j][j] - Σ |L[j][k]|²
            let mut d = Ain[(j, j)];
            for k in 0..j {
                d -= F::from_real(L[(j, k)].magnitude_sq());
            }
            if d.re() <= tol || d.im().abs() > tol {
                debug!(column = j, "Cholesky decomposition: not positive definite");
                return Err(FactorizationError::NotPositiveDefinite { column: j });
            }
            let ljj = F::from_real(d.re().sqrt());
            L[(j, j)] = ljj;

            for i in (j + 1)..n {
                let mut s = Ain[(i, j)];
                for k in 0..j {
                    s -= L[(i, k)] * L[(j, k)].conj();
                }
                L[(i, j)] = s / ljj;
            }
        }

        let U = L.conjugate_transpose();
        debug!(n, "Cholesky decomposition finished");
        Ok(Self { L, U })
    }

    pub fn dim(&self) -> usize {
        self.L.m
    }

    /// lower triangular factor
    pub fn l(&self) -> &DenseMatrix<F> {
        &self.L
    }

    /// upper triangular factor, `Lᴴ`
    pub fn u(&self) -> &DenseMatrix<F> {
        &self.U
    }

    /// Solve `A·x = b`
    pub fn solve(&self, b: &[F]) -> Result<Vec<F>, FactorizationError> {
        check_length(self.dim(), b.len())?;
        let mut x = b.to_vec();
        solve_lower(&self.L, &mut x, false);
        solve_lower_adjoint(&self.L, &mut x);
        Ok(x)
    }

    /// log(det(A)) = 2·Σ log(Lᵢᵢ)
    pub fn logdet(&self) -> F::Real {
        let two = F::Real::one() + F::Real::one();
        let s = (0..self.dim()).fold(F::Real::zero(), |acc, i| acc + self.L[(i, i)].re().ln());
        two * s
    }
}

#[test]
fn test_cholesky() {
    #[rustfmt::skip]
    let S = DenseMatrix::<f64>::from(
        &[[ 8., -2., 4.],
          [-2., 12., 2.],
          [ 4.,  2., 6.]]);

    let settings = AlgebraSettings::<f64>::default();
    let chol = CholeskyDecomposition::new(&S, &settings).unwrap();

    let M = chol.l().mul_dense(chol.u());
    assert!(M.data().iter().zip(S.data()).all(|(a, b): (&f64, &f64)| (a - b).abs() < 1e-8));
    assert!(chol.l().is_tril());

    // solve
    let x = chol.solve(&[1., 2., 3.]).unwrap();
    let y = S.mul_vector(&x);
    assert!(y.iter().zip([1., 2., 3.]).all(|(a, b): (&f64, f64)| (a - b).abs() < 1e-10));

    // logdet.  det(S) = 8*(72-4) + 2*(-12-8) + 4*(-4-48) = 544 - 40 - 208
    assert!((chol.logdet() - 296f64.ln()).abs() < 1e-10);
}

#[test]
fn test_cholesky_fail() {
    let settings = AlgebraSettings::<f64>::default();

    let S = DenseMatrix::<f64>::from(&[[1., 2.], [2., 1.]]);
    assert_eq!(
        CholeskyDecomposition::new(&S, &settings).unwrap_err(),
        FactorizationError::NotPositiveDefinite { column: 1 }
    );

    let S = DenseMatrix::<f64>::zeros((2, 3));
    assert!(matches!(
        CholeskyDecomposition::new(&S, &settings),
        Err(FactorizationError::NotSquare { .. })
    ));
}
