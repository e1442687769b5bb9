#![allow(non_snake_case)]

use super::triangular::{solve_lower, solve_upper};
use super::*;
use crate::algebra::{AlgebraSettings, DenseMatrix, ElementT, FieldT, MatrixStorage};
use tracing::{debug, warn};

/// LU decomposition with partial pivoting, `P·A = L·U`.
///
/// `L` is unit lower triangular and `U` is upper triangular, both dense and in the
/// factorization field of the source domain.  Row `i` of `P·A` is row `pivot()[i]`
/// of `A`.
///
/// A column whose best pivot has magnitude at or below the tolerance is recorded
/// as singular rather than divided through.  The decomposition still completes and
/// [`determinant`](LuDecomposition::determinant) is available, but
/// [`solve`](LuDecomposition::solve) and [`inverse`](LuDecomposition::inverse) fail.
///
/// ```
/// use lamina::algebra::*;
/// use lamina::factor::*;
///
/// let A = DenseMatrix::<f64>::from(&[
///     [1., 2.], //
///     [3., 4.], //
/// ]);
/// let lu = LuDecomposition::new(&A, &AlgebraSettings::<f64>::default()).unwrap();
///
/// assert_eq!(lu.pivot(), &[1, 0, -1]);
/// assert!((lu.determinant() + 2.).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<F>
where
    F: FieldT,
{
    L: DenseMatrix<F>,
    U: DenseMatrix<F>,
    // row permutation followed by the parity
    pivot: Vec<isize>,
    // first column with a zero pivot
    singular: Option<usize>,
}

impl<F> LuDecomposition<F>
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
        debug!(n, kind = %A.kind(), "LU decomposition start");

        // working buffer, holding L below the diagonal and U on and above it.
        let mut LU = field_copy(A);
        let mut perm: Vec<usize> = (0..n).collect();
        let mut parity: isize = 1;
        let mut singular = None;

        for j in 0..n {
            // finalize column j of U above the diagonal, then form the
            // pivot candidates on and below it
            for i in 0..n {
                let kmax = i.min(j);
                let mut s = F::zero();
                for k in 0..kmax {
                    s += LU[(i, k)] * LU[(k, j)];
                }
                LU[(i, j)] -= s;
            }

            // pivot search
            let mut p = j;
            let mut pmax = LU[(j, j)].magnitude();
            for i in (j + 1)..n {
                let mag = LU[(i, j)].magnitude();
                if mag > pmax {
                    p = i;
                    pmax = mag;
                }
            }

            if p != j {
                for k in 0..n {
                    let tmp = LU[(p, k)];
                    LU[(p, k)] = LU[(j, k)];
                    LU[(j, k)] = tmp;
                }
                perm.swap(p, j);
                parity = -parity;
            }

            if pmax <= tol {
                warn!(column = j, "LU decomposition: zero pivot");
                if singular.is_none() {
                    singular = Some(j);
                }
                continue;
            }

            let pivot = LU[(j, j)];
            for i in (j + 1)..n {
                LU[(i, j)] /= pivot;
            }
        }

        // split the buffer into factors
        let mut L = DenseMatrix::<F>::identity(n);
        let mut U = DenseMatrix::<F>::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                if i > j {
                    L[(i, j)] = LU[(i, j)];
                } else {
                    U[(i, j)] = LU[(i, j)];
                }
            }
        }

        let mut pivot: Vec<isize> = perm.iter().map(|&p| p as isize).collect();
        pivot.push(parity);

        debug!(n, singular = singular.is_some(), "LU decomposition finished");
        Ok(Self {
            L,
            U,
            pivot,
            singular,
        })
    }

    /// dimension of the factored matrix
    pub fn dim(&self) -> usize {
        self.U.m
    }

    /// unit lower triangular factor
    pub fn l(&self) -> &DenseMatrix<F> {
        &self.L
    }

    /// upper triangular factor
    pub fn u(&self) -> &DenseMatrix<F> {
        &self.U
    }

    /// Row permutation, `n+1` entries.  The first `n` give the source row of
    /// each row of `P·A`; the last is the permutation parity, `1` or `-1`.
    pub fn pivot(&self) -> &[isize] {
        &self.pivot
    }

    /// sign of the row permutation
    pub fn parity(&self) -> isize {
        self.pivot[self.dim()]
    }

    pub fn is_singular(&self) -> bool {
        self.singular.is_some()
    }

    /// first column found with a zero pivot
    pub fn singular_column(&self) -> Option<usize> {
        self.singular
    }

    /// product of the diagonal of `U` and the parity
    pub fn determinant(&self) -> F {
        let d = (0..self.dim()).fold(F::one(), |acc, i| acc * self.U[(i, i)]);
        if self.parity() < 0 {
            -d
        } else {
            d
        }
    }

    fn check_nonsingular(&self) -> Result<(), FactorizationError> {
        match self.singular {
            Some(column) => Err(FactorizationError::Singular { column }),
            None => Ok(()),
        }
    }

    /// Solve `A·x = b`
    pub fn solve(&self, b: &[F]) -> Result<Vec<F>, FactorizationError> {
        check_length(self.dim(), b.len())?;
        self.check_nonsingular()?;
        let mut x: Vec<F> = self.pivot[..self.dim()]
            .iter()
            .map(|&p| b[p as usize])
            .collect();
        solve_lower(&self.L, &mut x, true);
        solve_upper(&self.U, &mut x);
        Ok(x)
    }

    /// Solve `A·X = B` column by column
    pub fn solve_matrix(&self, B: &DenseMatrix<F>) -> Result<DenseMatrix<F>, FactorizationError> {
        check_length(self.dim(), B.m)?;
        self.check_nonsingular()?;
        let mut X = DenseMatrix::zeros(B.size());
        let mut col = vec![F::zero(); B.m];
        for j in 0..B.n {
            for (i, c) in col.iter_mut().enumerate() {
                *c = B[(i, j)];
            }
            let x = self.solve(&col)?;
            for (i, &xi) in x.iter().enumerate() {
                X[(i, j)] = xi;
            }
        }
        Ok(X)
    }

    /// A⁻¹
    pub fn inverse(&self) -> Result<DenseMatrix<F>, FactorizationError> {
        self.solve_matrix(&DenseMatrix::identity(self.dim()))
    }
}

#[cfg(test)]
macro_rules! generate_test_lu {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let A = DenseMatrix::<$fxx>::from(&[
                [3., 2., 4.], //
                [2., 0., 2.], //
                [4., 2., 3.], //
            ]);
            let settings = AlgebraSettings::<$fxx>::default();
            let lu = LuDecomposition::new(&A, &settings).unwrap();

            // P·A = L·U
            let LU = lu.l().mul_dense(lu.u());
            for i in 0..3 {
                let p = lu.pivot()[i] as usize;
                for j in 0..3 {
                    assert!((LU[(i, j)] - A[(p, j)]).abs() < (1e-5 as $fxx));
                }
            }
            assert!(lu.l().is_tril());
            assert!(lu.u().is_triu());
            assert!((lu.determinant() - 8.).abs() < (1e-5 as $fxx));

            let x = lu.solve(&[-5., -4., -1.]).unwrap();
            let expected = [1., 2., -3.];
            for (xi, ei) in x.iter().zip(expected) {
                assert!((xi - ei).abs() < (1e-5 as $fxx));
            }
        }
    };
}

#[cfg(test)]
generate_test_lu!(f32, test_lu_f32);
#[cfg(test)]
generate_test_lu!(f64, test_lu_f64);
