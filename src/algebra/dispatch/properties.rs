#![allow(non_snake_case)]

use crate::algebra::*;
use crate::factor::LuDecomposition;
use num_traits::{Float, Zero};

impl<E> Matrix<E>
where
    E: ElementT,
{
    fn check_nonempty(&self, what: &'static str) -> Result<(), MatrixError> {
        if self.nrows() == 0 || self.ncols() == 0 {
            return Err(MatrixError::Undefined(what));
        }
        Ok(())
    }

    /// Σ aᵢᵢ
    pub fn trace(&self) -> Result<E, MatrixError> {
        let n = check_square(self.size())?;
        self.check_nonempty("trace of an empty matrix")?;
        let t = match self {
            Matrix::Diagonal(A) => A.diag.iter().copied().sum(),
            Matrix::Tridiagonal(A) => A.diag.iter().copied().sum(),
            _ => (0..n).map(|i| self.element(i, i)).sum(),
        };
        Ok(t)
    }

    /// Maximum absolute row sum
    pub fn inf_norm(&self) -> Result<E::Real, MatrixError> {
        self.check_nonempty("norm of an empty matrix")?;
        let rowsums: Vec<E::Real> = match self {
            Matrix::Diagonal(A) => return Ok(A.diag.norm_inf()),
            Matrix::Dense(A) => (0..A.m).map(|i| A.row_slice(i).norm_one()).collect(),
            Matrix::Sparse(A) => (0..A.rows).map(|i| A.row_entries(i).1.norm_one()).collect(),
            Matrix::Tridiagonal(_) => {
                let mut rowsums = vec![E::Real::zero(); self.nrows()];
                self.for_each_stored(&mut |i, _, v| rowsums[i] += v.magnitude());
                rowsums
            }
        };
        Ok(rowsums
            .into_iter()
            .fold(E::Real::zero(), |acc, x| acc.max(x)))
    }

    /// sqrt(Σ |aᵢⱼ|²)
    pub fn frobenius_norm(&self) -> Result<E::Real, MatrixError> {
        self.check_nonempty("norm of an empty matrix")?;
        let norm = match self {
            Matrix::Dense(A) => A.data.norm(),
            Matrix::Diagonal(A) => A.diag.norm(),
            // unused band slots are kept at zero
            Matrix::Tridiagonal(A) => (A.lower.sumsq() + A.diag.sumsq() + A.upper.sumsq()).sqrt(),
            Matrix::Sparse(A) => A.values().norm(),
        };
        Ok(norm)
    }

    /// Determinant.  Diagonal matrices use the product of the diagonal,
    /// everything else an LU decomposition in the factorization field.
    /// Integer determinants are rounded to the nearest integer.
    pub fn determinant(&self) -> Result<E, MatrixError> {
        check_square(self.size())?;
        self.check_nonempty("determinant of an empty matrix")?;

        if let Matrix::Diagonal(A) = self {
            return Ok(A.diag.iter().fold(E::one(), |acc, &x| acc * x));
        }

        // exact zero pivots only, so that a singular matrix gives a zero
        // determinant rather than a non-finite one
        let settings = AlgebraSettings {
            tolerance: E::Real::zero(),
        };
        let lu = LuDecomposition::new(self, &settings)
            .map_err(|_| MatrixError::Undefined("determinant"))?;
        Ok(E::from_field(lu.determinant()))
    }

    /// true if A = Aᵀ to within `tol` in every cell
    pub fn is_symmetric(&self, tol: E::Real) -> bool {
        self.is_self_adjoint(tol, |x| x)
    }

    /// true if A = Aᴴ to within `tol` in every cell
    pub fn is_hermitian(&self, tol: E::Real) -> bool {
        self.is_self_adjoint(tol, |x| x.conj())
    }

    fn is_self_adjoint(&self, tol: E::Real, f: impl Fn(E) -> E) -> bool {
        if !self.is_square() {
            return false;
        }
        match self {
            Matrix::Diagonal(A) => A.diag.iter().all(|&x| (x - f(x)).magnitude() <= tol),
            _ => {
                let mut ok = true;
                self.for_each_stored(&mut |i, j, v| {
                    if i >= j {
                        ok &= (v - f(self.element(j, i))).magnitude() <= tol;
                    } else {
                        // catches entries with no stored transpose partner
                        ok &= (f(v) - self.element(j, i)).magnitude() <= tol;
                    }
                });
                ok
            }
        }
    }

    /// true if A·Aᴴ = I to within `tol` in Frobenius norm.  Orthogonal real
    /// matrices are unitary.
    pub fn is_unitary(&self, tol: E::Real) -> bool {
        if !self.is_square() {
            return false;
        }
        let I: Matrix<E> = DiagonalMatrix::identity(self.nrows()).into();
        match self.multiply(&self.conjugate_transpose()) {
            Ok(AAh) => AAh.approx_eq(&I, tol),
            Err(_) => false,
        }
    }

    /// true if both matrices have the same size and the Frobenius norm of
    /// their difference is at most `tol`
    pub fn approx_eq(&self, B: &Matrix<E>, tol: E::Real) -> bool {
        if self.size() != B.size() {
            return false;
        }
        let norm = match (self, B) {
            // merge stored patterns directly.  Differences at or below
            // the sparse tolerance are not stored and count as zero.
            (Matrix::Sparse(a), Matrix::Sparse(b)) => a.merge(b, |x, y| x - y).values().norm(),
            _ => match self.subtract(B) {
                // empty matrices have no norm and compare equal
                Ok(D) => D.frobenius_norm().unwrap_or(E::Real::zero()),
                Err(_) => return false,
            },
        };
        norm <= tol
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_trace_and_norms() {
        let A: Matrix<f64> = DenseMatrix::from(&[
            [1., -2.], //
            [3., 4.],  //
        ])
        .into();
        assert_eq!(A.trace().unwrap(), 5.);
        assert_eq!(A.inf_norm().unwrap(), 7.);
        assert_eq!(A.frobenius_norm().unwrap(), 30f64.sqrt());

        let Z: Matrix<f64> = DenseMatrix::zeros((0, 0)).into();
        assert!(matches!(Z.trace(), Err(MatrixError::Undefined(_))));
        assert!(matches!(Z.inf_norm(), Err(MatrixError::Undefined(_))));
        assert!(matches!(Z.determinant(), Err(MatrixError::Undefined(_))));

        let R: Matrix<f64> = DenseMatrix::zeros((2, 3)).into();
        assert!(matches!(R.trace(), Err(MatrixError::NotSquare { .. })));
    }

    #[test]
    fn test_norms_all_kinds() {
        // A =
        //[ 2.0  -1.0    ⋅ ]
        //[-3.0   4.0   1.0]
        //[  ⋅    5.0  -6.0]
        let T = TridiagonalMatrix::from_bands(&[-3., 5.], &[2., 4., -6.], &[-1., 1.]).unwrap();
        let settings = AlgebraSettings::<f64>::default();
        let kinds: Vec<Matrix<f64>> = vec![
            T.to_dense().into(),
            T.clone().into(),
            CrsMatrix::from_storage(&T, &settings).into(),
        ];
        for A in &kinds {
            assert_eq!(A.inf_norm().unwrap(), 11., "{}", A.kind());
            assert!((A.frobenius_norm().unwrap() - 92f64.sqrt()).abs() < 1e-12);
            assert!(A.add(&A.negate()).unwrap().approx_eq(&DenseMatrix::zeros((3, 3)).into(), 0.));
        }

        let D: Matrix<Complex<f64>> =
            DiagonalMatrix::from_diagonal(vec![Complex::new(3., 4.), Complex::new(0., -2.)]).into();
        assert_eq!(D.inf_norm().unwrap(), 5.);
        assert!((D.frobenius_norm().unwrap() - 29f64.sqrt()).abs() < 1e-12);
        assert_eq!(D.negate().element(1, 1), Complex::new(0., 2.));

        // empty operands are equal, not an error
        let E: Matrix<f64> = DenseMatrix::zeros((0, 0)).into();
        assert!(E.approx_eq(&E.clone(), 0.));
    }

    #[test]
    fn test_determinant() {
        let A: Matrix<i64> = DenseMatrix::from(&[
            [2, -1, 0], //
            [1, 3, 2],  //
            [0, 1, 1],  //
        ])
        .into();
        assert_eq!(A.determinant().unwrap(), 3);

        let D: Matrix<f64> = DiagonalMatrix::from_diagonal(vec![2., 3., 4.]).into();
        assert_eq!(D.determinant().unwrap(), 24.);

        // singular input gives zero, not NaN
        let S: Matrix<f64> = DenseMatrix::from(&[[1., 2.], [2., 4.]]).into();
        assert_eq!(S.determinant().unwrap(), 0.);
    }

    #[test]
    fn test_symmetry() {
        let A: Matrix<f64> = DenseMatrix::from(&[
            [1., 2.], //
            [2., 1.], //
        ])
        .into();
        assert!(A.is_symmetric(0.));
        let B: Matrix<f64> = DenseMatrix::from(&[[0., 1.], [0., 0.]]).into();
        assert!(!A.add(&B).unwrap().is_symmetric(1e-3));

        let H: Matrix<Complex<f64>> = DenseMatrix::from(&[
            [Complex::new(2., 0.), Complex::new(1., 1.)],
            [Complex::new(1., -1.), Complex::new(3., 0.)],
        ])
        .into();
        assert!(H.is_hermitian(1e-12));
        assert!(!H.is_symmetric(1e-12));

        let settings = AlgebraSettings::<f64>::default();
        let mut S = CrsMatrix::<f64>::new(3, 3, &settings);
        S.set(0, 2, 1.).unwrap();
        let S: Matrix<f64> = S.into();
        assert!(!S.is_symmetric(1e-12));
    }

    #[test]
    fn test_unitary() {
        // rotation by 90 degrees
        let R: Matrix<f64> = DenseMatrix::from(&[[0., -1.], [1., 0.]]).into();
        assert!(R.is_unitary(1e-12));
        assert!(!R.scalar_multiply(2.).is_unitary(1e-12));
        assert!(!Matrix::<f64>::from(DenseMatrix::zeros((2, 3))).is_unitary(1.));

        let s = 0.5f64.sqrt();
        let U: Matrix<Complex<f64>> = DenseMatrix::from(&[
            [Complex::new(s, 0.), Complex::new(0., s)],
            [Complex::new(0., s), Complex::new(s, 0.)],
        ])
        .into();
        assert!(U.is_unitary(1e-12));
        // symmetric, but not unitary without conjugation
        assert!(U.is_symmetric(0.));
        let D: Matrix<Complex<f64>> =
            DiagonalMatrix::from_diagonal(vec![Complex::new(0., 1.), Complex::new(-1., 0.)]).into();
        assert!(D.is_unitary(0.));
    }

    #[test]
    fn test_approx_eq() {
        let settings = AlgebraSettings::<f64>::default();
        let A: Matrix<f64> = DenseMatrix::from(&[[1., 0.], [0., 2.]]).into();
        let S: Matrix<f64> = A.to_sparse(&settings).into();
        let D: Matrix<f64> = DiagonalMatrix::from_diagonal(vec![1., 2. + 1e-9]).into();
        assert!(A.approx_eq(&S, 0.));
        assert!(S.approx_eq(&S.clone(), 0.));
        assert!(A.approx_eq(&D, 1e-8));
        assert!(!A.approx_eq(&D, 1e-10));
        assert!(!A.approx_eq(&DenseMatrix::zeros((2, 3)).into(), 1.));
    }
}
