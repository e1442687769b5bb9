#![allow(non_snake_case)]

use crate::algebra::*;
use enum_dispatch::*;
use num_traits::{NumCast, Zero};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A matrix in any of the supported storage kinds.
///
/// Every variant implements [`MatrixStorage`], so element access is available
/// directly on `Matrix`.  Binary operations select a routine from the storage
/// kinds of both operands; see [`add`](Matrix::add) and [`multiply`](Matrix::multiply).
///
/// ```
/// use lamina::algebra::*;
///
/// let settings = AlgebraSettings::<f64>::default();
/// let mut S = CrsMatrix::new(3, 3, &settings);
/// S.set(0, 0, 2.).unwrap();
/// S.set(1, 1, 3.).unwrap();
/// S.set(2, 2, 4.).unwrap();
/// let S: Matrix<f64> = S.into();
///
/// assert_eq!(S.multiply_vector(&[1., 1., 1.]).unwrap(), vec![2., 3., 4.]);
///
/// let S2 = S.multiply(&S).unwrap();
/// assert_eq!(S2.kind(), StorageKind::Sparse);
/// assert_eq!(S2.to_dense(), DenseMatrix::from(&[[4., 0., 0.], [0., 9., 0.], [0., 0., 16.]]));
/// ```
#[enum_dispatch(MatrixStorage<E>)]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "E: Serialize + DeserializeOwned, E::Real: Serialize + DeserializeOwned")
)]
pub enum Matrix<E>
where
    E: ElementT,
{
    Dense(DenseMatrix<E>),
    Diagonal(DiagonalMatrix<E>),
    Tridiagonal(TridiagonalMatrix<E>),
    Sparse(CrsMatrix<E>),
}

impl<E> Matrix<E>
where
    E: ElementT,
{
    /// Copy into compressed row storage, dropping entries at or
    /// below the tolerance
    pub fn to_sparse(&self, settings: &AlgebraSettings<E::Real>) -> CrsMatrix<E> {
        CrsMatrix::from_storage(self, settings)
    }

    /// Convert every element to another domain, keeping the storage kind.
    ///
    /// A sparse result keeps the source tolerance and drops entries that map
    /// to values at or below it.
    pub fn map_domain<F>(&self, f: impl Fn(E) -> F) -> Matrix<F>
    where
        F: ElementT,
    {
        match self {
            Matrix::Dense(A) => Matrix::Dense(A.map(f)),
            Matrix::Diagonal(A) => Matrix::Diagonal(DiagonalMatrix::from_diagonal(
                A.diag.iter().map(|&x| f(x)).collect(),
            )),
            Matrix::Tridiagonal(A) => {
                let band = |v: &[E]| -> Vec<F> { v.iter().map(|&x| f(x)).collect() };
                Matrix::Tridiagonal(TridiagonalMatrix {
                    lower: band(&A.lower),
                    diag: band(&A.diag),
                    upper: band(&A.upper),
                })
            }
            Matrix::Sparse(A) => {
                let tol: F::Real = NumCast::from(A.tol).unwrap_or_else(F::Real::zero);
                let mut B = CrsMatrix::empty(A.rows, A.cols, tol);
                A.for_each_stored(&mut |i, j, v| {
                    let v = f(v);
                    if !v.is_negligible(tol) {
                        B.col_index.push(j);
                        B.values.push(v);
                        B.row_start[i + 1] += 1;
                    }
                });
                for i in 0..A.rows {
                    B.row_start[i + 1] += B.row_start[i];
                }
                Matrix::Sparse(B)
            }
        }
    }

    /// row `i` as a vector
    pub fn row(&self, i: usize) -> Result<Vec<E>, MatrixError> {
        let (nrows, ncols) = self.size();
        if i >= nrows {
            return Err(MatrixError::IndexOutOfBounds {
                row: i,
                col: 0,
                nrows,
                ncols,
            });
        }
        Ok((0..self.ncols()).map(|j| self.element(i, j)).collect())
    }

    /// column `j` as a vector
    pub fn column(&self, j: usize) -> Result<Vec<E>, MatrixError> {
        let (nrows, ncols) = self.size();
        if j >= ncols {
            return Err(MatrixError::IndexOutOfBounds {
                row: 0,
                col: j,
                nrows,
                ncols,
            });
        }
        Ok((0..self.nrows()).map(|i| self.element(i, j)).collect())
    }
}

impl<E> std::fmt::Display for Matrix<E>
where
    E: ElementT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

#[test]
fn test_matrix_conversions() {
    let settings = AlgebraSettings::<f64>::default();
    let A: Matrix<i32> = DiagonalMatrix::from_diagonal(vec![1, 0, 3]).into();
    assert_eq!(A.kind(), StorageKind::Diagonal);
    assert_eq!(A.row(2).unwrap(), vec![0, 0, 3]);
    assert_eq!(A.column(0).unwrap(), vec![1, 0, 0]);
    assert!(A.row(3).is_err());

    let S = A.to_sparse(&settings);
    assert_eq!(S.nnz(), 2);

    let Z = A.map_domain(|x| num_complex::Complex::new(x as f64, 0.));
    assert_eq!(Z.kind(), StorageKind::Diagonal);
    assert_eq!(Z.get(2, 2).unwrap(), num_complex::Complex::new(3., 0.));

    let B: Matrix<i32> = S.into();
    let Bf = B.map_domain(|x: i32| x as f64 / 1e12);
    assert_eq!(Bf.kind(), StorageKind::Sparse);
    // 1e-12 is below the tolerance, 3e-12 too
    assert_eq!(Bf.nnz(), 0);
}
