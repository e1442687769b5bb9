#![allow(non_snake_case)]

use crate::algebra::*;
use std::iter::zip;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Square diagonal matrix.
///
/// Only the `n` diagonal entries are stored.  Off-diagonal reads return zero,
/// and off-diagonal writes of anything but an exact zero are rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "E: Serialize + DeserializeOwned"))]
pub struct DiagonalMatrix<E> {
    /// diagonal entries
    pub diag: Vec<E>,
}

impl<E> DiagonalMatrix<E>
where
    E: ElementT,
{
    /// `n` x `n` zero matrix
    pub fn new(n: usize) -> Self {
        Self {
            diag: vec![E::zero(); n],
        }
    }

    pub fn from_diagonal(diag: Vec<E>) -> Self {
        Self { diag }
    }

    pub fn identity(n: usize) -> Self {
        Self {
            diag: vec![E::one(); n],
        }
    }

    /// Diagonal matrix from square rows.  Any non-zero entry off the
    /// diagonal is rejected.
    pub fn from_dense_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[E]>,
    {
        let A = DenseMatrix::from_rows(rows)?;
        let n = check_square(A.size())?;
        let mut D = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                D.set(i, j, A[(i, j)])?;
            }
        }
        Ok(D)
    }

    pub fn dim(&self) -> usize {
        self.diag.len()
    }

    pub(crate) fn map_diag(&self, f: impl Fn(E) -> E) -> Self {
        Self {
            diag: self.diag.iter().map(|&x| f(x)).collect(),
        }
    }

    pub(crate) fn zip_diag(&self, B: &Self, op: impl Fn(E, E) -> E) -> Self {
        Self {
            diag: zip(&self.diag, &B.diag).map(|(&a, &b)| op(a, b)).collect(),
        }
    }

    pub(crate) fn mul_vector(&self, x: &[E]) -> Vec<E> {
        zip(&self.diag, x).map(|(&d, &x)| d * x).collect()
    }

    /// D*B : scales the rows of B
    pub(crate) fn scale_rows(&self, B: &DenseMatrix<E>) -> DenseMatrix<E> {
        let mut C = B.clone();
        for (i, &d) in self.diag.iter().enumerate() {
            C.row_slice_mut(i).scale(d);
        }
        C
    }

    /// B*D : scales the columns of B
    pub(crate) fn scale_cols(&self, B: &DenseMatrix<E>) -> DenseMatrix<E> {
        let mut C = B.clone();
        for i in 0..C.m {
            for (c, &d) in zip(C.row_slice_mut(i), &self.diag) {
                *c *= d;
            }
        }
        C
    }
}

impl<E> MatrixStorage<E> for DiagonalMatrix<E>
where
    E: ElementT,
{
    fn nrows(&self) -> usize {
        self.diag.len()
    }
    fn ncols(&self) -> usize {
        self.diag.len()
    }
    fn kind(&self) -> StorageKind {
        StorageKind::Diagonal
    }
    fn element(&self, row: usize, col: usize) -> E {
        assert!(row < self.dim() && col < self.dim());
        if row == col {
            self.diag[row]
        } else {
            E::zero()
        }
    }
    fn set(&mut self, row: usize, col: usize, value: E) -> Result<(), MatrixError> {
        check_index(self.size(), row, col)?;
        if row == col {
            self.diag[row] = value;
        } else if value != E::zero() {
            return Err(MatrixError::InvalidArgument(
                "off-diagonal write to a diagonal matrix",
            ));
        }
        Ok(())
    }
    fn set_all(&mut self, value: E) -> Result<(), MatrixError> {
        if value != E::zero() && self.dim() > 1 {
            return Err(MatrixError::InvalidArgument(
                "non-zero fill of a diagonal matrix",
            ));
        }
        self.diag.iter_mut().for_each(|x| *x = value);
        Ok(())
    }
    fn nnz(&self) -> usize {
        self.diag.len()
    }
    fn for_each_stored(&self, f: &mut dyn FnMut(usize, usize, E)) {
        for (i, &d) in self.diag.iter().enumerate() {
            f(i, i, d);
        }
    }
    fn to_dense(&self) -> DenseMatrix<E> {
        let mut A = DenseMatrix::zeros(self.size());
        for (i, &d) in self.diag.iter().enumerate() {
            A[(i, i)] = d;
        }
        A
    }
}

impl<E> std::fmt::Display for DiagonalMatrix<E>
where
    E: ElementT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

#[test]
fn test_diagonal_writes() {
    let mut D = DiagonalMatrix::<f64>::new(3);
    D.set(1, 1, 2.).unwrap();
    assert_eq!(D.get(1, 1).unwrap(), 2.);
    assert_eq!(D.get(0, 1).unwrap(), 0.);

    // exact zero off the diagonal is accepted and ignored
    assert!(D.set(0, 2, 0.).is_ok());
    assert!(matches!(
        D.set(0, 2, 1.),
        Err(MatrixError::InvalidArgument(_))
    ));
    assert!(D.set(3, 0, 1.).is_err());

    assert!(D.set_all(1.).is_err());
    D.set_all(0.).unwrap();
    assert_eq!(D.diag, vec![0.; 3]);
}

#[test]
fn test_diagonal_from_rows() {
    let D = DiagonalMatrix::from_dense_rows(&[[2, 0], [0, 3]]).unwrap();
    assert_eq!(D.diag, vec![2, 3]);
    assert!(DiagonalMatrix::from_dense_rows(&[[2, 1], [0, 3]]).is_err());
    assert!(DiagonalMatrix::from_dense_rows(&[[2, 0, 0], [0, 3, 0]]).is_err());
    assert_eq!(D.to_dense(), DenseMatrix::from(&[[2, 0], [0, 3]]));
}
