#![allow(non_snake_case)]

use crate::algebra::*;
use std::iter::zip;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Square tridiagonal matrix.
///
/// The three bands are stored in arrays of length `n`:
///
/// * `lower[i] = A[i][i-1]`, with `lower[0]` unused
/// * `diag[i] = A[i][i]`
/// * `upper[i] = A[i][i+1]`, with `upper[n-1]` unused
///
/// Unused slots are always zero.  The bands are only reachable through
/// constructors that keep their lengths equal; read them with
/// [`lower`](TridiagonalMatrix::lower), [`diag`](TridiagonalMatrix::diag) and
/// [`upper`](TridiagonalMatrix::upper).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "E: Serialize + DeserializeOwned"))]
pub struct TridiagonalMatrix<E> {
    pub(crate) lower: Vec<E>,
    pub(crate) diag: Vec<E>,
    pub(crate) upper: Vec<E>,
}

impl<E> TridiagonalMatrix<E>
where
    E: ElementT,
{
    /// `n` x `n` zero matrix
    pub fn new(n: usize) -> Self {
        Self {
            lower: vec![E::zero(); n],
            diag: vec![E::zero(); n],
            upper: vec![E::zero(); n],
        }
    }

    /// Tridiagonal matrix from its bands.  `lower` and `upper` have length
    /// `n-1`, i.e. the sub- and super-diagonals without the unused slots.
    pub fn from_bands(lower: &[E], diag: &[E], upper: &[E]) -> Result<Self, MatrixError> {
        let n = diag.len();
        let band = n.saturating_sub(1);
        for len in [lower.len(), upper.len()] {
            if len != band {
                return Err(MatrixError::VectorLength {
                    expected: band,
                    found: len,
                });
            }
        }
        let mut T = Self::new(n);
        T.diag.copy_from_slice(diag);
        if n > 0 {
            T.lower[1..].copy_from_slice(lower);
            T.upper[..n - 1].copy_from_slice(upper);
        }
        Ok(T)
    }

    /// Tridiagonal matrix from square rows.  Any non-zero entry outside
    /// the band is rejected.
    pub fn from_dense_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[E]>,
    {
        let A = DenseMatrix::from_rows(rows)?;
        let n = check_square(A.size())?;
        let mut T = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                T.set(i, j, A[(i, j)])?;
            }
        }
        Ok(T)
    }

    pub fn identity(n: usize) -> Self {
        let mut T = Self::new(n);
        T.diag.iter_mut().for_each(|x| *x = E::one());
        T
    }

    pub fn dim(&self) -> usize {
        self.diag.len()
    }

    /// sub-diagonal, `A[i+1][i]` for `i < n-1`
    pub fn lower(&self) -> &[E] {
        self.lower.get(1..).unwrap_or(&[])
    }

    pub fn diag(&self) -> &[E] {
        &self.diag
    }

    /// super-diagonal, `A[i][i+1]` for `i < n-1`
    pub fn upper(&self) -> &[E] {
        &self.upper[..self.dim().saturating_sub(1)]
    }

    pub(crate) fn map_bands(&self, f: impl Fn(E) -> E) -> Self {
        let n = self.dim();
        let mut T = Self {
            lower: self.lower.iter().map(|&x| f(x)).collect(),
            diag: self.diag.iter().map(|&x| f(x)).collect(),
            upper: self.upper.iter().map(|&x| f(x)).collect(),
        };
        // keep the unused slots at zero
        if n > 0 {
            T.lower[0] = E::zero();
            T.upper[n - 1] = E::zero();
        }
        T
    }

    pub(crate) fn zip_bands(&self, B: &Self, op: impl Fn(E, E) -> E) -> Self {
        let n = self.dim();
        let zipop = |x: &[E], y: &[E]| -> Vec<E> { zip(x, y).map(|(&a, &b)| op(a, b)).collect() };
        let mut T = Self {
            lower: zipop(&self.lower, &B.lower),
            diag: zipop(&self.diag, &B.diag),
            upper: zipop(&self.upper, &B.upper),
        };
        if n > 0 {
            T.lower[0] = E::zero();
            T.upper[n - 1] = E::zero();
        }
        T
    }

    /// lift a diagonal matrix into tridiagonal storage
    pub(crate) fn from_diagonal(D: &DiagonalMatrix<E>) -> Self {
        let mut T = Self::new(D.dim());
        T.diag.copy_from_slice(&D.diag);
        T
    }

    pub(crate) fn transpose(&self) -> Self {
        let n = self.dim();
        let mut T = Self::new(n);
        T.diag.copy_from_slice(&self.diag);
        for i in 1..n {
            T.lower[i] = self.upper[i - 1];
            T.upper[i - 1] = self.lower[i];
        }
        T
    }

    pub(crate) fn mul_vector(&self, x: &[E]) -> Vec<E> {
        let n = self.dim();
        (0..n)
            .map(|i| {
                let mut y = self.diag[i] * x[i];
                if i > 0 {
                    y += self.lower[i] * x[i - 1];
                }
                if i + 1 < n {
                    y += self.upper[i] * x[i + 1];
                }
                y
            })
            .collect()
    }

    /// D*T scales rows, T*D scales columns.  Both stay tridiagonal.
    pub(crate) fn scale_rows(&self, D: &DiagonalMatrix<E>) -> Self {
        let n = self.dim();
        let mut T = self.clone();
        for i in 0..n {
            T.lower[i] *= D.diag[i];
            T.diag[i] *= D.diag[i];
            T.upper[i] *= D.diag[i];
        }
        T
    }

    pub(crate) fn scale_cols(&self, D: &DiagonalMatrix<E>) -> Self {
        let n = self.dim();
        let mut T = self.clone();
        for i in 0..n {
            T.diag[i] *= D.diag[i];
            if i > 0 {
                T.lower[i] *= D.diag[i - 1];
            }
            if i + 1 < n {
                T.upper[i] *= D.diag[i + 1];
            }
        }
        T
    }

    /// Product of two tridiagonal matrices.  Only the pentadiagonal
    /// band of the dense result is computed.
    pub(crate) fn mul_tridiagonal(&self, B: &Self) -> DenseMatrix<E> {
        let n = self.dim();
        let mut C = DenseMatrix::zeros((n, n));
        for i in 0..n {
            let klo = i.saturating_sub(1);
            let khi = (i + 1).min(n - 1);
            for j in i.saturating_sub(2)..=(i + 2).min(n - 1) {
                let mut acc = E::zero();
                for k in klo..=khi {
                    if k + 1 >= j && k <= j + 1 {
                        acc += self.element(i, k) * B.element(k, j);
                    }
                }
                C[(i, j)] = acc;
            }
        }
        C
    }
}

impl<E> MatrixStorage<E> for TridiagonalMatrix<E>
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
        StorageKind::Tridiagonal
    }
    fn element(&self, row: usize, col: usize) -> E {
        assert!(row < self.dim() && col < self.dim());
        if row == col {
            self.diag[row]
        } else if row == col + 1 {
            self.lower[row]
        } else if col == row + 1 {
            self.upper[row]
        } else {
            E::zero()
        }
    }
    fn set(&mut self, row: usize, col: usize, value: E) -> Result<(), MatrixError> {
        check_index(self.size(), row, col)?;
        if row == col {
            self.diag[row] = value;
        } else if row == col + 1 {
            self.lower[row] = value;
        } else if col == row + 1 {
            self.upper[row] = value;
        } else if value != E::zero() {
            return Err(MatrixError::InvalidArgument(
                "write outside the band of a tridiagonal matrix",
            ));
        }
        Ok(())
    }
    fn set_all(&mut self, value: E) -> Result<(), MatrixError> {
        if value != E::zero() && self.dim() > 2 {
            return Err(MatrixError::InvalidArgument(
                "non-zero fill of a tridiagonal matrix",
            ));
        }
        *self = self.map_bands(|_| value);
        Ok(())
    }
    fn nnz(&self) -> usize {
        (3 * self.dim()).saturating_sub(2)
    }
    fn for_each_stored(&self, f: &mut dyn FnMut(usize, usize, E)) {
        let n = self.dim();
        for i in 0..n {
            if i > 0 {
                f(i, i - 1, self.lower[i]);
            }
            f(i, i, self.diag[i]);
            if i + 1 < n {
                f(i, i + 1, self.upper[i]);
            }
        }
    }
    fn to_dense(&self) -> DenseMatrix<E> {
        let mut A = DenseMatrix::zeros(self.size());
        self.for_each_stored(&mut |i, j, v| A[(i, j)] = v);
        A
    }
}

impl<E> std::fmt::Display for TridiagonalMatrix<E>
where
    E: ElementT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

#[cfg(test)]
fn test_matrix_4x4() -> TridiagonalMatrix<i64> {
    TridiagonalMatrix::from_bands(&[1, 2, 3], &[4, 5, 6, 7], &[8, 9, 10]).unwrap()
}

#[test]
fn test_tridiagonal_layout() {
    let T = test_matrix_4x4();
    assert_eq!(T.lower, vec![0, 1, 2, 3]);
    assert_eq!(T.upper, vec![8, 9, 10, 0]);
    assert_eq!(T.get(1, 0).unwrap(), 1);
    assert_eq!(T.get(0, 1).unwrap(), 8);
    assert_eq!(T.get(3, 0).unwrap(), 0);
    assert_eq!(T.lower(), &[1, 2, 3]);
    assert_eq!(T.diag(), &[4, 5, 6, 7]);
    assert_eq!(T.upper(), &[8, 9, 10]);
    assert_eq!(T.nnz(), 10);
    assert_eq!(
        T.to_dense(),
        DenseMatrix::from(&[
            [4, 8, 0, 0],  //
            [1, 5, 9, 0],  //
            [0, 2, 6, 10], //
            [0, 0, 3, 7],  //
        ])
    );
    assert_eq!(T.transpose().to_dense(), T.to_dense().transpose());
}

#[test]
fn test_tridiagonal_bands_consistent() {
    // mismatched bands never reach storage
    assert_eq!(
        TridiagonalMatrix::<f64>::from_bands(&[], &[1., 2.], &[]),
        Err(MatrixError::VectorLength {
            expected: 1,
            found: 0
        })
    );

    let T = TridiagonalMatrix::from_bands(&[3.], &[1., 2.], &[4.]).unwrap();
    assert_eq!(T.get(1, 0).unwrap(), 3.);
    assert!(matches!(T.get(2, 0), Err(MatrixError::IndexOutOfBounds { .. })));

    let E = TridiagonalMatrix::<f64>::new(0);
    assert!(E.lower().is_empty() && E.upper().is_empty());
    assert!(E.get(0, 0).is_err());
}

#[test]
fn test_tridiagonal_writes() {
    let mut T = test_matrix_4x4();
    T.set(2, 1, -1).unwrap();
    assert_eq!(T.lower[2], -1);
    assert!(T.set(0, 3, 0).is_ok());
    assert!(T.set(0, 3, 1).is_err());
    assert!(T.set_all(1).is_err());
    T.set_all(0).unwrap();
    assert_eq!(T.to_dense(), DenseMatrix::zeros((4, 4)));
}

#[test]
fn test_tridiagonal_products() {
    let T = test_matrix_4x4();
    let Td = T.to_dense();
    let x = [1, -1, 2, 3];
    assert_eq!(T.mul_vector(&x), Td.mul_vector(&x));
    assert_eq!(T.mul_tridiagonal(&T), Td.mul_dense(&Td));

    let D = DiagonalMatrix::from_diagonal(vec![2, 3, 4, 5]);
    let Dd = D.to_dense();
    assert_eq!(T.scale_rows(&D).to_dense(), Dd.mul_dense(&Td));
    assert_eq!(T.scale_cols(&D).to_dense(), Td.mul_dense(&Dd));
}
