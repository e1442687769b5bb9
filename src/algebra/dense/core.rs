#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Dense matrix in row-major format
///
/// __Example usage__ : To construct the 2 x 3 matrix
/// ```text
/// A = [1.  2.  3.]
///     [4.  5.  6.]
/// ```
///
/// ```
/// use lamina::algebra::*;
///
/// let A = DenseMatrix::from(&[
///     [1., 2., 3.], //
///     [4., 5., 6.], //
/// ]);
///
/// assert_eq!(A[(1, 2)], 6.);
/// assert_eq!(A.size(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "E: Serialize + DeserializeOwned"))]
pub struct DenseMatrix<E> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in row major format
    pub data: Vec<E>,
}

impl<E> DenseMatrix<E>
where
    E: ElementT,
{
    /// `m` x `n` matrix of zeros
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![E::zero(); m * n];
        Self { m, n, data }
    }

    /// identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let mut mat = DenseMatrix::zeros((n, n));
        for i in 0..n {
            mat[(i, i)] = E::one();
        }
        mat
    }

    /// matrix from a row-major slice of length `m*n`
    pub fn new_from_slice(size: (usize, usize), src: &[E]) -> Result<Self, MatrixError> {
        let (m, n) = size;
        if m * n != src.len() {
            return Err(MatrixError::VectorLength {
                expected: m * n,
                found: src.len(),
            });
        }
        Ok(Self {
            m,
            n,
            data: src.to_vec(),
        })
    }

    /// matrix from a collection of rows, which must all have the same length
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[E]>,
    {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(m * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MatrixError::VectorLength {
                    expected: n,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { m, n, data })
    }

    pub fn data(&self) -> &[E] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [E] {
        &mut self.data
    }

    /// row `i` as a slice
    pub fn row_slice(&self, i: usize) -> &[E] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn row_slice_mut(&mut self, i: usize) -> &mut [E] {
        let n = self.n;
        &mut self.data[i * n..(i + 1) * n]
    }

    #[inline]
    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.n + idx.1
    }

    /// Apply `f` to every element, possibly changing the domain
    pub fn map<F, G>(&self, f: G) -> DenseMatrix<F>
    where
        G: Fn(E) -> F,
    {
        DenseMatrix {
            m: self.m,
            n: self.n,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    pub fn is_triu(&self) -> bool {
        for i in 0..self.m {
            for j in 0..i.min(self.n) {
                if self[(i, j)] != E::zero() {
                    return false;
                }
            }
        }
        true
    }

    pub fn is_tril(&self) -> bool {
        for i in 0..self.m {
            for j in (i + 1)..self.n {
                if self[(i, j)] != E::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<E> MatrixStorage<E> for DenseMatrix<E>
where
    E: ElementT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn kind(&self) -> StorageKind {
        StorageKind::Dense
    }
    fn element(&self, row: usize, col: usize) -> E {
        self[(row, col)]
    }
    fn set(&mut self, row: usize, col: usize, value: E) -> Result<(), MatrixError> {
        check_index(self.size(), row, col)?;
        self[(row, col)] = value;
        Ok(())
    }
    fn set_all(&mut self, value: E) -> Result<(), MatrixError> {
        self.data.iter_mut().for_each(|x| *x = value);
        Ok(())
    }
    fn nnz(&self) -> usize {
        self.data.len()
    }
    fn for_each_stored(&self, f: &mut dyn FnMut(usize, usize, E)) {
        for (k, &v) in self.data.iter().enumerate() {
            f(k / self.n, k % self.n, v);
        }
    }
    fn to_dense(&self) -> DenseMatrix<E> {
        self.clone()
    }
}

/// # Panics
/// Indexing panics if the index is out of bounds.
impl<E> Index<(usize, usize)> for DenseMatrix<E>
where
    E: ElementT,
{
    type Output = E;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n);
        &self.data[self.index_linear(idx)]
    }
}

impl<E> IndexMut<(usize, usize)> for DenseMatrix<E>
where
    E: ElementT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n);
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<E, const M: usize, const N: usize> From<&[[E; N]; M]> for DenseMatrix<E>
where
    E: ElementT,
{
    fn from(rows: &[[E; N]; M]) -> Self {
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self { m: M, n: N, data }
    }
}

impl<E, const M: usize, const N: usize> From<[[E; N]; M]> for DenseMatrix<E>
where
    E: ElementT,
{
    fn from(rows: [[E; N]; M]) -> Self {
        DenseMatrix::from(&rows)
    }
}

impl<E> std::fmt::Display for DenseMatrix<E>
where
    E: ElementT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

pub(crate) fn display_matrix<E, M>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    E: ElementT,
    M: MatrixStorage<E> + ?Sized,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {}", m.element(i, j))?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}

#[test]
fn test_dense_constructors() {
    let A = DenseMatrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    let B = DenseMatrix::new_from_slice((2, 2), &[1, 2, 3, 4]).unwrap();
    assert_eq!(A, B);
    assert_eq!(A, DenseMatrix::from(&[[1, 2], [3, 4]]));

    assert!(DenseMatrix::from_rows(&[vec![1., 2.], vec![3.]]).is_err());
    assert!(DenseMatrix::new_from_slice((2, 2), &[1., 2., 3.]).is_err());

    let I = DenseMatrix::<f64>::identity(3);
    assert_eq!(I.nnz(), 9);
    assert!(I.is_triu() && I.is_tril());
}

#[test]
fn test_dense_access() {
    let mut A = DenseMatrix::<f64>::zeros((2, 3));
    A.set(1, 2, 5.).unwrap();
    assert_eq!(A.get(1, 2).unwrap(), 5.);
    assert_eq!(A.row_slice(1), &[0., 0., 5.]);
    assert_eq!(
        A.get(2, 0),
        Err(MatrixError::IndexOutOfBounds {
            row: 2,
            col: 0,
            nrows: 2,
            ncols: 3
        })
    );
    A.set_all(1.).unwrap();
    assert!(A.data().iter().all(|&x| x == 1.));
}
