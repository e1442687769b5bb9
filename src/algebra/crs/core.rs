#![allow(non_snake_case)]

use crate::algebra::*;
use std::iter::zip;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Sparse matrix in Compressed Row Storage (CRS) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  0.  2.]
///     [0.  0.  3.]
///     [4.  5.  0.]
/// ```
///
/// ```
/// use lamina::algebra::*;
///
/// let settings = AlgebraSettings::default();
/// let A : CrsMatrix<f64> = CrsMatrix::from_parts(
///    3,                                // rows
///    3,                                // cols
///    vec![0, 2, 3, 5],                 // row_start
///    vec![0, 2, 2, 0, 1],              // col_index
///    vec![1., 2., 3., 4., 5.],         // values
///    &settings,
///  ).unwrap();
///
/// assert_eq!(A.get(2, 1).unwrap(), 5.);
/// assert_eq!(A.get(1, 1).unwrap(), 0.);
/// ```
///
/// Values with magnitude at or below the tolerance supplied at construction are
/// never inserted.  Overwriting an entry that is already stored keeps it stored,
/// whatever the new value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "E: Serialize + DeserializeOwned, E::Real: Serialize + DeserializeOwned")
)]
pub struct CrsMatrix<E>
where
    E: ElementT,
{
    /// number of rows
    pub(crate) rows: usize,
    /// number of columns
    pub(crate) cols: usize,
    /// offsets of each row's entries.  Length `rows+1`, with the
    /// last entry equal to the number of stored values.
    pub(crate) row_start: Vec<usize>,
    /// column index of each stored value, increasing within a row
    pub(crate) col_index: Vec<usize>,
    /// stored values in row-major order
    pub(crate) values: Vec<E>,
    /// zero threshold for insertions
    pub(crate) tol: E::Real,
}

impl<E> CrsMatrix<E>
where
    E: ElementT,
{
    /// empty `rows` x `cols` matrix
    pub fn new(rows: usize, cols: usize, settings: &AlgebraSettings<E::Real>) -> Self {
        Self::empty(rows, cols, settings.tolerance)
    }

    pub(crate) fn empty(rows: usize, cols: usize, tol: E::Real) -> Self {
        Self {
            rows,
            cols,
            row_start: vec![0; rows + 1],
            col_index: Vec::new(),
            values: Vec::new(),
            tol,
        }
    }

    /// Sparse matrix from its raw parts.  The parts are checked
    /// with [`check_format`](CrsMatrix::check_format).
    pub fn from_parts(
        rows: usize,
        cols: usize,
        row_start: Vec<usize>,
        col_index: Vec<usize>,
        values: Vec<E>,
        settings: &AlgebraSettings<E::Real>,
    ) -> Result<Self, SparseFormatError> {
        let A = Self {
            rows,
            cols,
            row_start,
            col_index,
            values,
            tol: settings.tolerance,
        };
        A.check_format()?;
        Ok(A)
    }

    /// Sparse matrix from rectangular rows.  Only entries above the
    /// tolerance are stored.
    pub fn from_dense_rows<R>(
        rows: &[R],
        settings: &AlgebraSettings<E::Real>,
    ) -> Result<Self, MatrixError>
    where
        R: AsRef<[E]>,
    {
        let A = DenseMatrix::from_rows(rows)?;
        Ok(Self::from_dense(&A, settings.tolerance))
    }

    pub(crate) fn from_dense(A: &DenseMatrix<E>, tol: E::Real) -> Self {
        let mut B = Self::empty(A.m, A.n, tol);
        for i in 0..A.m {
            for (j, &v) in A.row_slice(i).iter().enumerate() {
                if !v.is_negligible(tol) {
                    B.col_index.push(j);
                    B.values.push(v);
                }
            }
            B.row_start[i + 1] = B.values.len();
        }
        B
    }

    /// Copy of any matrix into sparse storage, dropping entries at or
    /// below the tolerance
    pub fn from_storage<M>(A: &M, settings: &AlgebraSettings<E::Real>) -> Self
    where
        M: MatrixStorage<E> + ?Sized,
    {
        let tol = settings.tolerance;
        let (rows, cols) = A.size();
        let mut B = Self::empty(rows, cols, tol);
        // stored entries arrive in row-major order, so they append in place
        A.for_each_stored(&mut |i, j, v| {
            if !v.is_negligible(tol) {
                B.col_index.push(j);
                B.values.push(v);
                B.row_start[i + 1] += 1;
            }
        });
        for i in 0..rows {
            B.row_start[i + 1] += B.row_start[i];
        }
        B
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize, settings: &AlgebraSettings<E::Real>) -> Self {
        Self {
            rows: n,
            cols: n,
            row_start: (0usize..=n).collect(),
            col_index: (0usize..n).collect(),
            values: vec![E::one(); n],
            tol: settings.tolerance,
        }
    }

    pub fn row_start(&self) -> &[usize] {
        &self.row_start
    }

    pub fn col_index(&self) -> &[usize] {
        &self.col_index
    }

    pub fn values(&self) -> &[E] {
        &self.values
    }

    pub fn tolerance(&self) -> E::Real {
        self.tol
    }

    /// Column indices and values stored in row `i`
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn row_entries(&self, i: usize) -> (&[usize], &[E]) {
        let rng = self.row_start[i]..self.row_start[i + 1];
        (&self.col_index[rng.clone()], &self.values[rng])
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.col_index.len() != self.values.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.row_start.len() != self.rows + 1
            || self.row_start[self.rows] != self.col_index.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for row_start monotonicity
        if self.row_start[0] != 0 || self.row_start.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadRowStart);
        }

        //check for col_index monotonicity within each row
        for row in 0..self.rows {
            let (cols, _) = self.row_entries(row);
            if cols.windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadColumnOrdering);
            }
        }

        //check for column values out of bounds
        if !self.col_index.iter().all(|c| c < &self.cols) {
            return Err(SparseFormatError::BadColumnIndex);
        }

        Ok(())
    }

    /// position of `(row, col)` in the value array, or the position at which
    /// it would be inserted to keep the row sorted
    fn locate(&self, row: usize, col: usize) -> Result<usize, usize> {
        let start = self.row_start[row];
        let (cols, _) = self.row_entries(row);
        for (k, &c) in cols.iter().enumerate() {
            if c == col {
                return Ok(start + k);
            }
            if c > col {
                return Err(start + k);
            }
        }
        Err(start + cols.len())
    }

    pub(crate) fn map_values(&self, f: impl Fn(E) -> E) -> Self {
        let mut B = Self::empty(self.rows, self.cols, self.tol);
        for i in 0..self.rows {
            let (cols, vals) = self.row_entries(i);
            for (&j, &v) in zip(cols, vals) {
                let v = f(v);
                if !v.is_negligible(self.tol) {
                    B.col_index.push(j);
                    B.values.push(v);
                }
            }
            B.row_start[i + 1] = B.values.len();
        }
        B
    }
}

impl<E> MatrixStorage<E> for CrsMatrix<E>
where
    E: ElementT,
{
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
    fn kind(&self) -> StorageKind {
        StorageKind::Sparse
    }
    fn element(&self, row: usize, col: usize) -> E {
        assert!(row < self.rows && col < self.cols);
        match self.locate(row, col) {
            Ok(k) => self.values[k],
            Err(_) => E::zero(),
        }
    }
    fn set(&mut self, row: usize, col: usize, value: E) -> Result<(), MatrixError> {
        check_index(self.size(), row, col)?;
        match self.locate(row, col) {
            // existing entries are overwritten, never removed
            Ok(k) => self.values[k] = value,
            Err(k) => {
                if value.is_negligible(self.tol) {
                    return Ok(());
                }
                self.col_index.insert(k, col);
                self.values.insert(k, value);
                self.row_start[(row + 1)..].iter_mut().for_each(|s| *s += 1);
            }
        }
        Ok(())
    }
    fn set_all(&mut self, value: E) -> Result<(), MatrixError> {
        if value.is_negligible(self.tol) {
            self.row_start.iter_mut().for_each(|s| *s = 0);
            self.col_index.clear();
            self.values.clear();
        } else {
            // every cell becomes a stored entry.  Prefer a dense matrix.
            let (m, n) = self.size();
            self.row_start = (0..=m).map(|i| i * n).collect();
            self.col_index = (0..m).flat_map(|_| 0..n).collect();
            self.values = vec![value; m * n];
        }
        Ok(())
    }
    fn nnz(&self) -> usize {
        self.values.len()
    }
    fn for_each_stored(&self, f: &mut dyn FnMut(usize, usize, E)) {
        for i in 0..self.rows {
            let (cols, vals) = self.row_entries(i);
            for (&j, &v) in zip(cols, vals) {
                f(i, j, v);
            }
        }
    }
    fn to_dense(&self) -> DenseMatrix<E> {
        let mut A = DenseMatrix::zeros(self.size());
        self.for_each_stored(&mut |i, j, v| A[(i, j)] = v);
        A
    }
}

impl<E> std::fmt::Display for CrsMatrix<E>
where
    E: ElementT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}
