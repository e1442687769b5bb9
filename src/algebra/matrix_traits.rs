use crate::algebra::{DenseMatrix, ElementT, MatrixError};
use enum_dispatch::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Storage layout tag of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StorageKind {
    /// row-major rectangular array
    Dense,
    /// main diagonal only
    Diagonal,
    /// sub-, main and super-diagonals
    Tridiagonal,
    /// compressed row storage
    Sparse,
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            StorageKind::Dense => "dense",
            StorageKind::Diagonal => "diagonal",
            StorageKind::Tridiagonal => "tridiagonal",
            StorageKind::Sparse => "sparse",
        };
        write!(f, "{}", name)
    }
}

/// Element access common to every storage kind.
///
/// A matrix is a total function `(row, col) -> E`.  Each kind stores some
/// subset of its cells explicitly and reports the domain zero elsewhere.
#[enum_dispatch]
pub trait MatrixStorage<E>
where
    E: ElementT,
{
    /// number of rows
    fn nrows(&self) -> usize;

    /// number of columns
    fn ncols(&self) -> usize;

    /// (rows, columns)
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// true if the matrix has equal row and column dimension
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// storage layout tag
    fn kind(&self) -> StorageKind;

    /// Element read without bounds reporting.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds.  Use [`get`](MatrixStorage::get)
    /// for a checked read.
    fn element(&self, row: usize, col: usize) -> E;

    /// Bounds-checked element read
    fn get(&self, row: usize, col: usize) -> Result<E, MatrixError> {
        check_index(self.size(), row, col)?;
        Ok(self.element(row, col))
    }

    /// Bounds-checked element write
    fn set(&mut self, row: usize, col: usize, value: E) -> Result<(), MatrixError>;

    /// Assign `value` to every cell
    fn set_all(&mut self, value: E) -> Result<(), MatrixError>;

    /// number of explicitly stored entries
    fn nnz(&self) -> usize;

    /// Visit every explicitly stored entry as `(row, col, value)`, in
    /// row-major order.
    fn for_each_stored(&self, f: &mut dyn FnMut(usize, usize, E));

    /// copy into dense storage
    fn to_dense(&self) -> DenseMatrix<E>;
}

/// Shared bounds check for all storage kinds
pub(crate) fn check_index(
    size: (usize, usize),
    row: usize,
    col: usize,
) -> Result<(), MatrixError> {
    let (nrows, ncols) = size;
    if row >= nrows || col >= ncols {
        return Err(MatrixError::IndexOutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Shared dimension check for binary operations
pub(crate) fn check_same_size(
    op: &'static str,
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(), MatrixError> {
    if lhs != rhs {
        return Err(MatrixError::IncompatibleDimension { op, lhs, rhs });
    }
    Ok(())
}

pub(crate) fn check_square(size: (usize, usize)) -> Result<usize, MatrixError> {
    let (nrows, ncols) = size;
    if nrows != ncols {
        return Err(MatrixError::NotSquare { nrows, ncols });
    }
    Ok(nrows)
}
