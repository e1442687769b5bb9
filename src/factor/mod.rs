//! Dense factorizations.
//!
//! [`LuDecomposition`] (partial pivoting) and [`CholeskyDecomposition`] read any
//! [`MatrixStorage`](crate::algebra::MatrixStorage) through its element accessor
//! and produce dense triangular factors in the element domain's factorization
//! field.  [`QrDecomposition`] builds an orthogonal (unitary) factor from Householder
//! reflections.  [`FrozenMatrix`] caches the LU decomposition of a matrix that can no
//! longer be mutated.

#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, ElementT, MatrixStorage};
use thiserror::Error;

mod cholesky;
mod frozen;
mod lu;
mod qr;
mod triangular;
pub use cholesky::*;
pub use frozen::*;
pub use lu::*;
pub use qr::*;


/// Error type returned by factorizations and the solves built on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorizationError {
    #[error("Matrix of size {nrows}x{ncols} is not square")]
    NotSquare { nrows: usize, ncols: usize },
    #[error("Matrix has zero dimension")]
    ZeroDimension,
    #[error("Matrix is singular (zero pivot in column {column})")]
    Singular { column: usize },
    #[error("Matrix is not positive definite (column {column})")]
    NotPositiveDefinite { column: usize },
    #[error("Operand length {found} is incompatible with expected length {expected}")]
    IncompatibleDimension { expected: usize, found: usize },
}

// square, non-empty input and its dimension
pub(crate) fn check_factorizable<E, M>(A: &M) -> Result<usize, FactorizationError>
where
    E: ElementT,
    M: MatrixStorage<E> + ?Sized,
{
    let (nrows, ncols) = A.size();
    if nrows != ncols {
        return Err(FactorizationError::NotSquare { nrows, ncols });
    }
    if nrows == 0 {
        return Err(FactorizationError::ZeroDimension);
    }
    Ok(nrows)
}

pub(crate) fn check_length(expected: usize, found: usize) -> Result<(), FactorizationError> {
    if expected != found {
        return Err(FactorizationError::IncompatibleDimension { expected, found });
    }
    Ok(())
}

// A in the factorization field, as a dense working copy
pub(crate) fn field_copy<E, M>(A: &M) -> DenseMatrix<E::Field>
where
    E: ElementT,
    M: MatrixStorage<E> + ?Sized,
{
    let mut W = DenseMatrix::<E::Field>::zeros(A.size());
    A.for_each_stored(&mut |i, j, v| W[(i, j)] = v.to_field());
    W
}
