#![allow(non_snake_case)]

// Operation tables for `Matrix`.  Each binary operation matches on the
// storage kinds of both operands and falls through to a generic
// element-accessor routine for pairs without a specialised kernel.

mod arithmetic;
mod properties;
mod unary;

use crate::algebra::*;
use tracing::trace;

// generic fallbacks, used by every table

pub(crate) fn generic_zip<E, F>(A: &Matrix<E>, B: &Matrix<E>, op: F) -> DenseMatrix<E>
where
    E: ElementT,
    F: Fn(E, E) -> E,
{
    trace!(lhs = %A.kind(), rhs = %B.kind(), "elementwise generic fallback");
    let (m, n) = A.size();
    let mut C = DenseMatrix::zeros((m, n));
    for i in 0..m {
        for j in 0..n {
            C[(i, j)] = op(A.element(i, j), B.element(i, j));
        }
    }
    C
}

pub(crate) fn generic_mul<E>(A: &Matrix<E>, B: &Matrix<E>) -> DenseMatrix<E>
where
    E: ElementT,
{
    trace!(lhs = %A.kind(), rhs = %B.kind(), "multiply generic fallback");
    let (m, p) = A.size();
    let n = B.ncols();
    let mut C = DenseMatrix::zeros((m, n));
    for i in 0..m {
        for j in 0..n {
            C[(i, j)] = (0..p).map(|k| A.element(i, k) * B.element(k, j)).sum();
        }
    }
    C
}

/// Elementwise combination of a banded matrix with a dense one, reading
/// the dense data directly.  With `flip` set the dense matrix is on the left.
pub(crate) fn banded_zip_dense<E, M, F>(A: &M, B: &DenseMatrix<E>, flip: bool, op: F) -> DenseMatrix<E>
where
    E: ElementT,
    M: MatrixStorage<E> + ?Sized,
    F: Fn(E, E) -> E,
{
    let zero = E::zero();
    let mut C = if flip {
        B.map(|b| op(b, zero))
    } else {
        B.map(|b| op(zero, b))
    };
    A.for_each_stored(&mut |i, j, a| {
        let b = B.data[B.index_linear((i, j))];
        C[(i, j)] = if flip { op(b, a) } else { op(a, b) };
    });
    C
}
