#![allow(non_snake_case)]

use super::{banded_zip_dense, generic_mul, generic_zip};
use crate::algebra::*;
use tracing::trace;

impl<E> Matrix<E>
where
    E: ElementT,
{
    /// Matrix sum.
    ///
    /// Result kinds:
    ///
    /// | operands | result |
    /// |---|---|
    /// | dense + dense | dense |
    /// | diagonal + diagonal | diagonal |
    /// | diagonal or tridiagonal + tridiagonal or diagonal | tridiagonal |
    /// | sparse + sparse | sparse |
    /// | sparse, diagonal or tridiagonal + dense (either order) | dense |
    /// | any other pair | dense |
    pub fn add(&self, B: &Matrix<E>) -> Result<Matrix<E>, MatrixError> {
        self.zip_dispatch(B, "add", |a, b| a + b)
    }

    /// Matrix difference.  Result kinds are as for [`add`](Matrix::add).
    pub fn subtract(&self, B: &Matrix<E>) -> Result<Matrix<E>, MatrixError> {
        self.zip_dispatch(B, "subtract", |a, b| a - b)
    }

    fn zip_dispatch<F>(&self, B: &Matrix<E>, op: &'static str, f: F) -> Result<Matrix<E>, MatrixError>
    where
        F: Fn(E, E) -> E + Copy,
    {
        check_same_size(op, self.size(), B.size())?;

        use Matrix::*;
        let C = match (self, B) {
            (Dense(a), Dense(b)) => Dense(a.zip_with(b, f)),
            (Diagonal(a), Diagonal(b)) => Diagonal(a.zip_diag(b, f)),
            (Diagonal(a), Tridiagonal(b)) => {
                Tridiagonal(TridiagonalMatrix::from_diagonal(a).zip_bands(b, f))
            }
            (Tridiagonal(a), Diagonal(b)) => {
                Tridiagonal(a.zip_bands(&TridiagonalMatrix::from_diagonal(b), f))
            }
            (Tridiagonal(a), Tridiagonal(b)) => Tridiagonal(a.zip_bands(b, f)),
            (Sparse(a), Sparse(b)) => Sparse(a.merge(b, f)),
            (Sparse(a), Dense(b)) => Dense(a.merge_dense(b, false, f)),
            (Dense(a), Sparse(b)) => Dense(b.merge_dense(a, true, f)),
            (Diagonal(a), Dense(b)) => Dense(banded_zip_dense(a, b, false, f)),
            (Dense(a), Diagonal(b)) => Dense(banded_zip_dense(b, a, true, f)),
            (Tridiagonal(a), Dense(b)) => Dense(banded_zip_dense(a, b, false, f)),
            (Dense(a), Tridiagonal(b)) => Dense(banded_zip_dense(b, a, true, f)),
            _ => Dense(generic_zip(self, B, f)),
        };
        Ok(C)
    }

    /// Matrix product.
    ///
    /// Result kinds:
    ///
    /// | operands | result |
    /// |---|---|
    /// | dense * dense | dense |
    /// | diagonal * diagonal | diagonal |
    /// | diagonal * tridiagonal, tridiagonal * diagonal | tridiagonal |
    /// | tridiagonal * tridiagonal | dense |
    /// | diagonal * dense, dense * diagonal | dense |
    /// | sparse * sparse | sparse |
    /// | sparse * dense, dense * sparse | dense |
    /// | any other pair | dense |
    pub fn multiply(&self, B: &Matrix<E>) -> Result<Matrix<E>, MatrixError> {
        if self.ncols() != B.nrows() {
            return Err(MatrixError::IncompatibleDimension {
                op: "multiply",
                lhs: self.size(),
                rhs: B.size(),
            });
        }

        use Matrix::*;
        let C = match (self, B) {
            (Dense(a), Dense(b)) => Dense(a.mul_dense(b)),
            (Diagonal(a), Diagonal(b)) => Diagonal(a.zip_diag(b, |x, y| x * y)),
            (Diagonal(a), Tridiagonal(b)) => Tridiagonal(b.scale_rows(a)),
            (Tridiagonal(a), Diagonal(b)) => Tridiagonal(a.scale_cols(b)),
            (Tridiagonal(a), Tridiagonal(b)) => Dense(a.mul_tridiagonal(b)),
            (Diagonal(a), Dense(b)) => Dense(a.scale_rows(b)),
            (Dense(a), Diagonal(b)) => Dense(b.scale_cols(a)),
            (Sparse(a), Sparse(b)) => Sparse(a.mul_sparse(b)),
            (Sparse(a), Dense(b)) => Dense(a.mul_dense(b)),
            (Dense(a), Sparse(b)) => Dense(b.dense_mul(a)),
            _ => Dense(generic_mul(self, B)),
        };
        Ok(C)
    }

    /// Σ aᵢⱼ·bᵢⱼ over all cells.  Elements are not conjugated.
    pub fn scalar_product(&self, B: &Matrix<E>) -> Result<E, MatrixError> {
        check_same_size("scalar_product", self.size(), B.size())?;

        use Matrix::*;
        let s = match (self, B) {
            (Dense(a), Dense(b)) => a.scalar_product_dense(b),
            (Diagonal(a), Diagonal(b)) => a.diag.dot(&b.diag),
            (Tridiagonal(a), Tridiagonal(b)) => {
                a.lower.dot(&b.lower) + a.diag.dot(&b.diag) + a.upper.dot(&b.upper)
            }
            (Sparse(a), _) => a.scalar_product_with(B),
            (_, Sparse(b)) => b.scalar_product_with(self),
            _ => {
                // iterate whichever operand stores fewer entries
                let (P, Q) = if self.nnz() <= B.nnz() { (self, B) } else { (B, self) };
                trace!(lhs = %P.kind(), rhs = %Q.kind(), "scalar product over stored entries");
                let mut acc = E::zero();
                P.for_each_stored(&mut |i, j, p| acc += p * Q.element(i, j));
                acc
            }
        };
        Ok(s)
    }

    /// y = A*x
    pub fn multiply_vector(&self, x: &[E]) -> Result<Vec<E>, MatrixError> {
        if x.len() != self.ncols() {
            return Err(MatrixError::VectorLength {
                expected: self.ncols(),
                found: x.len(),
            });
        }
        let y = match self {
            Matrix::Dense(a) => a.mul_vector(x),
            Matrix::Diagonal(a) => a.mul_vector(x),
            Matrix::Tridiagonal(a) => a.mul_vector(x),
            Matrix::Sparse(a) => a.mul_vector(x),
        };
        Ok(y)
    }
}
