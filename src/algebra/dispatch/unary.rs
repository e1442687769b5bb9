#![allow(non_snake_case)]

use crate::algebra::*;
use num_complex::Complex;

impl<E> Matrix<E>
where
    E: ElementT,
{
    /// c·A, keeping the storage kind
    pub fn scalar_multiply(&self, c: E) -> Matrix<E> {
        self.map_stored(|x| x * c)
    }

    /// A/c, keeping the storage kind.  Dividing by an exact zero is an error.
    pub fn scalar_divide(&self, c: E) -> Result<Matrix<E>, MatrixError> {
        if c == E::zero() {
            return Err(MatrixError::InvalidArgument("division by zero"));
        }
        Ok(self.map_stored(|x| x / c))
    }

    /// -A
    pub fn negate(&self) -> Matrix<E> {
        let mut C = self.clone();
        match &mut C {
            Matrix::Dense(A) => {
                A.data.negate();
            }
            Matrix::Diagonal(A) => {
                A.diag.negate();
            }
            Matrix::Tridiagonal(A) => {
                A.lower.negate();
                A.diag.negate();
                A.upper.negate();
            }
            Matrix::Sparse(A) => {
                A.values.negate();
            }
        }
        C
    }

    // maps stored entries only, so `f(0)` must be zero
    fn map_stored(&self, f: impl Fn(E) -> E) -> Matrix<E> {
        match self {
            Matrix::Dense(A) => Matrix::Dense(A.map(f)),
            Matrix::Diagonal(A) => Matrix::Diagonal(A.map_diag(f)),
            Matrix::Tridiagonal(A) => Matrix::Tridiagonal(A.map_bands(f)),
            Matrix::Sparse(A) => Matrix::Sparse(A.map_values(f)),
        }
    }

    /// Aᵀ
    pub fn transpose(&self) -> Matrix<E> {
        match self {
            Matrix::Dense(A) => Matrix::Dense(A.transpose()),
            Matrix::Diagonal(A) => Matrix::Diagonal(A.clone()),
            Matrix::Tridiagonal(A) => Matrix::Tridiagonal(A.transpose()),
            Matrix::Sparse(A) => Matrix::Sparse(A.transpose()),
        }
    }

    /// Aᴴ.  Equal to the transpose for real and integer domains.
    pub fn conjugate_transpose(&self) -> Matrix<E> {
        match self {
            Matrix::Dense(A) => Matrix::Dense(A.conjugate_transpose()),
            Matrix::Diagonal(A) => Matrix::Diagonal(A.map_diag(|x| x.conj())),
            Matrix::Tridiagonal(A) => Matrix::Tridiagonal(A.transpose().map_bands(|x| x.conj())),
            Matrix::Sparse(A) => Matrix::Sparse(A.conjugate_transpose()),
        }
    }

    /// Apply `f` to every cell.  The result is dense; for sparse and banded
    /// matrices `f` is evaluated once at zero for all implicit cells.
    pub fn map_elements(&self, f: impl Fn(E) -> E) -> Matrix<E> {
        if let Matrix::Dense(A) = self {
            return Matrix::Dense(A.map(f));
        }
        let fzero = f(E::zero());
        let mut C = DenseMatrix::zeros(self.size());
        C.data_mut().iter_mut().for_each(|x| *x = fzero);
        self.for_each_stored(&mut |i, j, v| C[(i, j)] = f(v));
        Matrix::Dense(C)
    }

    /// Block-diagonal matrix `[A 0; 0 B]`.
    ///
    /// Two diagonal operands give a diagonal result, diagonal and tridiagonal
    /// operands give a tridiagonal one, and a sparse operand gives a sparse
    /// result with its tolerance.  Anything else is dense.
    pub fn direct_sum(&self, B: &Matrix<E>) -> Matrix<E> {
        use Matrix::*;
        let (m, n) = (self.nrows() + B.nrows(), self.ncols() + B.ncols());
        match (self, B) {
            (Diagonal(a), Diagonal(b)) => {
                let diag = a.diag.iter().chain(&b.diag).copied().collect();
                Diagonal(DiagonalMatrix::from_diagonal(diag))
            }
            (Diagonal(_) | Tridiagonal(_), Diagonal(_) | Tridiagonal(_)) => {
                let (a, b) = (self.banded(), B.banded());
                // unused band slots are zero, so the corner cells joining
                // the blocks stay zero
                let join = |x: &[E], y: &[E]| -> Vec<E> { x.iter().chain(y).copied().collect() };
                Tridiagonal(TridiagonalMatrix {
                    lower: join(&a.lower, &b.lower),
                    diag: join(&a.diag, &b.diag),
                    upper: join(&a.upper, &b.upper),
                })
            }
            (Sparse(s), _) | (_, Sparse(s)) => {
                let mut D = DenseMatrix::zeros((m, n));
                D.direct_sum(self, B);
                Sparse(CrsMatrix::from_dense(&D, s.tol))
            }
            _ => {
                let mut D = DenseMatrix::zeros((m, n));
                D.direct_sum(self, B);
                Dense(D)
            }
        }
    }

    /// Kronecker product A ⊗ B.
    ///
    /// Two diagonal operands give a diagonal result and a sparse operand gives
    /// a sparse result with its tolerance.  Anything else is dense.
    pub fn tensor_product(&self, B: &Matrix<E>) -> Matrix<E> {
        use Matrix::*;
        let (m, n) = (self.nrows() * B.nrows(), self.ncols() * B.ncols());
        match (self, B) {
            (Diagonal(a), Diagonal(b)) => {
                let diag = a
                    .diag
                    .iter()
                    .flat_map(|&x| b.diag.iter().map(move |&y| x * y))
                    .collect();
                Diagonal(DiagonalMatrix::from_diagonal(diag))
            }
            (Sparse(s), _) | (_, Sparse(s)) => {
                let (rb, cb) = B.size();
                let mut C = CrsMatrix::empty(m, n, s.tol);
                // rows of the product are (row of A, row of B) pairs in order
                for p in 0..self.nrows() {
                    let arow = self.row_stored(p);
                    for r in 0..rb {
                        let brow = B.row_stored(r);
                        for &(q, a) in &arow {
                            for &(s_, b) in &brow {
                                let v = a * b;
                                if !v.is_negligible(C.tol) {
                                    C.col_index.push(q * cb + s_);
                                    C.values.push(v);
                                }
                            }
                        }
                        C.row_start[p * rb + r + 1] = C.values.len();
                    }
                }
                Sparse(C)
            }
            _ => {
                let mut D = DenseMatrix::zeros((m, n));
                D.kron(self, B);
                Dense(D)
            }
        }
    }

    fn banded(&self) -> TridiagonalMatrix<E> {
        match self {
            Matrix::Diagonal(A) => TridiagonalMatrix::from_diagonal(A),
            Matrix::Tridiagonal(A) => A.clone(),
            _ => unreachable!(),
        }
    }

    // stored (column, value) pairs of row i, in column order
    fn row_stored(&self, i: usize) -> Vec<(usize, E)> {
        match self {
            Matrix::Sparse(A) => {
                let (cols, vals) = A.row_entries(i);
                cols.iter().copied().zip(vals.iter().copied()).collect()
            }
            _ => (0..self.ncols())
                .map(|j| (j, self.element(i, j)))
                .filter(|&(_, v)| v != E::zero())
                .collect(),
        }
    }
}

/// Parts of complex matrices.  Each keeps the storage kind; a sparse result
/// drops the entries whose part is negligible.
impl<T> Matrix<Complex<T>>
where
    T: ElementT<Real = T> + FloatT,
    Complex<T>: ElementT<Real = T>,
{
    /// Re(A)
    pub fn real(&self) -> Matrix<T> {
        self.map_domain(|z| z.re)
    }

    /// Im(A)
    pub fn imag(&self) -> Matrix<T> {
        self.map_domain(|z| z.im)
    }

    /// elementwise conjugate, without transposing
    pub fn conjugate(&self) -> Matrix<Complex<T>> {
        self.map_domain(|z| z.conj())
    }
}
