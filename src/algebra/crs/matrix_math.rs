#![allow(non_snake_case)]

use crate::algebra::*;
use std::iter::zip;

// Sparse kernels.  Dimensions are checked by the dispatching caller
// in `Matrix`; the kernels only touch stored entries.

impl<E> CrsMatrix<E>
where
    E: ElementT,
{
    /// Entry-wise combination of two sparse matrices over the union of
    /// their stored positions.  `op` receives zero for a missing entry.
    pub(crate) fn merge(&self, B: &CrsMatrix<E>, op: impl Fn(E, E) -> E) -> CrsMatrix<E> {
        debug_assert_eq!(self.size(), B.size());
        let mut C = CrsMatrix::empty(self.rows, self.cols, self.tol);
        let zero = E::zero();

        for i in 0..self.rows {
            let (acols, avals) = self.row_entries(i);
            let (bcols, bvals) = B.row_entries(i);
            let (mut p, mut q) = (0, 0);

            while p < acols.len() || q < bcols.len() {
                let (j, v) = match (acols.get(p), bcols.get(q)) {
                    (Some(&ja), Some(&jb)) if ja == jb => {
                        p += 1;
                        q += 1;
                        (ja, op(avals[p - 1], bvals[q - 1]))
                    }
                    (Some(&ja), Some(&jb)) if ja < jb => {
                        p += 1;
                        (ja, op(avals[p - 1], zero))
                    }
                    (Some(&ja), None) => {
                        p += 1;
                        (ja, op(avals[p - 1], zero))
                    }
                    (_, Some(&jb)) => {
                        q += 1;
                        (jb, op(zero, bvals[q - 1]))
                    }
                    (None, None) => unreachable!(),
                };
                if !v.is_negligible(self.tol) {
                    C.col_index.push(j);
                    C.values.push(v);
                }
            }
            C.row_start[i + 1] = C.values.len();
        }
        C
    }

    /// Entry-wise combination with a dense matrix, reading the dense
    /// data directly.  With `flip` set the dense matrix is the left operand.
    pub(crate) fn merge_dense(
        &self,
        B: &DenseMatrix<E>,
        flip: bool,
        op: impl Fn(E, E) -> E,
    ) -> DenseMatrix<E> {
        debug_assert_eq!(self.size(), B.size());
        let zero = E::zero();
        let mut C = if flip {
            B.map(|b| op(b, zero))
        } else {
            B.map(|b| op(zero, b))
        };
        for i in 0..self.rows {
            let (cols, vals) = self.row_entries(i);
            let brow = B.row_slice(i);
            let crow = C.row_slice_mut(i);
            for (&j, &a) in zip(cols, vals) {
                crow[j] = if flip { op(brow[j], a) } else { op(a, brow[j]) };
            }
        }
        C
    }

    /// C = A*B for sparse A and B
    pub(crate) fn mul_sparse(&self, B: &CrsMatrix<E>) -> CrsMatrix<E> {
        debug_assert_eq!(self.cols, B.rows);
        let mut C = CrsMatrix::empty(self.rows, B.cols, self.tol);

        // dense accumulator for one row of C, plus the columns it touched
        let mut work = vec![E::zero(); B.cols];
        let mut touched = vec![false; B.cols];
        let mut pattern: Vec<usize> = Vec::new();

        for i in 0..self.rows {
            let (acols, avals) = self.row_entries(i);
            for (&k, &aik) in zip(acols, avals) {
                let (bcols, bvals) = B.row_entries(k);
                for (&j, &bkj) in zip(bcols, bvals) {
                    if !touched[j] {
                        touched[j] = true;
                        pattern.push(j);
                    }
                    work[j] += aik * bkj;
                }
            }
            pattern.sort_unstable();
            for &j in &pattern {
                let v = work[j];
                if !v.is_negligible(self.tol) {
                    C.col_index.push(j);
                    C.values.push(v);
                }
                work[j] = E::zero();
                touched[j] = false;
            }
            pattern.clear();
            C.row_start[i + 1] = C.values.len();
        }
        C
    }

    /// C = A*B for sparse A and dense B
    pub(crate) fn mul_dense(&self, B: &DenseMatrix<E>) -> DenseMatrix<E> {
        debug_assert_eq!(self.cols, B.m);
        let mut C = DenseMatrix::zeros((self.rows, B.n));
        for i in 0..self.rows {
            let (cols, vals) = self.row_entries(i);
            for (&k, &aik) in zip(cols, vals) {
                C.row_slice_mut(i).axpy(aik, B.row_slice(k));
            }
        }
        C
    }

    /// C = B*A for dense B and sparse A
    pub(crate) fn dense_mul(&self, B: &DenseMatrix<E>) -> DenseMatrix<E> {
        debug_assert_eq!(B.n, self.rows);
        let mut C = DenseMatrix::zeros((B.m, self.cols));
        for r in 0..B.m {
            let brow = B.row_slice(r);
            let crow = C.row_slice_mut(r);
            for (k, &brk) in brow.iter().enumerate() {
                let (cols, vals) = self.row_entries(k);
                for (&j, &akj) in zip(cols, vals) {
                    crow[j] += brk * akj;
                }
            }
        }
        C
    }

    /// y = A*x, touching stored entries only
    pub(crate) fn mul_vector(&self, x: &[E]) -> Vec<E> {
        debug_assert_eq!(self.cols, x.len());
        (0..self.rows)
            .map(|i| {
                let (cols, vals) = self.row_entries(i);
                zip(cols, vals).fold(E::zero(), |acc, (&j, &v)| acc + v * x[j])
            })
            .collect()
    }

    pub(crate) fn transpose(&self) -> CrsMatrix<E> {
        self.transpose_with(|v| v)
    }

    pub(crate) fn conjugate_transpose(&self) -> CrsMatrix<E> {
        self.transpose_with(|v| v.conj())
    }

    fn transpose_with(&self, f: impl Fn(E) -> E) -> CrsMatrix<E> {
        let mut T = CrsMatrix::empty(self.cols, self.rows, self.tol);
        let nnz = self.nnz();

        // count entries per column of A, i.e. per row of T
        for &j in &self.col_index {
            T.row_start[j + 1] += 1;
        }
        for j in 0..self.cols {
            T.row_start[j + 1] += T.row_start[j];
        }

        // scatter.  rows of A are visited in order so columns of T stay sorted
        let mut next = T.row_start.clone();
        T.col_index = vec![0; nnz];
        T.values = vec![E::zero(); nnz];
        for i in 0..self.rows {
            let (cols, vals) = self.row_entries(i);
            for (&j, &v) in zip(cols, vals) {
                let dest = next[j];
                T.col_index[dest] = i;
                T.values[dest] = f(v);
                next[j] += 1;
            }
        }
        T
    }

    /// Σ aᵢⱼ·bᵢⱼ over the stored entries of `self`
    pub(crate) fn scalar_product_with<M>(&self, B: &M) -> E
    where
        M: MatrixStorage<E> + ?Sized,
    {
        debug_assert_eq!(self.size(), B.size());
        let mut acc = E::zero();
        self.for_each_stored(&mut |i, j, a| acc += a * B.element(i, j));
        acc
    }
}
