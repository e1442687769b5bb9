#![allow(non_snake_case)]

use crate::algebra::*;
use std::iter::zip;

// Kernels on dense storage.  Dimensions are checked by the
// dispatching caller in `Matrix`.

impl<E> DenseMatrix<E>
where
    E: ElementT,
{
    /// elementwise combination of two matrices of equal size
    pub(crate) fn zip_with(&self, B: &DenseMatrix<E>, op: impl Fn(E, E) -> E) -> DenseMatrix<E> {
        debug_assert_eq!(self.size(), B.size());
        DenseMatrix {
            m: self.m,
            n: self.n,
            data: zip(&self.data, &B.data).map(|(&a, &b)| op(a, b)).collect(),
        }
    }

    /// C = A*B, row-oriented so the inner loop runs over contiguous rows of B
    pub(crate) fn mul_dense(&self, B: &DenseMatrix<E>) -> DenseMatrix<E> {
        debug_assert_eq!(self.n, B.m);
        let mut C = DenseMatrix::zeros((self.m, B.n));
        for i in 0..self.m {
            for k in 0..self.n {
                let aik = self[(i, k)];
                if aik == E::zero() {
                    continue;
                }
                C.row_slice_mut(i).axpy(aik, B.row_slice(k));
            }
        }
        C
    }

    pub(crate) fn mul_vector(&self, x: &[E]) -> Vec<E> {
        debug_assert_eq!(self.n, x.len());
        (0..self.m).map(|i| self.row_slice(i).dot(x)).collect()
    }

    pub(crate) fn transpose(&self) -> DenseMatrix<E> {
        let mut T = DenseMatrix::zeros((self.n, self.m));
        for i in 0..self.m {
            for j in 0..self.n {
                T[(j, i)] = self[(i, j)];
            }
        }
        T
    }

    pub(crate) fn conjugate_transpose(&self) -> DenseMatrix<E> {
        let mut T = self.transpose();
        T.data.iter_mut().for_each(|x| *x = x.conj());
        T
    }

    /// Σ aᵢⱼ·bᵢⱼ
    pub(crate) fn scalar_product_dense(&self, B: &DenseMatrix<E>) -> E {
        self.data.dot(&B.data)
    }
}

#[test]
fn test_dense_mul() {
    let A = DenseMatrix::from(&[
        [1., 2.], //
        [3., 4.], //
        [5., 6.], //
    ]);
    let B = DenseMatrix::from(&[
        [1., 0., 2.], //
        [0., 1., 1.], //
    ]);
    let C = A.mul_dense(&B);
    assert_eq!(
        C,
        DenseMatrix::from(&[
            [1., 2., 4.],   //
            [3., 4., 10.],  //
            [5., 6., 16.], //
        ])
    );
    assert_eq!(A.mul_vector(&[1., 1.]), vec![3., 7., 11.]);
    assert_eq!(A.transpose().size(), (2, 3));
    assert_eq!(A.transpose()[(1, 2)], 6.);
}

#[test]
fn test_dense_conjugate_transpose() {
    use num_complex::Complex;
    let A = DenseMatrix::from(&[[Complex::new(1., 2.), Complex::new(0., 1.)]]);
    let Ah = A.conjugate_transpose();
    assert_eq!(Ah.size(), (2, 1));
    assert_eq!(Ah[(0, 0)], Complex::new(1., -2.));
    assert_eq!(Ah[(1, 0)], Complex::new(0., -1.));
}
