#![allow(non_snake_case)]
use crate::algebra::*;

impl<E> DenseMatrix<E>
where
    E: ElementT,
{
    /// Kronecker product of `A` and `B`, written into `self`.
    ///
    /// # Panics
    /// Panics if `self` is not of size `(A.nrows()*B.nrows(), A.ncols()*B.ncols())`.
    pub fn kron<MATA, MATB>(&mut self, A: &MATA, B: &MATB) -> &Self
    where
        MATA: MatrixStorage<E> + ?Sized,
        MATB: MatrixStorage<E> + ?Sized,
    {
        let (pp, qq) = A.size();
        let (rr, ss) = B.size();
        assert!(self.nrows() == pp * rr);
        assert!(self.ncols() == qq * ss);

        let mut i = 0;
        for p in 0..pp {
            for r in 0..rr {
                for q in 0..qq {
                    let Apq = A.element(p, q);
                    for s in 0..ss {
                        self.data_mut()[i] = Apq * B.element(r, s);
                        i += 1;
                    }
                }
            }
        }
        self
    }

    /// Block-diagonal [A 0; 0 B], written into `self`.
    ///
    /// # Panics
    /// Panics if `self` is not of size `(A.nrows()+B.nrows(), A.ncols()+B.ncols())`.
    pub fn direct_sum<MATA, MATB>(&mut self, A: &MATA, B: &MATB) -> &Self
    where
        MATA: MatrixStorage<E> + ?Sized,
        MATB: MatrixStorage<E> + ?Sized,
    {
        let (ma, na) = A.size();
        let (mb, nb) = B.size();
        assert!(self.nrows() == ma + mb);
        assert!(self.ncols() == na + nb);

        self.data_mut().iter_mut().for_each(|x| *x = E::zero());
        A.for_each_stored(&mut |i, j, v| self[(i, j)] = v);
        B.for_each_stored(&mut |i, j, v| self[(ma + i, na + j)] = v);
        self
    }
}

#[test]
fn test_kron() {
    let A = DenseMatrix::from(&[
        [1., 2.], //
        [4., 5.], //
    ]);
    let B = DenseMatrix::from(&[[1., 2.]]);

    let (k1, m1) = A.size();
    let (k2, m2) = B.size();

    let mut K = DenseMatrix::<f64>::zeros((k1 * k2, m1 * m2));
    K.kron(&A, &B);
    assert!(K.data() == vec![1., 2., 2., 4., 4., 8., 5., 10.]);

    let Bt = B.transpose();
    let mut K = DenseMatrix::<f64>::zeros((k1 * m2, m1 * k2));
    K.kron(&A, &Bt);
    assert!(K.data() == vec![1., 2., 2., 4., 4., 5., 8., 10.]);
}

#[test]
fn test_direct_sum() {
    let A = DenseMatrix::from(&[[1, 2]]);
    let B = DenseMatrix::from(&[[3], [4]]);
    let mut S = DenseMatrix::<i32>::zeros((3, 3));
    S.direct_sum(&A, &B);
    assert_eq!(
        S,
        DenseMatrix::from(&[
            [1, 2, 0], //
            [0, 0, 3], //
            [0, 0, 4], //
        ])
    );
}
