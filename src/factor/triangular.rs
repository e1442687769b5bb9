#![allow(non_snake_case)]

// Triangular solves on dense factors, in place on the right hand side.

use crate::algebra::{DenseMatrix, FieldT};

/// x ← L⁻¹x, with an implied unit diagonal if `unit` is set
pub(crate) fn solve_lower<F: FieldT>(L: &DenseMatrix<F>, x: &mut [F], unit: bool) {
    let n = x.len();
    for i in 0..n {
        let row = L.row_slice(i);
        let mut s = x[i];
        for k in 0..i {
            s -= row[k] * x[k];
        }
        x[i] = if unit { s } else { s / row[i] };
    }
}

/// x ← U⁻¹x
pub(crate) fn solve_upper<F: FieldT>(U: &DenseMatrix<F>, x: &mut [F]) {
    let n = x.len();
    for i in (0..n).rev() {
        let row = U.row_slice(i);
        let mut s = x[i];
        for k in (i + 1)..n {
            s -= row[k] * x[k];
        }
        x[i] = s / row[i];
    }
}

/// x ← L⁻ᴴx, reading L in place of its adjoint
pub(crate) fn solve_lower_adjoint<F: FieldT>(L: &DenseMatrix<F>, x: &mut [F]) {
    let n = x.len();
    for i in (0..n).rev() {
        let mut s = x[i];
        for k in (i + 1)..n {
            s -= L[(k, i)].conj() * x[k];
        }
        x[i] = s / L[(i, i)].conj();
    }
}

#[test]
fn test_triangular_solves() {
    let L = DenseMatrix::from(&[
        [2., 0., 0.], //
        [1., 1., 0.], //
        [-1., 3., 4.], //
    ]);
    let b = [2., 3., 10.];

    let mut x = b;
    solve_lower(&L, &mut x, false);
    assert_eq!(L.mul_vector(&x), b.to_vec());

    let mut x = b;
    let U = L.transpose();
    solve_upper(&U, &mut x);
    assert_eq!(U.mul_vector(&x), b.to_vec());

    let mut x = b;
    solve_lower_adjoint(&L, &mut x);
    assert_eq!(U.mul_vector(&x), b.to_vec());
}
