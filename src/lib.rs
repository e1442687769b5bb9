//! __Lamina__ is a small linear-algebra kernel providing several matrix storage
//! layouts over real, complex and integer element domains.
//!
//! ## Storage kinds
//!
//! * [`DenseMatrix`](crate::algebra::DenseMatrix) : row-major rectangular storage.
//! * [`DiagonalMatrix`](crate::algebra::DiagonalMatrix) : a single array of diagonal entries.
//! * [`TridiagonalMatrix`](crate::algebra::TridiagonalMatrix) : sub-, main and super-diagonals.
//! * [`CrsMatrix`](crate::algebra::CrsMatrix) : sparse compressed row storage.
//!
//! Matrices of any kind are wrapped in the [`Matrix`](crate::algebra::Matrix) enum.  Binary
//! operations on two `Matrix` values select the cheapest available routine for the pair of
//! storage kinds involved, falling back to a generic element-by-element path otherwise.
//!
//! ## Factorizations
//!
//! LU decomposition with partial pivoting and Cholesky decomposition are provided in
//! [`factor`](crate::factor).  Both produce dense triangular factors in the element
//! domain's factorization field, i.e. `f64` for integer matrices.
//!
//! ```
//! use lamina::algebra::*;
//! use lamina::factor::*;
//!
//! let settings = AlgebraSettings::<f64>::default();
//! let A: Matrix<f64> = DenseMatrix::from(&[
//!     [2., 0., 0.],
//!     [0., 3., 0.],
//!     [0., 0., 4.],
//! ])
//! .into();
//!
//! let lu = LuDecomposition::new(&A, &settings).unwrap();
//! assert_eq!(lu.determinant(), 24.);
//! ```
//!
//! ## Tolerance
//!
//! Values whose magnitude is at or below a configured tolerance are treated as zero when
//! building sparse matrices and detecting zero pivots.   The tolerance is always supplied
//! explicitly through [`AlgebraSettings`](crate::algebra::AlgebraSettings); there is no
//! process-wide configuration.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod factor;

#[cfg(feature = "serde")]
pub mod io;
