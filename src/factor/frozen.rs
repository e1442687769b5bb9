#![allow(non_snake_case)]

use super::*;
use crate::algebra::{AlgebraSettings, ElementT, Matrix};
use std::cell::OnceCell;
use std::ops::Deref;

type LuResult<E> = Result<LuDecomposition<<E as ElementT>::Field>, FactorizationError>;

/// A matrix that can no longer be modified, with a lazily computed LU
/// decomposition.
///
/// The first call needing the decomposition computes it with the settings
/// supplied at freezing time; every later call reuses it.  Read access to the
/// wrapped matrix is available through `Deref`.  [`into_inner`](FrozenMatrix::into_inner)
/// gives the matrix back and discards the cached decomposition.
///
/// ```
/// use lamina::algebra::*;
///
/// let A: Matrix<f64> = DenseMatrix::from(&[
///     [4., 3.], //
///     [6., 3.], //
/// ])
/// .into();
/// let A = A.freeze();
///
/// assert!((A.determinant().unwrap() + 6.).abs() < 1e-12);
/// let x = A.solve(&[10., 12.]).unwrap();
/// assert!((x[0] - 1.).abs() < 1e-12 && (x[1] - 2.).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct FrozenMatrix<E>
where
    E: ElementT,
{
    matrix: Matrix<E>,
    settings: AlgebraSettings<E::Real>,
    lu: OnceCell<LuResult<E>>,
}

impl<E> FrozenMatrix<E>
where
    E: ElementT,
{
    /// freeze with default settings
    pub fn new(matrix: Matrix<E>) -> Self {
        Self::with_settings(matrix, AlgebraSettings::default())
    }

    pub fn with_settings(matrix: Matrix<E>, settings: AlgebraSettings<E::Real>) -> Self {
        Self {
            matrix,
            settings,
            lu: OnceCell::new(),
        }
    }

    pub fn settings(&self) -> &AlgebraSettings<E::Real> {
        &self.settings
    }

    /// true once the decomposition has been computed
    pub fn is_factored(&self) -> bool {
        self.lu.get().is_some()
    }

    /// The LU decomposition, computed on first use.
    pub fn lu(&self) -> Result<&LuDecomposition<E::Field>, FactorizationError> {
        self.lu
            .get_or_init(|| LuDecomposition::new(&self.matrix, &self.settings))
            .as_ref()
            .map_err(|e| e.clone())
    }

    /// As [`lu`](FrozenMatrix::lu), also copying the pivot sequence (parity
    /// last) into `pivot`, which must have length `n+1`.
    pub fn lu_with_pivot(
        &self,
        pivot: &mut [isize],
    ) -> Result<&LuDecomposition<E::Field>, FactorizationError> {
        let lu = self.lu()?;
        check_length(lu.pivot().len(), pivot.len())?;
        pivot.copy_from_slice(lu.pivot());
        Ok(lu)
    }

    /// determinant from the cached decomposition, converted back to the
    /// element domain
    pub fn determinant(&self) -> Result<E, FactorizationError> {
        Ok(E::from_field(self.lu()?.determinant()))
    }

    pub fn solve(&self, b: &[E::Field]) -> Result<Vec<E::Field>, FactorizationError> {
        self.lu()?.solve(b)
    }

    pub fn inverse(&self) -> Result<DenseMatrix<E::Field>, FactorizationError> {
        self.lu()?.inverse()
    }

    /// thaw the matrix, dropping the cached decomposition
    pub fn into_inner(self) -> Matrix<E> {
        self.matrix
    }
}

impl<E> Deref for FrozenMatrix<E>
where
    E: ElementT,
{
    type Target = Matrix<E>;

    fn deref(&self) -> &Matrix<E> {
        &self.matrix
    }
}

impl<E> Matrix<E>
where
    E: ElementT,
{
    /// Consume the matrix into a read-only [`FrozenMatrix`] that caches its
    /// LU decomposition.
    pub fn freeze(self) -> FrozenMatrix<E> {
        FrozenMatrix::new(self)
    }

    /// As [`freeze`](Matrix::freeze), factoring with the given settings.
    pub fn freeze_with(self, settings: AlgebraSettings<E::Real>) -> FrozenMatrix<E> {
        FrozenMatrix::with_settings(self, settings)
    }
}
