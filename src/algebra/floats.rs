#![allow(non_snake_case)]
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Floating point types used for magnitudes, norms and tolerances.
///
/// `FloatT` is the `Real` type of every [`ElementT`](crate::algebra::ElementT)
/// domain.  Implementations are provided through a blanket implementation for any
/// type satisfying the [`num_traits`](num_traits) bounds below, i.e. `f32` and `f64`.
pub trait FloatT:
    'static
    + Send
    + Sync
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + std::iter::Sum
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + std::iter::Sum
        + Sized
{
}

/// Conversion of primitive constants into a [`FloatT`](crate::algebra::FloatT),
/// e.g. `(1e-10).as_T()` for setting defaults.
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: std::ops::Mul<T, Output = T> + FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(f64, from_f64);
