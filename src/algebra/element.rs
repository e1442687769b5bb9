use crate::algebra::FloatT;
use num_complex::Complex;
use num_traits::NumAssign;
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::Neg;

/// Scalar element domain of a matrix.
///
/// Matrices are generic over their element type, which may be real (`f32`, `f64`),
/// complex (`Complex<f32>`, `Complex<f64>`) or integer (`i32`, `i64`).  Arithmetic
/// comes from the [`num_traits`](num_traits) bounds; the methods below supply the
/// remaining operations the matrix routines need.
///
/// Each domain names two further types:
///
/// * `Real` : the floating point type of magnitudes, norms and tolerances.
/// * `Field` : the domain in which factorizations are computed.  This is the
///   element type itself for real and complex domains and `f64` for integers.
pub trait ElementT:
    'static + Copy + Send + Sync + Debug + Display + PartialEq + NumAssign + Neg<Output = Self> + Sum
{
    type Real: FloatT;
    type Field: FieldT<Real = Self::Real>;

    /// absolute value (complex modulus)
    fn magnitude(&self) -> Self::Real;

    /// squared absolute value
    fn magnitude_sq(&self) -> Self::Real;

    /// complex conjugate.  Identity for real and integer domains.
    fn conj(&self) -> Self;

    /// conversion into the factorization field
    fn to_field(&self) -> Self::Field;

    /// conversion back from the factorization field.  Rounds to the
    /// nearest value for integer domains.
    fn from_field(x: Self::Field) -> Self;

    /// true if the value is numerically zero at tolerance `tol`
    #[inline]
    fn is_negligible(&self, tol: Self::Real) -> bool {
        self.magnitude() <= tol
    }
}

/// Element domains closed under division and square roots.
pub trait FieldT: ElementT<Field = Self> {
    /// square root.  The principal root for complex domains.
    fn sqrt(&self) -> Self;
    /// real part
    fn re(&self) -> Self::Real;
    /// imaginary part.  Always zero for real domains.
    fn im(&self) -> Self::Real;
    /// embedding of a real value
    fn from_real(x: Self::Real) -> Self;
}

macro_rules! impl_element_real {
    ($ty:ty) => {
        impl ElementT for $ty {
            type Real = $ty;
            type Field = $ty;

            #[inline]
            fn magnitude(&self) -> $ty {
                self.abs()
            }
            #[inline]
            fn magnitude_sq(&self) -> $ty {
                self * self
            }
            #[inline]
            fn conj(&self) -> $ty {
                *self
            }
            #[inline]
            fn to_field(&self) -> $ty {
                *self
            }
            #[inline]
            fn from_field(x: $ty) -> $ty {
                x
            }
        }

        impl FieldT for $ty {
            #[inline]
            fn sqrt(&self) -> $ty {
                <$ty>::sqrt(*self)
            }
            #[inline]
            fn re(&self) -> $ty {
                *self
            }
            #[inline]
            fn im(&self) -> $ty {
                0.0
            }
            #[inline]
            fn from_real(x: $ty) -> $ty {
                x
            }
        }
    };
}

macro_rules! impl_element_complex {
    ($ty:ty) => {
        impl ElementT for Complex<$ty> {
            type Real = $ty;
            type Field = Complex<$ty>;

            #[inline]
            fn magnitude(&self) -> $ty {
                self.norm()
            }
            #[inline]
            fn magnitude_sq(&self) -> $ty {
                self.norm_sqr()
            }
            #[inline]
            fn conj(&self) -> Self {
                Complex::<$ty>::conj(self)
            }
            #[inline]
            fn to_field(&self) -> Self {
                *self
            }
            #[inline]
            fn from_field(x: Self) -> Self {
                x
            }
        }

        impl FieldT for Complex<$ty> {
            #[inline]
            fn sqrt(&self) -> Self {
                Complex::<$ty>::sqrt(*self)
            }
            #[inline]
            fn re(&self) -> $ty {
                self.re
            }
            #[inline]
            fn im(&self) -> $ty {
                self.im
            }
            #[inline]
            fn from_real(x: $ty) -> Self {
                Complex::new(x, 0.0)
            }
        }
    };
}

macro_rules! impl_element_integer {
    ($ty:ty) => {
        impl ElementT for $ty {
            type Real = f64;
            type Field = f64;

            #[inline]
            fn magnitude(&self) -> f64 {
                (*self as f64).abs()
            }
            #[inline]
            fn magnitude_sq(&self) -> f64 {
                let x = *self as f64;
                x * x
            }
            #[inline]
            fn conj(&self) -> $ty {
                *self
            }
            #[inline]
            fn to_field(&self) -> f64 {
                *self as f64
            }
            #[inline]
            fn from_field(x: f64) -> $ty {
                x.round() as $ty
            }
        }
    };
}

impl_element_real!(f32);
impl_element_real!(f64);
impl_element_complex!(f32);
impl_element_complex!(f64);
impl_element_integer!(i32);
impl_element_integer!(i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitudes() {
        assert_eq!((-3.0f64).magnitude(), 3.0);
        assert_eq!(Complex::new(3.0f64, -4.0).magnitude(), 5.0);
        assert_eq!(Complex::new(3.0f64, -4.0).magnitude_sq(), 25.0);
        assert_eq!((-7i64).magnitude(), 7.0);
        assert!(1e-12f64.is_negligible(1e-10));
        assert!(!1i32.is_negligible(1e-10));
    }

    #[test]
    fn test_field_conversions() {
        assert_eq!(5i32.to_field(), 5.0);
        assert_eq!(i32::from_field(23.9999999), 24);
        assert_eq!(i64::from_field(-2.4), -2);
        assert_eq!(ElementT::conj(&Complex::new(1.0f64, 2.0)), Complex::new(1.0, -2.0));
    }

    #[test]
    fn test_principal_sqrt() {
        let z = FieldT::sqrt(&Complex::new(-4.0f64, 0.0));
        assert!((z - Complex::new(0.0, 2.0)).norm() < 1e-12);
        assert_eq!(FieldT::sqrt(&9.0f64), 3.0);
        assert_eq!(Complex::<f64>::from_real(2.0), Complex::new(2.0, 0.0));
    }
}
