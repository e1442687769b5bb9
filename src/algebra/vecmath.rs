use super::ElementT;
use num_traits::{Float, Zero};
use std::iter::zip;

/// Slice operations used by the matrix routines.
///
/// Vectors are plain slices of an [`ElementT`](crate::algebra::ElementT) domain.
pub trait VectorMath<E: ElementT> {
    /// Σ xᵢ·yᵢ (no conjugation)
    fn dot(&self, y: &[E]) -> E;

    /// Σ |xᵢ|²
    fn sumsq(&self) -> E::Real;

    /// Euclidean norm
    fn norm(&self) -> E::Real;

    /// max |xᵢ|
    fn norm_inf(&self) -> E::Real;

    /// Σ |xᵢ|
    fn norm_one(&self) -> E::Real;

    /// x = c·x
    fn scale(&mut self, c: E) -> &mut Self;

    /// x = -x
    fn negate(&mut self) -> &mut Self;

    /// x = x + a·y
    fn axpy(&mut self, a: E, y: &[E]) -> &mut Self;
}

impl<E: ElementT> VectorMath<E> for [E] {
    fn dot(&self, y: &[E]) -> E {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(E::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn sumsq(&self) -> E::Real {
        self.iter()
            .fold(E::Real::zero(), |acc, x| acc + x.magnitude_sq())
    }

    fn norm(&self) -> E::Real {
        self.sumsq().sqrt()
    }

    fn norm_inf(&self) -> E::Real {
        self.iter()
            .fold(E::Real::zero(), |acc, x| acc.max(x.magnitude()))
    }

    fn norm_one(&self) -> E::Real {
        self.iter()
            .fold(E::Real::zero(), |acc, x| acc + x.magnitude())
    }

    fn scale(&mut self, c: E) -> &mut Self {
        self.iter_mut().for_each(|x| *x *= c);
        self
    }

    fn negate(&mut self) -> &mut Self {
        self.iter_mut().for_each(|x| *x = -*x);
        self
    }

    fn axpy(&mut self, a: E, y: &[E]) -> &mut Self {
        assert_eq!(self.len(), y.len());
        zip(&mut *self, y).for_each(|(x, &y)| *x += a * y);
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_vector_norms() {
        let x = [3.0, -4.0];
        assert_eq!(x.norm(), 5.0);
        assert_eq!(x.norm_inf(), 4.0);
        assert_eq!(x.norm_one(), 7.0);

        let z = [Complex::new(0.0, 2.0), Complex::new(1.0, 0.0)];
        assert_eq!(z.sumsq(), 5.0);
        // no conjugation in dot
        assert_eq!(z.dot(&z), Complex::new(-3.0, 0.0));
    }

    #[test]
    fn test_vector_updates() {
        let mut x = vec![1i64, 2, 3];
        x.axpy(2, &[1, 1, 1]).scale(-1);
        assert_eq!(x, vec![-3, -4, -5]);
        x.negate();
        assert_eq!(x, vec![3, 4, 5]);
    }
}
