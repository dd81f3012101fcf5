//! Vector type for slice normals and direction cosines.
//!
//! Vectors carry partition directions and axis projections in any of the
//! three acquisition frames (gradient, patient, device).

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// A vector in D-dimensional space.
///
/// The frame a vector lives in is implied by the operation consuming it;
/// the type itself carries no frame tag.
///
/// This is a thin wrapper around nalgebra's SVector to provide
/// domain-specific functionality while maintaining all nalgebra operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector<const D: usize>(pub SVector<f64, D>);

impl<const D: usize> Vector<D> {
    /// Create a new vector from components.
    pub fn new(components: [f64; D]) -> Self {
        Self(SVector::from(components))
    }

    /// Create a zero vector.
    pub fn zeros() -> Self {
        Self(SVector::zeros())
    }

    /// Create a vector from a slice, failing when the length is not `D`
    /// or a component is not finite.
    pub fn try_from_slice(components: &[f64]) -> Result<Self> {
        if components.len() != D {
            return Err(GeometryError::DimensionMismatch {
                expected: D,
                actual: components.len(),
            });
        }
        let vector = Self(SVector::from_column_slice(components));
        if !vector.is_finite() {
            return Err(GeometryError::non_finite(format!("{:?}", components)));
        }
        Ok(vector)
    }

    /// Convert vector to a vector of components.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.iter().copied().collect()
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }

    /// Unit vector in the same direction.
    ///
    /// Components are scaled by the largest magnitude first so that very
    /// large or very small finite vectors normalize without overflow.
    /// Zero-length and non-finite vectors have no direction and are rejected.
    pub fn try_normalize(&self) -> Result<Self> {
        if !self.is_finite() {
            return Err(GeometryError::non_finite(format!(
                "cannot normalize vector {:?} with non-finite components",
                self.to_vec()
            )));
        }
        let scale = self.0.amax();
        if scale == 0.0 {
            return Err(GeometryError::non_finite("cannot normalize a zero-length vector"));
        }
        let scaled = self.0 / scale;
        Ok(Self(scaled / scaled.norm()))
    }

    /// Create a unit vector along the x-axis.
    pub fn x_axis() -> Self {
        let mut v = Self::zeros();
        v.0[0] = 1.0;
        v
    }

    /// Create a unit vector along the y-axis.
    pub fn y_axis() -> Self {
        let mut v = Self::zeros();
        v.0[1] = 1.0;
        v
    }

    /// Create a unit vector along the z-axis.
    pub fn z_axis() -> Self {
        let mut v = Self::zeros();
        v.0[2] = 1.0;
        v
    }
}

impl Vector<3> {
    /// Cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self(self.0.cross(&other.0))
    }
}

impl<const D: usize> From<[f64; D]> for Vector<D> {
    fn from(components: [f64; D]) -> Self {
        Self::new(components)
    }
}

impl<const D: usize> TryFrom<&[f64]> for Vector<D> {
    type Error = GeometryError;

    fn try_from(components: &[f64]) -> Result<Self> {
        Self::try_from_slice(components)
    }
}

impl<const D: usize> std::ops::Index<usize> for Vector<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const D: usize> std::ops::IndexMut<usize> for Vector<D> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const D: usize> std::ops::Add for Vector<D> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl<const D: usize> std::ops::Sub for Vector<D> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl<const D: usize> std::ops::Mul<f64> for Vector<D> {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self(self.0 * scalar)
    }
}

impl<const D: usize> std::ops::Div<f64> for Vector<D> {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        Self(self.0 / scalar)
    }
}

impl<const D: usize> std::ops::Neg for Vector<D> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Vector3 = Vector<3>;

    #[test]
    fn test_vector_try_from_slice() {
        let v = Vector3::try_from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, Vector3::new([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_vector_try_from_slice_wrong_length() {
        let err = Vector3::try_from_slice(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::DimensionMismatch { expected: 3, actual: 2 }
        ));

        let err = Vector3::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::DimensionMismatch { expected: 3, actual: 4 }
        ));
    }

    #[test]
    fn test_vector_try_from_slice_non_finite() {
        let err = Vector3::try_from_slice(&[1.0, f64::NAN, 0.0]).unwrap_err();
        assert!(matches!(err, GeometryError::NonFinite(_)));
    }

    #[test]
    fn test_vector_normalize() {
        let v = Vector3::new([3.0, 0.0, 4.0]).try_normalize().unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v[0] - 0.6).abs() < 1e-12);
        assert!((v[2] - 0.8).abs() < 1e-12);

        assert!(Vector3::zeros().try_normalize().is_err());
        assert!(Vector3::new([f64::INFINITY, 0.0, 0.0]).try_normalize().is_err());
    }

    #[test]
    fn test_vector_normalize_extreme_magnitudes() {
        let big = Vector3::new([1e200, 1e199, 1e199]).try_normalize().unwrap();
        assert!((big.norm() - 1.0).abs() < 1e-12);
        assert!(big[0] > 0.98);

        let tiny = Vector3::new([0.0, 3e-200, 4e-200]).try_normalize().unwrap();
        assert!((tiny[1] - 0.6).abs() < 1e-12);
        assert!((tiny[2] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_vector_cross_is_right_handed() {
        let z = Vector3::x_axis().cross(&Vector3::y_axis());
        assert_eq!(z, Vector3::z_axis());

        let x = Vector3::y_axis().cross(&Vector3::z_axis());
        assert_eq!(x, Vector3::x_axis());
    }

    #[test]
    fn test_vector_arithmetic() {
        let v1 = Vector3::new([1.0, -2.0, 3.0]);
        let v2 = Vector3::new([4.0, 5.0, 6.0]);

        assert_eq!(v1 + v2, Vector3::new([5.0, 3.0, 9.0]));
        assert_eq!(v2 - v1, Vector3::new([3.0, 7.0, 3.0]));
        assert_eq!(v1 * 2.0, Vector3::new([2.0, -4.0, 6.0]));
        assert_eq!(v2 / 2.0, Vector3::new([2.0, 2.5, 3.0]));
        assert_eq!(-v1, Vector3::new([-1.0, 2.0, -3.0]));
        assert_eq!(v1.abs(), Vector3::new([1.0, 2.0, 3.0]));
        assert_eq!(v1.dot(&v2), 4.0 - 10.0 + 18.0);
    }
}
