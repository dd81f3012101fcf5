//! Direction type for representing rotations between acquisition frames.
//!
//! Direction matrices map coordinates of one frame (gradient, patient or
//! device) into another.

use nalgebra::{Matrix3, SMatrix};
use serde::{Deserialize, Serialize};

use super::Vector;

/// Tolerance used by the orthonormality checks.
const ORTHO_TOLERANCE: f64 = 1e-6;

/// Direction matrix mapping a source frame into a target frame.
///
/// Column i is the i-th source axis expressed in the target frame. For a
/// gradient-to-device matrix the columns are read, line and partition in
/// device coordinates.
///
/// This is a thin wrapper around nalgebra's SMatrix to provide
/// domain-specific functionality while maintaining all nalgebra operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction<const D: usize>(pub SMatrix<f64, D, D>);

impl<const D: usize> Direction<D> {
    /// Create an identity direction matrix (no rotation).
    pub fn identity() -> Self {
        Self(SMatrix::identity())
    }

    /// Create a zero matrix.
    pub fn zeros() -> Self {
        Self(SMatrix::zeros())
    }

    /// Build a matrix whose columns are the given axes.
    pub fn from_columns(columns: [Vector<D>; D]) -> Self {
        let mut m = SMatrix::<f64, D, D>::zeros();
        for (j, column) in columns.iter().enumerate() {
            m.set_column(j, &column.0);
        }
        Self(m)
    }

    /// Transpose, which is the inverse for any rotation.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Check if direction matrix is orthogonal (rotation or reflection).
    pub fn is_orthogonal(&self) -> bool {
        let product = self.0 * self.0.transpose();
        let identity = SMatrix::<f64, D, D>::identity();
        (0..D).all(|i| {
            (0..D).all(|j| (product[(i, j)] - identity[(i, j)]).abs() < ORTHO_TOLERANCE)
        })
    }

    /// Get the i-th column (the i-th source axis in target coordinates).
    pub fn column(&self, i: usize) -> Vector<D> {
        Vector(self.0.column(i).into_owned())
    }

    /// Get the axis directions as vectors.
    pub fn axis_directions(&self) -> Vec<Vector<D>> {
        (0..D).map(|i| self.column(i)).collect()
    }

    /// Largest absolute element-wise difference to another matrix.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        (self.0 - other.0).abs().max()
    }
}

impl Direction<3> {
    /// Build a 3x3 matrix from rows given in row-major order.
    #[rustfmt::skip]
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self(Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        ))
    }

    /// Compute the determinant.
    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    /// Check if direction matrix is a proper rotation (det = 1).
    pub fn is_proper_rotation(&self) -> bool {
        self.is_orthogonal() && (self.determinant() - 1.0).abs() < ORTHO_TOLERANCE
    }
}

impl<const D: usize> std::ops::Index<(usize, usize)> for Direction<D> {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.0[index]
    }
}

impl<const D: usize> std::ops::IndexMut<(usize, usize)> for Direction<D> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const D: usize> std::ops::Mul for Direction<D> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self(self.0 * other.0)
    }
}

impl<const D: usize> std::ops::Mul<Vector<D>> for Direction<D> {
    type Output = Vector<D>;

    fn mul(self, vector: Vector<D>) -> Self::Output {
        Vector(self.0 * vector.0)
    }
}
