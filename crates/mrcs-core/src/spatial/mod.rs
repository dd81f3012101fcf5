//! Spatial types for representing vectors and direction matrices.
//!
//! All types are based on nalgebra for efficient linear algebra operations.

pub mod vector;
pub mod direction;

pub use vector::Vector;
pub use direction::Direction;

pub type Vector3 = Vector<3>;
pub type Direction3 = Direction<3>;
