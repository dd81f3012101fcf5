//! Elementary rotation matrices.
//!
//! Rotations are active and follow the right-hand rule: a positive angle
//! about Z takes the x-axis towards the y-axis.

use nalgebra::Matrix3;

use crate::spatial::{Direction, Direction3};

/// Coordinate axis a rotation is taken about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotation about `axis` by `angle` radians.
#[rustfmt::skip]
pub fn about_axis(axis: Axis, angle: f64) -> Direction3 {
    let (s, c) = angle.sin_cos();
    let m = match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c, -s,
            0.0, s, c,
        ),
        Axis::Y => Matrix3::new(
            c, 0.0, s,
            0.0, 1.0, 0.0,
            -s, 0.0, c,
        ),
        Axis::Z => Matrix3::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        ),
    };
    Direction(m)
}
