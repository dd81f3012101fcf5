//! Gradient basis construction.
//!
//! The partition axis is the slice normal. The line axis is the unit vector
//! orthogonal to it inside a canonical plane picked by the orientation: for
//! sagittal and coronal slices it has no third component, for transversal
//! slices no first component. The device only rotates about two physical
//! axes, which keeps the line axis in that plane for any partition
//! direction. The read axis completes a right-handed frame.

use crate::error::{GeometryError, Result};
use crate::orientation::Orientation;
use crate::spatial::{Direction3, Vector3};

/// In-plane norm at or below which a normal is degenerate for its orientation.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

fn line_axis(n: &Vector3, orientation: Orientation) -> Result<Vector3> {
    let (in_plane_norm, unscaled) = match orientation {
        Orientation::Sagittal => (n[0].hypot(n[1]), Vector3::new([-n[1], n[0], 0.0])),
        Orientation::Coronal => (n[0].hypot(n[1]), Vector3::new([n[1], -n[0], 0.0])),
        Orientation::Transversal => (n[1].hypot(n[2]), Vector3::new([0.0, -n[2], n[1]])),
    };

    if in_plane_norm <= DEGENERATE_EPSILON {
        tracing::debug!(
            "normal {:?} has in-plane norm {} for {} orientation",
            n.to_vec(),
            in_plane_norm,
            orientation
        );
        return Err(GeometryError::degenerate(
            orientation,
            format!("normal {:?} is aligned with the excluded axis", n.to_vec()),
        ));
    }

    Ok(unscaled / in_plane_norm)
}

/// Rotate the read and line axes of a basis by `beta` radians about its
/// partition axis, clockwise when looking along the partition direction.
///
/// The partition column is left untouched.
pub fn rotate_in_plane(basis: &Direction3, beta: f64) -> Direction3 {
    let (s, c) = beta.sin_cos();
    let read = basis.column(0);
    let line = basis.column(1);
    Direction3::from_columns([
        read * c + line * s,
        line * c - read * s,
        basis.column(2),
    ])
}

/// Build the gradient basis (read, line, partition columns) for a slice
/// normal in whichever frame the normal is expressed in.
///
/// # Arguments
/// * `normal` - Partition direction; re-normalized before use
/// * `orientation` - Selects the canonical plane of the line axis
/// * `beta` - In-plane rotation angle in radians
///
/// # Errors
/// `DegenerateOrientation` when the normal is zero or lies along the axis
/// the orientation's line formula excludes.
pub fn build_basis(normal: &Vector3, orientation: Orientation, beta: f64) -> Result<Direction3> {
    let partition = normal
        .try_normalize()
        .map_err(|_| GeometryError::degenerate(orientation, "normal has zero or non-finite length"))?;
    let line = line_axis(&partition, orientation)?;
    let read = line.cross(&partition);

    let basis = Direction3::from_columns([read, line, partition]);
    Ok(rotate_in_plane(&basis, beta))
}
