//! Coordinate transforms between the gradient (GCS), patient (PCS) and
//! device (DCS) coordinate systems of MR acquisition geometry.
//!
//! All operations are pure functions over small value types and are safe to
//! call from any number of threads.

pub mod spatial;
pub mod error;
pub mod orientation;
pub mod position;
pub mod rotation;
pub mod transform;

pub use error::{GeometryError, Result};
pub use orientation::{
    classify, classify_with_rule, dominant_axis, ClassificationRule, Orientation, TIE_TOLERANCE,
};
pub use position::{device_to_patient, patient_to_device, PatientPosition};
pub use spatial::{Direction, Direction3, Vector, Vector3};
pub use transform::{
    build_basis, device_to_gradient, direction_cosines_to_device, gradient_frame,
    gradient_to_device, gradient_to_patient, patient_to_gradient, rotate_in_plane,
    GradientFrame, DEGENERATE_EPSILON,
};
