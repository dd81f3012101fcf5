//! Gradient coordinate system construction and frame composition.
//!
//! [`basis`] builds the read/line/partition axes from a slice normal;
//! [`compose`] chains that basis with the patient-to-device mapping.

pub mod basis;
pub mod compose;

pub use basis::{build_basis, rotate_in_plane, DEGENERATE_EPSILON};
pub use compose::{
    device_to_gradient, direction_cosines_to_device, gradient_frame, gradient_to_device,
    gradient_to_patient, patient_to_gradient, GradientFrame,
};
