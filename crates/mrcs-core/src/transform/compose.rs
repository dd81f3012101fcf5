//! Composition of the gradient basis with the patient-to-device mapping.
//!
//! Orientation is always classified on the patient-space normal and the
//! device matrix is obtained by left-multiplying the gradient-to-patient
//! basis with the position's axis permutation. Classifying after mapping
//! into device space can pick a different orientation near ties and is not
//! offered.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::orientation::{classify, dominant_axis, Orientation};
use crate::position::PatientPosition;
use crate::rotation::{about_axis, Axis};
use crate::spatial::{Direction3, Vector3};

use super::basis::build_basis;

/// Gradient-to-patient rotation for a patient-space slice normal.
///
/// Columns are read, line and partition in patient coordinates.
///
/// # Errors
/// `DegenerateOrientation` when the normal is zero or lies along the axis
/// its classified orientation excludes. An exactly axial normal such as
/// `(0, 0, 1)` is one of these: its zero sagittal and coronal magnitudes tie,
/// the tie resolves to coronal, and the coronal line axis is undefined.
/// Tilting the normal by more than [`crate::TIE_TOLERANCE`] in either
/// in-plane component avoids it.
pub fn gradient_to_patient(normal: &Vector3, beta: f64) -> Result<Direction3> {
    let orientation = classify(normal);
    tracing::debug!("gradient_to_patient: {} slice, beta {}", orientation, beta);
    build_basis(normal, orientation, beta)
}

/// Patient-to-gradient rotation, the inverse of [`gradient_to_patient`].
pub fn patient_to_gradient(normal: &Vector3, beta: f64) -> Result<Direction3> {
    Ok(gradient_to_patient(normal, beta)?.transpose())
}

/// Gradient-to-device rotation for a patient-space slice normal.
///
/// Columns are read, line and partition in device coordinates.
///
/// # Errors
/// Same as [`gradient_to_patient`].
pub fn gradient_to_device(
    normal: &Vector3,
    beta: f64,
    position: PatientPosition,
) -> Result<Direction3> {
    let gp = gradient_to_patient(normal, beta)?;
    tracing::debug!("gradient_to_device: position {}", position);
    Ok(position.patient_to_device() * gp)
}

/// Device-to-gradient rotation, the inverse of [`gradient_to_device`].
pub fn device_to_gradient(
    normal: &Vector3,
    beta: f64,
    position: PatientPosition,
) -> Result<Direction3> {
    Ok(gradient_to_device(normal, beta, position)?.transpose())
}

/// Gradient-to-device rotation built directly from device-space direction
/// cosines, bypassing the patient position.
///
/// The orientation is the largest squared component with no tie handling,
/// and the in-plane angle is applied as a rotation about the basis' third
/// axis.
pub fn direction_cosines_to_device(direction_cosines: &Vector3, beta: f64) -> Result<Direction3> {
    let orientation = dominant_axis(direction_cosines);
    tracing::debug!(
        "direction_cosines_to_device: {} slice, beta {}",
        orientation,
        beta
    );
    let basis = build_basis(direction_cosines, orientation, 0.0)?;
    Ok(basis * about_axis(Axis::Z, beta))
}

/// A fully resolved gradient frame for one slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientFrame {
    orientation: Orientation,
    position: PatientPosition,
    gradient_to_patient: Direction3,
    gradient_to_device: Direction3,
}

impl GradientFrame {
    /// Orientation the slice normal was classified as.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn position(&self) -> PatientPosition {
        self.position
    }

    pub fn gradient_to_patient(&self) -> &Direction3 {
        &self.gradient_to_patient
    }

    pub fn gradient_to_device(&self) -> &Direction3 {
        &self.gradient_to_device
    }

    /// Read axis in device coordinates.
    pub fn read(&self) -> Vector3 {
        self.gradient_to_device.column(0)
    }

    /// Line (phase) axis in device coordinates.
    pub fn line(&self) -> Vector3 {
        self.gradient_to_device.column(1)
    }

    /// Partition axis in device coordinates.
    pub fn partition(&self) -> Vector3 {
        self.gradient_to_device.column(2)
    }
}

/// Classify, build and map a slice normal in one pass.
pub fn gradient_frame(
    normal: &Vector3,
    beta: f64,
    position: PatientPosition,
) -> Result<GradientFrame> {
    let orientation = classify(normal);
    let gradient_to_patient = build_basis(normal, orientation, beta)?;
    Ok(GradientFrame {
        orientation,
        position,
        gradient_to_patient,
        gradient_to_device: position.patient_to_device() * gradient_to_patient,
    })
}
