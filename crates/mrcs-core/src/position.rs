//! Patient position and the patient-to-device axis mapping.
//!
//! Each of the eight standard table positions fixes a signed permutation
//! between the anatomical axes (sagittal, coronal, transversal) and the
//! physical gradient axes (x, y, z).

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::spatial::{Direction3, Vector3};

/// Patient placement on the scanner table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatientPosition {
    HeadFirstSupine,
    HeadFirstProne,
    HeadFirstLateralRight,
    HeadFirstLateralLeft,
    FeetFirstSupine,
    FeetFirstProne,
    FeetFirstLateralRight,
    FeetFirstLateralLeft,
}

/// One device axis taken from a signed patient axis.
#[derive(Debug, Clone, Copy)]
struct SignedAxis {
    patient_axis: usize,
    sign: f64,
}

const fn axis(patient_axis: usize, sign: f64) -> SignedAxis {
    SignedAxis { patient_axis, sign }
}

const SAG: usize = 0;
const COR: usize = 1;
const TRA: usize = 2;

/// Device x, y, z in terms of patient axes, indexed like [`PatientPosition::ALL`].
static AXIS_TABLE: [[SignedAxis; 3]; 8] = [
    [axis(SAG, 1.0), axis(COR, -1.0), axis(TRA, -1.0)],
    [axis(SAG, -1.0), axis(COR, 1.0), axis(TRA, -1.0)],
    [axis(COR, 1.0), axis(SAG, 1.0), axis(TRA, -1.0)],
    [axis(COR, -1.0), axis(SAG, -1.0), axis(TRA, -1.0)],
    [axis(SAG, -1.0), axis(COR, -1.0), axis(TRA, 1.0)],
    [axis(SAG, 1.0), axis(COR, 1.0), axis(TRA, 1.0)],
    [axis(COR, -1.0), axis(SAG, 1.0), axis(TRA, 1.0)],
    [axis(COR, 1.0), axis(SAG, -1.0), axis(TRA, 1.0)],
];

impl PatientPosition {
    pub const ALL: [PatientPosition; 8] = [
        PatientPosition::HeadFirstSupine,
        PatientPosition::HeadFirstProne,
        PatientPosition::HeadFirstLateralRight,
        PatientPosition::HeadFirstLateralLeft,
        PatientPosition::FeetFirstSupine,
        PatientPosition::FeetFirstProne,
        PatientPosition::FeetFirstLateralRight,
        PatientPosition::FeetFirstLateralLeft,
    ];

    fn table_row(self) -> &'static [SignedAxis; 3] {
        &AXIS_TABLE[self as usize]
    }

    /// DICOM Patient Position (0018,5100) code string.
    pub fn code(self) -> &'static str {
        match self {
            PatientPosition::HeadFirstSupine => "HFS",
            PatientPosition::HeadFirstProne => "HFP",
            PatientPosition::HeadFirstLateralRight => "HFDR",
            PatientPosition::HeadFirstLateralLeft => "HFDL",
            PatientPosition::FeetFirstSupine => "FFS",
            PatientPosition::FeetFirstProne => "FFP",
            PatientPosition::FeetFirstLateralRight => "FFDR",
            PatientPosition::FeetFirstLateralLeft => "FFDL",
        }
    }

    /// Signed permutation taking patient coordinates to device coordinates.
    pub fn patient_to_device(self) -> Direction3 {
        let mut m = Direction3::zeros();
        for (device_axis, signed) in self.table_row().iter().enumerate() {
            m[(device_axis, signed.patient_axis)] = signed.sign;
        }
        m
    }

    /// Inverse mapping, the transpose of [`Self::patient_to_device`].
    pub fn device_to_patient(self) -> Direction3 {
        self.patient_to_device().transpose()
    }

    /// Express a patient-space vector in device coordinates.
    pub fn map_patient_to_device(self, v: &Vector3) -> Vector3 {
        let row = self.table_row();
        Vector3::new([
            row[0].sign * v[row[0].patient_axis],
            row[1].sign * v[row[1].patient_axis],
            row[2].sign * v[row[2].patient_axis],
        ])
    }

    /// Express a device-space vector in patient coordinates.
    pub fn map_device_to_patient(self, v: &Vector3) -> Vector3 {
        let mut out = Vector3::zeros();
        for (device_axis, signed) in self.table_row().iter().enumerate() {
            out[signed.patient_axis] = signed.sign * v[device_axis];
        }
        out
    }
}

impl std::fmt::Display for PatientPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for PatientPosition {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        PatientPosition::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| GeometryError::unknown_position(code))
    }
}

/// Patient-to-device matrix for a position.
pub fn patient_to_device(position: PatientPosition) -> Direction3 {
    position.patient_to_device()
}

/// Device-to-patient matrix for a position.
pub fn device_to_patient(position: PatientPosition) -> Direction3 {
    position.device_to_patient()
}
