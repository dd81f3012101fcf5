//! Error types for coordinate system operations.
//!
//! Every failure is detected where it happens and returned to the caller;
//! no operation yields a partial matrix.

use thiserror::Error;

use crate::orientation::Orientation;

/// Main error type for coordinate system operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The normal has no component in the plane the line axis is built in.
    #[error("Degenerate {orientation} orientation: {reason}")]
    DegenerateOrientation {
        orientation: Orientation,
        reason: String,
    },

    /// Input slice does not have the expected number of components.
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A patient position code outside the eight standard positions.
    #[error("Unknown patient position: {0}")]
    UnknownPatientPosition(String),

    /// NaN, infinite or zero-length input where a direction is required.
    #[error("Non-finite input: {0}")]
    NonFinite(String),
}

/// Result type for coordinate system operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

impl GeometryError {
    /// Create a degenerate orientation error.
    pub fn degenerate(orientation: Orientation, reason: impl Into<String>) -> Self {
        Self::DegenerateOrientation {
            orientation,
            reason: reason.into(),
        }
    }

    /// Create an unknown patient position error.
    pub fn unknown_position(code: impl Into<String>) -> Self {
        Self::UnknownPatientPosition(code.into())
    }

    /// Create a non-finite input error.
    pub fn non_finite(msg: impl Into<String>) -> Self {
        Self::NonFinite(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = GeometryError::degenerate(Orientation::Sagittal, "zero in-plane norm");
        assert!(matches!(
            err,
            GeometryError::DegenerateOrientation {
                orientation: Orientation::Sagittal,
                ..
            }
        ));
    }

    #[test]
    fn test_error_display() {
        let err = GeometryError::degenerate(Orientation::Transversal, "zero in-plane norm");
        assert_eq!(
            err.to_string(),
            "Degenerate Transversal orientation: zero in-plane norm"
        );

        let err = GeometryError::unknown_position("XYZ");
        assert_eq!(err.to_string(), "Unknown patient position: XYZ");
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = GeometryError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        let err_str = err.to_string();
        assert!(err_str.contains("expected 3"));
        assert!(err_str.contains("got 2"));
    }
}
