use mrcs_core::{gradient_frame, Orientation, PatientPosition, Vector3};

#[test]
fn test_position_serializes_by_variant_name() {
    let json = serde_json::to_string(&PatientPosition::HeadFirstLateralLeft).unwrap();
    assert_eq!(json, "\"HeadFirstLateralLeft\"");

    let parsed: PatientPosition = serde_json::from_str("\"FeetFirstSupine\"").unwrap();
    assert_eq!(parsed, PatientPosition::FeetFirstSupine);
}

#[test]
fn test_gradient_frame_round_trips_through_json() {
    let normal = Vector3::new([0.9, 0.3, -0.3]).try_normalize().unwrap();
    let frame = gradient_frame(&normal, 0.2, PatientPosition::HeadFirstSupine).unwrap();
    assert_eq!(frame.orientation(), Orientation::Sagittal);

    let json = serde_json::to_string(&frame).unwrap();
    let restored: mrcs_core::GradientFrame = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.orientation(), frame.orientation());
    assert!(restored
        .gradient_to_device()
        .max_abs_diff(frame.gradient_to_device())
        < 1e-12);
}
