use super::*;

use crate::shutter::profile::ShutterProfile;

#[test]
fn shape_defaults_to_a_fully_open_trapezoid() {
    let json = r#"{ "sample_count": 4 }"#;
    let config: RecordingConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.sample_count, 4);
    assert_eq!(config.shutter_interval, 0.0);
    assert_eq!(
        config.shape,
        ShutterShape::Trapezoid {
            fully_open: 0.0,
            begins_closing: 1.0
        }
    );
}

#[test]
fn trapezoid_round_trips_through_json() {
    let config = RecordingConfig::trapezoid(8, 1.0, 0.25, 0.75);
    let json = serde_json::to_string(&config).unwrap();
    let back: RecordingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn curve_round_trips_through_json() {
    let config = RecordingConfig::curved(16, 0.5, vec![(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"kind\":\"curve\""));
    let back: RecordingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn build_profile_validates_the_shape() {
    let bad = RecordingConfig::trapezoid(8, 1.0, 0.9, 0.1);
    assert!(bad.build_profile(1.0).is_err());

    let empty_curve = RecordingConfig::curved(8, 1.0, vec![]);
    assert!(empty_curve.build_profile(1.0).is_err());

    let good = RecordingConfig::trapezoid(8, 1.0, 0.25, 0.75);
    let profile = good.build_profile(1.0).unwrap();
    assert_eq!(profile, ShutterProfile::trapezoid(1.0, 0.25, 0.75).unwrap());
}
