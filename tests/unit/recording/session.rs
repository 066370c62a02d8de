use super::*;

use crate::time::FixedTimeScale;

fn clock() -> FixedTimeScale {
    FixedTimeScale::new(1.0 / 24.0, 0.02)
}

#[test]
fn begin_divides_the_external_delta_times() {
    let mut session = RecordingSession::new();
    let mut time = clock();

    session
        .begin(&RecordingConfig::trapezoid(4, 1.0, 0.0, 1.0), &mut time)
        .unwrap();

    assert!(session.is_recording());
    assert_eq!(session.sub_frame_count(), 4);
    assert!((time.capture_delta - 1.0 / 96.0).abs() < 1e-12);
    assert!((time.fixed_delta - 0.005).abs() < 1e-12);
}

#[test]
fn end_restores_the_saved_delta_times() {
    let mut session = RecordingSession::new();
    let mut time = clock();
    let original = time;

    session
        .begin(&RecordingConfig::trapezoid(8, 1.0, 0.0, 1.0), &mut time)
        .unwrap();
    session.end(&mut time);

    assert!(!session.is_recording());
    assert_eq!(time, original);

    // Idempotent: a second end restores the same values again.
    session.end(&mut time);
    assert_eq!(time, original);
}

#[test]
fn end_before_any_begin_leaves_the_clock_untouched() {
    let mut session = RecordingSession::new();
    let mut time = clock();
    let original = time;

    session.end(&mut time);
    assert_eq!(time, original);
}

#[test]
fn nested_begin_is_rejected() {
    let mut session = RecordingSession::new();
    let mut time = clock();
    let config = RecordingConfig::trapezoid(4, 1.0, 0.0, 1.0);

    session.begin(&config, &mut time).unwrap();
    let err = session.begin(&config, &mut time).unwrap_err();
    assert!(matches!(err, SubframeError::Recording(_)));

    // The rejected call must not have disturbed the overridden clock.
    assert!((time.capture_delta - 1.0 / 96.0).abs() < 1e-12);
}

#[test]
fn zero_samples_are_rejected() {
    let mut session = RecordingSession::new();
    let mut time = clock();
    let err = session
        .begin(&RecordingConfig::trapezoid(0, 1.0, 0.0, 1.0), &mut time)
        .unwrap_err();
    assert!(matches!(err, SubframeError::Validation(_)));
    assert!(!session.is_recording());
}

#[test]
fn malformed_shutter_timings_are_rejected_at_begin() {
    let mut session = RecordingSession::new();
    let mut time = clock();
    let original = time;

    let err = session
        .begin(&RecordingConfig::trapezoid(4, 1.0, 0.75, 0.25), &mut time)
        .unwrap_err();
    assert!(matches!(err, SubframeError::Validation(_)));
    assert!(!session.is_recording());
    assert_eq!(time, original);
}

#[test]
fn single_sample_recording_disables_shutter_weighting() {
    let mut session = RecordingSession::new();
    let mut time = clock();

    session
        .begin(&RecordingConfig::trapezoid(1, 0.8, 0.25, 0.75), &mut time)
        .unwrap();

    assert!(session.profile().is_instant());
    for t in [0.0, 0.3, 0.9] {
        assert_eq!(session.sample_weight(t), 1.0);
    }
}

#[test]
fn sample_weight_is_unity_while_idle() {
    let session = RecordingSession::new();
    assert_eq!(session.sample_weight(0.0), 1.0);
    assert_eq!(session.sample_weight(0.7), 1.0);
}

#[test]
fn end_clears_the_shutter_curve() {
    let mut session = RecordingSession::new();
    let mut time = clock();

    session
        .begin(
            &RecordingConfig::curved(4, 1.0, vec![(0.0, 0.5), (1.0, 0.5)]),
            &mut time,
        )
        .unwrap();
    session.end(&mut time);

    assert_eq!(*session.profile(), crate::shutter::profile::ShutterProfile::default());
}
