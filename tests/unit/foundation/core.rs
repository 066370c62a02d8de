use super::*;

#[test]
fn camera_ids_are_ordered_and_hashable() {
    let a = CameraId(1);
    let b = CameraId(2);
    assert!(a < b);
    assert_eq!(a, CameraId(1));

    let mut set = std::collections::HashSet::new();
    set.insert(a);
    set.insert(a);
    set.insert(b);
    assert_eq!(set.len(), 2);
}

#[test]
fn weights_reconstruct_a_running_average() {
    // Folding samples 10, 20, 30 with unit weights must yield their mean.
    let samples = [10.0f32, 20.0, 30.0];
    let mut avg = 0.0f32;
    let mut total = 0.0f32;

    for (i, sample) in samples.iter().enumerate() {
        let weights = FrameWeights {
            current: 1.0,
            prior_total: total,
            inverse_total: 1.0 / (i as f32 + 1.0),
        };
        avg = (avg * weights.prior_total + sample * weights.current) * weights.inverse_total;
        total += weights.current;
    }

    assert!((avg - 20.0).abs() < 1e-5);
}
