use super::*;

fn advance(registry: &mut AccumulationRegistry, camera: CameraId, iterations: u32, weight: f32) {
    let state = registry.get_or_create(camera);
    for _ in 0..iterations {
        state.add_weight(weight);
        state.advance_iteration();
    }
}

#[test]
fn get_or_create_inserts_once() {
    let mut registry = AccumulationRegistry::new();
    assert!(registry.is_empty());

    registry.get_or_create(CameraId(7)).width = 640;
    assert_eq!(registry.len(), 1);

    // Second lookup returns the same record.
    assert_eq!(registry.get_or_create(CameraId(7)).width, 640);
    assert_eq!(registry.len(), 1);
}

#[test]
fn set_replaces_the_whole_record() {
    let mut registry = AccumulationRegistry::new();
    advance(&mut registry, CameraId(1), 3, 1.0);

    let mut fresh = CameraState::new();
    fresh.width = 128;
    registry.set(CameraId(1), fresh);

    let state = registry.get(CameraId(1)).unwrap();
    assert_eq!(state.width, 128);
    assert_eq!(state.current_iteration(), 0);
    assert_eq!(state.accumulated_weight(), 0.0);
}

#[test]
fn reset_all_zeroes_without_dropping_cameras() {
    let mut registry = AccumulationRegistry::new();
    advance(&mut registry, CameraId(1), 2, 1.0);
    advance(&mut registry, CameraId(2), 5, 0.5);

    registry.reset_all();

    assert_eq!(registry.len(), 2);
    for camera in [CameraId(1), CameraId(2)] {
        let state = registry.get(camera).unwrap();
        assert_eq!(state.current_iteration(), 0);
        assert_eq!(state.accumulated_weight(), 0.0);
    }
}

#[test]
fn reset_one_tracks_unknown_cameras() {
    let mut registry = AccumulationRegistry::new();
    registry.reset_one(CameraId(9));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(CameraId(9)).unwrap().current_iteration(), 0);
}

#[test]
fn selective_reset_only_touches_converged_cameras() {
    let mut registry = AccumulationRegistry::new();
    advance(&mut registry, CameraId(1), 2, 1.0);
    advance(&mut registry, CameraId(2), 4, 1.0);
    advance(&mut registry, CameraId(3), 6, 1.0);

    registry.selective_reset(4);

    assert_eq!(registry.get(CameraId(1)).unwrap().current_iteration(), 2);
    assert_eq!(registry.get(CameraId(2)).unwrap().current_iteration(), 0);
    assert_eq!(registry.get(CameraId(3)).unwrap().current_iteration(), 0);
    assert_eq!(registry.len(), 3);
}

#[test]
fn max_iteration_over_tracked_cameras() {
    let mut registry = AccumulationRegistry::new();
    assert_eq!(registry.max_iteration(), 0);

    advance(&mut registry, CameraId(1), 2, 1.0);
    advance(&mut registry, CameraId(2), 7, 1.0);
    assert_eq!(registry.max_iteration(), 7);
}

#[test]
fn clear_drops_everything() {
    let mut registry = AccumulationRegistry::new();
    advance(&mut registry, CameraId(1), 1, 1.0);
    advance(&mut registry, CameraId(2), 1, 1.0);

    registry.clear();
    assert!(registry.is_empty());
    assert_eq!(registry.camera_ids().count(), 0);
}
