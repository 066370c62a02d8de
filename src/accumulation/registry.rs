use std::collections::HashMap;

use crate::accumulation::state::CameraState;
use crate::foundation::core::CameraId;

#[derive(Debug, Default)]
/// Keyed store of per-camera accumulation state.
///
/// Cameras are tracked lazily: the first lookup for an id inserts a freshly
/// zeroed [`CameraState`]. Entries are only removed by [`clear`], typically
/// when a recording session ends or the owning pipeline switches scenes.
///
/// The registry is single-threaded by design; callers serialize access when a
/// multi-threaded renderer submits camera work concurrently.
///
/// [`clear`]: AccumulationRegistry::clear
pub struct AccumulationRegistry {
    cameras: HashMap<CameraId, CameraState>,
}

impl AccumulationRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// State for `camera`, inserting a freshly zeroed record on first lookup.
    pub fn get_or_create(&mut self, camera: CameraId) -> &mut CameraState {
        self.cameras.entry(camera).or_default()
    }

    /// State for `camera`, if tracked.
    pub fn get(&self, camera: CameraId) -> Option<&CameraState> {
        self.cameras.get(&camera)
    }

    /// Mutable state for `camera`, if tracked.
    pub fn get_mut(&mut self, camera: CameraId) -> Option<&mut CameraState> {
        self.cameras.get_mut(&camera)
    }

    /// Replace the stored record for `camera` wholesale.
    pub fn set(&mut self, camera: CameraId, state: CameraState) {
        self.cameras.insert(camera, state);
    }

    /// Restart accumulation for every tracked camera.
    ///
    /// The set of tracked ids is unchanged.
    pub fn reset_all(&mut self) {
        tracing::debug!(cameras = self.cameras.len(), "resetting all camera accumulation");
        for state in self.cameras.values_mut() {
            state.reset_iteration();
        }
    }

    /// Restart accumulation for one camera, tracking it if new.
    pub fn reset_one(&mut self, camera: CameraId) {
        self.get_or_create(camera).reset_iteration();
    }

    /// Restart accumulation for every camera whose iteration count has reached
    /// `threshold`.
    ///
    /// Used to recover cameras that converged beyond a just-lowered sample
    /// target; cameras still below the threshold keep their progress.
    pub fn selective_reset(&mut self, threshold: u32) {
        for state in self.cameras.values_mut() {
            if state.current_iteration() >= threshold {
                state.reset_iteration();
            }
        }
    }

    /// Drop all tracked cameras.
    pub fn clear(&mut self) {
        self.cameras.clear();
    }

    /// Highest iteration count across tracked cameras (`0` when empty).
    pub fn max_iteration(&self) -> u32 {
        self.cameras
            .values()
            .map(CameraState::current_iteration)
            .max()
            .unwrap_or(0)
    }

    /// Number of tracked cameras.
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Whether no camera is tracked.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Ids of all tracked cameras, in unspecified order.
    pub fn camera_ids(&self) -> impl Iterator<Item = CameraId> + '_ {
        self.cameras.keys().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/accumulation/registry.rs"]
mod tests;
