/// External frame-clock collaborator.
///
/// A recording session temporarily overrides two process-wide delta-time
/// scalars so the host simulation advances in `sample_count` sub-steps per
/// final frame, and restores them when the session ends. The engine treats
/// both values as opaque seconds.
pub trait TimeScaleService {
    /// Current capture (per rendered frame) delta time in seconds.
    fn capture_delta(&self) -> f64;

    /// Override the capture delta time.
    fn set_capture_delta(&mut self, seconds: f64);

    /// Current fixed (physics/simulation) delta time in seconds.
    fn fixed_delta(&self) -> f64;

    /// Override the fixed delta time.
    fn set_fixed_delta(&mut self, seconds: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// In-memory clock used by tests and offline simulation.
pub struct FixedTimeScale {
    /// Capture delta time in seconds.
    pub capture_delta: f64,
    /// Fixed delta time in seconds.
    pub fixed_delta: f64,
}

impl FixedTimeScale {
    /// Build a clock with explicit delta times.
    pub fn new(capture_delta: f64, fixed_delta: f64) -> Self {
        Self {
            capture_delta,
            fixed_delta,
        }
    }
}

impl Default for FixedTimeScale {
    fn default() -> Self {
        // 60 fps capture, 50 Hz simulation.
        Self {
            capture_delta: 1.0 / 60.0,
            fixed_delta: 0.02,
        }
    }
}

impl TimeScaleService for FixedTimeScale {
    fn capture_delta(&self) -> f64 {
        self.capture_delta
    }

    fn set_capture_delta(&mut self, seconds: f64) {
        self.capture_delta = seconds;
    }

    fn fixed_delta(&self) -> f64 {
        self.fixed_delta
    }

    fn set_fixed_delta(&mut self, seconds: f64) {
        self.fixed_delta = seconds;
    }
}
