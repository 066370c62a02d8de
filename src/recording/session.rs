use crate::foundation::error::{SubframeError, SubframeResult};
use crate::recording::config::RecordingConfig;
use crate::shutter::profile::ShutterProfile;
use crate::time::TimeScaleService;

#[derive(Clone, Copy, Debug, PartialEq)]
struct SavedTimeScale {
    capture_delta: f64,
    fixed_delta: f64,
}

#[derive(Debug, Default)]
/// Lifecycle of a multi-frame capture: `Idle -> Recording -> Idle`.
///
/// While recording, the session owns the shutter profile and the sample
/// target, and it holds the external delta times it overrode at start so
/// [`end`](RecordingSession::end) can restore them. Exactly one saved
/// time-scale state exists at a time; nested sessions are rejected.
///
/// Outside a session the target sample count still drives static
/// accumulation, with every sample weighing `1.0`.
pub struct RecordingSession {
    sub_frame_count: u32,
    profile: ShutterProfile,
    recording: bool,
    saved: Option<SavedTimeScale>,
}

impl RecordingSession {
    /// Idle session with no sample target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Target number of samples per converged frame (`0` = unbounded
    /// single-sample mode, accumulation disabled).
    pub fn sub_frame_count(&self) -> u32 {
        self.sub_frame_count
    }

    /// Set the sample target outside a recording session.
    ///
    /// Hosts use this for static accumulation, e.g. when a quality setting
    /// dictates the sample count without a capture running.
    pub fn set_sub_frame_count(&mut self, count: u32) {
        self.sub_frame_count = count;
    }

    /// True between [`begin`](RecordingSession::begin) and
    /// [`end`](RecordingSession::end).
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Shutter profile of the active (or last) session.
    pub fn profile(&self) -> &ShutterProfile {
        &self.profile
    }

    #[tracing::instrument(skip(self, config, time))]
    /// Start a recording session.
    ///
    /// Validates the config, installs the shutter profile, and divides the
    /// external delta times by `sample_count` so the host simulation advances
    /// in `sample_count` sub-steps per final frame.
    ///
    /// Fails with [`SubframeError::Recording`] when a session is already
    /// active, and with [`SubframeError::Validation`] for a zero sample count
    /// or malformed shutter timings.
    pub fn begin(
        &mut self,
        config: &RecordingConfig,
        time: &mut dyn TimeScaleService,
    ) -> SubframeResult<()> {
        if self.recording {
            return Err(SubframeError::recording(
                "a recording session is already active; call end() first",
            ));
        }
        if config.sample_count == 0 {
            return Err(SubframeError::validation(
                "recording needs a sample count of at least 1",
            ));
        }

        // A single-sample capture has no exposure to spread samples over.
        let interval = if config.sample_count > 1 {
            config.shutter_interval
        } else {
            0.0
        };
        self.profile = config.build_profile(interval)?;
        self.sub_frame_count = config.sample_count;

        let saved = SavedTimeScale {
            capture_delta: time.capture_delta(),
            fixed_delta: time.fixed_delta(),
        };
        let steps = f64::from(config.sample_count);
        time.set_capture_delta(saved.capture_delta / steps);
        time.set_fixed_delta(saved.fixed_delta / steps);
        self.saved = Some(saved);

        self.recording = true;
        tracing::debug!(
            samples = config.sample_count,
            shutter_interval = interval,
            "recording started"
        );
        Ok(())
    }

    #[tracing::instrument(skip(self, time))]
    /// End the recording session, restoring the saved delta times.
    ///
    /// Idempotent: calling again restores the same saved values; calling
    /// before any `begin` leaves the clock untouched.
    pub fn end(&mut self, time: &mut dyn TimeScaleService) {
        if let Some(saved) = self.saved {
            time.set_capture_delta(saved.capture_delta);
            time.set_fixed_delta(saved.fixed_delta);
        }
        self.profile = ShutterProfile::default();
        if self.recording {
            tracing::debug!("recording ended");
        }
        self.recording = false;
    }

    /// Weight of a sample taken at normalized time `t` in the current cycle.
    ///
    /// `1.0` whenever no session is active (static accumulation path).
    pub fn sample_weight(&self, t: f32) -> f32 {
        if self.recording { self.profile.weight(t) } else { 1.0 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/recording/session.rs"]
mod tests;
