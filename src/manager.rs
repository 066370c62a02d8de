use crate::accumulation::registry::AccumulationRegistry;
use crate::denoise::{DenoiseChannel, DenoiseMode, DenoiseOutcome, DenoiseRequest, Denoiser};
use crate::foundation::core::{CameraId, FrameWeights};
use crate::foundation::error::SubframeResult;
use crate::foundation::math::recip_or_zero;
use crate::recording::config::RecordingConfig;
use crate::recording::session::RecordingSession;
use crate::time::TimeScaleService;

#[derive(Debug, Default)]
/// Owner of all accumulation state for one render pipeline.
///
/// One manager exists per pipeline instance; the host passes it by `&mut` to
/// every render-loop call. The loop drives, once per camera per sub-frame:
///
/// 1. [`prepare_new_sub_frame`](SubFrameManager::prepare_new_sub_frame)
/// 2. [`compute_frame_weights`](SubFrameManager::compute_frame_weights)
/// 3. external sample generation and blending
/// 4. [`mark_sample_accumulated`](SubFrameManager::mark_sample_accumulated)
/// 5. optionally [`run_denoise`](SubFrameManager::run_denoise) once
///    [`is_converged`](SubFrameManager::is_converged)
pub struct SubFrameManager {
    registry: AccumulationRegistry,
    session: RecordingSession,
}

impl SubFrameManager {
    /// Manager with an idle session and no tracked cameras.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracked per-camera state.
    pub fn registry(&self) -> &AccumulationRegistry {
        &self.registry
    }

    /// Mutable access to per-camera state, e.g. to record target dimensions
    /// or attach metadata the host checks for dirtiness.
    pub fn registry_mut(&mut self) -> &mut AccumulationRegistry {
        &mut self.registry
    }

    /// The recording session lifecycle.
    pub fn session(&self) -> &RecordingSession {
        &self.session
    }

    /// Whether a recording session is active.
    pub fn is_recording(&self) -> bool {
        self.session.is_recording()
    }

    /// Target number of samples per converged frame.
    pub fn sub_frame_count(&self) -> u32 {
        self.session.sub_frame_count()
    }

    /// Set the sample target for static accumulation (no session running).
    ///
    /// When lowering the target, call
    /// [`selective_reset`](SubFrameManager::selective_reset) afterwards to
    /// recover cameras that already converged past it.
    pub fn set_sub_frame_count(&mut self, count: u32) {
        self.session.set_sub_frame_count(count);
    }

    /// Restart every camera whose iteration count reached `threshold`.
    pub fn selective_reset(&mut self, threshold: u32) {
        self.registry.selective_reset(threshold);
    }

    /// Start a multi-frame recording session.
    ///
    /// Each final frame will be an accumulation of `config.sample_count`
    /// sub-frames. All previously tracked cameras are dropped; the external
    /// delta times are divided so the simulation advances per sub-frame.
    pub fn begin_recording(
        &mut self,
        config: &RecordingConfig,
        time: &mut dyn TimeScaleService,
    ) -> SubframeResult<()> {
        self.session.begin(config, time)?;
        self.registry.clear();
        Ok(())
    }

    /// Finish the recording session and restore the external delta times.
    ///
    /// Tracked cameras are retained; clear the registry explicitly on scene
    /// switches.
    pub fn end_recording(&mut self, time: &mut dyn TimeScaleService) {
        self.session.end(time);
    }

    /// Must be called once per rendered sub-frame, before weight computation.
    ///
    /// When the furthest camera has reached the sample target, the previous
    /// converged frame is complete and every camera restarts its cycle.
    pub fn prepare_new_sub_frame(&mut self) {
        if self.registry.max_iteration() >= self.session.sub_frame_count() {
            self.registry.reset_all();
        }
    }

    /// Blend coefficients for the current sub-frame of `camera`.
    ///
    /// Reads and advances the accumulated weight (state is created lazily for
    /// unknown cameras). The iteration count is *not* advanced here; callers
    /// do that through
    /// [`mark_sample_accumulated`](SubFrameManager::mark_sample_accumulated)
    /// after the sample actually landed, so discarded frames are not counted.
    pub fn compute_frame_weights(&mut self, camera: CameraId) -> FrameWeights {
        let count = self.session.sub_frame_count();
        let state = self.registry.get_or_create(camera);

        let t = if count > 0 {
            state.current_iteration() as f32 / count as f32
        } else {
            0.0
        };
        let current = self.session.sample_weight(t);

        let prior_total = state.accumulated_weight();
        if state.current_iteration() < count {
            state.add_weight(current);
        }

        FrameWeights {
            current,
            prior_total,
            inverse_total: recip_or_zero(state.accumulated_weight()),
        }
    }

    /// Count one successfully written sample for `camera`.
    ///
    /// No-op once the camera reached the sample target.
    pub fn mark_sample_accumulated(&mut self, camera: CameraId) {
        let count = self.session.sub_frame_count();
        let state = self.registry.get_or_create(camera);
        if state.current_iteration() < count {
            state.advance_iteration();
            if state.current_iteration() == count {
                tracing::debug!(camera = camera.0, samples = count, "camera converged");
            }
        }
    }

    /// Whether `camera` has integrated the configured number of samples.
    pub fn is_converged(&self, camera: CameraId) -> bool {
        let iteration = self
            .registry
            .get(camera)
            .map_or(0, |state| state.current_iteration());
        iteration >= self.session.sub_frame_count()
    }

    /// Attach a denoiser backend to `camera`, creating its state if needed.
    pub fn attach_denoiser(&mut self, camera: CameraId, denoiser: Box<dyn Denoiser>) {
        self.registry.get_or_create(camera).attach_denoiser(denoiser);
    }

    /// Sequence one denoise step for `camera`.
    ///
    /// Submits the request exactly once per accumulation cycle, and only when
    /// the camera is converged and a denoiser is attached; everything else is
    /// [`DenoiseOutcome::Skipped`], never an error. In [`DenoiseMode::Sync`]
    /// the submitting call blocks, fetches the result into `request.color`
    /// and returns [`DenoiseOutcome::Completed`]. In [`DenoiseMode::Async`]
    /// the submitting call returns [`DenoiseOutcome::Pending`] and later
    /// calls poll for completion before fetching.
    pub fn run_denoise(
        &mut self,
        camera: CameraId,
        request: &DenoiseRequest,
        mode: DenoiseMode,
    ) -> SubframeResult<DenoiseOutcome> {
        let count = self.session.sub_frame_count();
        let state = self.registry.get_or_create(camera);
        if state.current_iteration() < count {
            return Ok(DenoiseOutcome::Skipped);
        }

        if !state.was_denoised() {
            let Some(denoiser) = state.denoiser_mut() else {
                return Ok(DenoiseOutcome::Skipped);
            };
            denoiser.submit(DenoiseChannel::Color, request.color)?;
            if let Some(albedo) = request.albedo {
                denoiser.submit(DenoiseChannel::Albedo, albedo)?;
            }
            if let Some(normal) = request.normal {
                denoiser.submit(DenoiseChannel::Normal, normal)?;
            }
            if let Some(flow) = request.flow {
                denoiser.submit(DenoiseChannel::Flow, flow)?;
            }

            let outcome = match mode {
                DenoiseMode::Sync => {
                    denoiser.wait_for_completion()?;
                    denoiser.fetch_result(request.color)?;
                    DenoiseOutcome::Completed
                }
                DenoiseMode::Async => DenoiseOutcome::Pending,
            };
            state.mark_denoised();
            return Ok(outcome);
        }

        match mode {
            // The synchronous path completed in the submitting call.
            DenoiseMode::Sync => Ok(DenoiseOutcome::Skipped),
            DenoiseMode::Async => {
                let Some(denoiser) = state.denoiser_mut() else {
                    return Ok(DenoiseOutcome::Skipped);
                };
                if denoiser.query_completion() {
                    denoiser.fetch_result(request.color)?;
                    Ok(DenoiseOutcome::Completed)
                } else {
                    Ok(DenoiseOutcome::Pending)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/manager.rs"]
mod tests;
