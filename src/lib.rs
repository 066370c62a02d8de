//! Subframe is the bookkeeping core of a multi-frame accumulation renderer.
//!
//! Progressive renderers (path tracing, ray-traced GI) reconstruct one
//! converged image from many noisy sub-frame samples. Subframe decides, per
//! camera and per frame, how much a new sample contributes to the accumulated
//! result and when accumulation is complete; the host renderer owns the
//! pixels, shaders and GPU work.
//!
//! # Frame loop overview
//!
//! 1. **Prepare**: [`SubFrameManager::prepare_new_sub_frame`] restarts the
//!    cycle at a converged frame boundary
//! 2. **Weigh**: [`SubFrameManager::compute_frame_weights`] yields the blend
//!    coefficients ([`FrameWeights`]) for the new sample
//! 3. **Blend** (external): the host folds the sample into its accumulation
//!    buffer, then calls [`SubFrameManager::mark_sample_accumulated`]
//! 4. **Denoise** (optional): [`SubFrameManager::run_denoise`] once
//!    [`SubFrameManager::is_converged`]
//!
//! During a recording session ([`SubFrameManager::begin_recording`]) samples
//! are additionally weighted by a virtual camera shutter ([`ShutterProfile`])
//! for motion-blur-correct temporal integration, and the external frame clock
//! is subdivided so the simulation advances per sub-frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No hidden state**: one explicitly owned [`SubFrameManager`] per
//!   pipeline, passed by `&mut` to every call; nothing global.
//! - **No IO, no GPU**: buffers, denoisers and the frame clock are reached
//!   through narrow traits ([`Denoiser`], [`TimeScaleService`]).
//! - **Single-threaded**: one render-loop thread drives the engine; callers
//!   serialize access if they render cameras concurrently.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod accumulation;
mod denoise;
mod foundation;
mod manager;
mod recording;
mod shutter;
mod time;

pub use accumulation::registry::AccumulationRegistry;
pub use accumulation::state::CameraState;
pub use denoise::{
    BufferHandle, DenoiseChannel, DenoiseMode, DenoiseOutcome, DenoiseRequest, Denoiser,
};
pub use foundation::core::{CameraId, FrameWeights};
pub use foundation::error::{SubframeError, SubframeResult};
pub use manager::SubFrameManager;
pub use recording::config::{RecordingConfig, ShutterShape};
pub use recording::session::RecordingSession;
pub use shutter::curve::ShutterCurve;
pub use shutter::profile::ShutterProfile;
pub use time::{FixedTimeScale, TimeScaleService};
