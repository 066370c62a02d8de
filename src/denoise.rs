use crate::foundation::error::SubframeResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Opaque handle to a host-owned image buffer.
///
/// The engine never dereferences the value; it only routes handles into
/// [`Denoiser`] calls in the right order.
pub struct BufferHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Image channels a denoiser consumes alongside the noisy color.
pub enum DenoiseChannel {
    /// The accumulated noisy color to be denoised.
    Color,
    /// Albedo AOV guide.
    Albedo,
    /// Normal AOV guide.
    Normal,
    /// Motion-vector guide for temporal denoising.
    Flow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Whether denoise completion is awaited in place or polled across frames.
pub enum DenoiseMode {
    /// Submit, block until done and fetch the result in a single step.
    #[default]
    Sync,
    /// Submit without blocking; later steps poll for completion.
    Async,
}

#[derive(Clone, Copy, Debug)]
/// Buffers submitted for one denoise cycle.
pub struct DenoiseRequest {
    /// Accumulated color; also the destination of the denoised result.
    pub color: BufferHandle,
    /// Optional albedo guide.
    pub albedo: Option<BufferHandle>,
    /// Optional normal guide.
    pub normal: Option<BufferHandle>,
    /// Optional motion-vector guide.
    pub flow: Option<BufferHandle>,
}

impl DenoiseRequest {
    /// Request denoising of `color` without any guide channels.
    pub fn color_only(color: BufferHandle) -> Self {
        Self {
            color,
            albedo: None,
            normal: None,
            flow: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Result of one denoise sequencing step.
pub enum DenoiseOutcome {
    /// Nothing to do: camera not converged, no denoiser attached, or the
    /// current cycle was already denoised.
    Skipped,
    /// An asynchronous request was submitted or is still in flight.
    Pending,
    /// The denoised result was fetched into the color buffer.
    Completed,
}

/// Host-provided denoiser backend attached to a camera.
///
/// The engine only sequences these calls based on convergence and a
/// once-per-cycle flag; it implements no denoising itself. Implementations are
/// free to back this with OIDN, OptiX or anything else that fits the contract.
pub trait Denoiser {
    /// Discard any in-flight work and clear internal history.
    ///
    /// Called whenever the owning camera's accumulation restarts.
    fn reset(&mut self);

    /// Hand one input channel to the backend for the current request.
    fn submit(&mut self, channel: DenoiseChannel, buffer: BufferHandle) -> SubframeResult<()>;

    /// Block until the submitted request finishes.
    fn wait_for_completion(&mut self) -> SubframeResult<()>;

    /// Non-blocking poll: whether the submitted request has finished.
    fn query_completion(&mut self) -> bool;

    /// Write the denoised result into `buffer`.
    fn fetch_result(&mut self, buffer: BufferHandle) -> SubframeResult<()>;
}
