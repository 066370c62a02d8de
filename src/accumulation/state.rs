use crate::denoise::Denoiser;

/// Per-camera accumulation record.
///
/// Created lazily on first lookup, mutated every sub-frame by the weight
/// computation, and reset whenever a new accumulation cycle starts. The
/// metadata fields (`width`, `height`, the compositing flags and `accel_size`)
/// are carried for the host's dirtiness checks; the engine stores them without
/// interpreting them.
pub struct CameraState {
    /// Pixel width of the accumulation target.
    pub width: u32,
    /// Pixel height of the accumulation target.
    pub height: u32,
    /// Whether the host composites a sky for this camera.
    pub sky_enabled: bool,
    /// Whether the host composites fog for this camera.
    pub fog_enabled: bool,
    /// Opaque size metric of the host's acceleration structure.
    pub accel_size: u64,

    accumulated_weight: f32,
    current_iteration: u32,
    denoiser: Option<Box<dyn Denoiser>>,
    denoised: bool,
}

impl CameraState {
    /// Fresh state with zeroed accumulation and no denoiser.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            sky_enabled: false,
            fog_enabled: false,
            accel_size: 0,
            accumulated_weight: 0.0,
            current_iteration: 0,
            denoiser: None,
            denoised: false,
        }
    }

    /// Running sum of per-sample weights since the last reset.
    pub fn accumulated_weight(&self) -> f32 {
        self.accumulated_weight
    }

    /// Number of samples integrated since the last reset.
    pub fn current_iteration(&self) -> u32 {
        self.current_iteration
    }

    /// Whether the current accumulation cycle was already denoised.
    pub fn was_denoised(&self) -> bool {
        self.denoised
    }

    /// Whether a denoiser is attached.
    pub fn has_denoiser(&self) -> bool {
        self.denoiser.is_some()
    }

    /// Attach a denoiser backend, replacing any previous one.
    pub fn attach_denoiser(&mut self, denoiser: Box<dyn Denoiser>) {
        self.denoiser = Some(denoiser);
    }

    /// Detach and return the denoiser backend, if any.
    pub fn detach_denoiser(&mut self) -> Option<Box<dyn Denoiser>> {
        self.denoiser.take()
    }

    /// Restart accumulation: zero the weight sum and iteration count, clear
    /// the denoised flag and reset the attached denoiser.
    pub fn reset_iteration(&mut self) {
        self.accumulated_weight = 0.0;
        self.current_iteration = 0;
        self.denoised = false;
        if let Some(denoiser) = &mut self.denoiser {
            denoiser.reset();
        }
    }

    pub(crate) fn add_weight(&mut self, weight: f32) {
        self.accumulated_weight += weight;
    }

    pub(crate) fn advance_iteration(&mut self) {
        self.current_iteration += 1;
    }

    pub(crate) fn mark_denoised(&mut self) {
        self.denoised = true;
    }

    pub(crate) fn denoiser_mut(&mut self) -> Option<&mut (dyn Denoiser + 'static)> {
        self.denoiser.as_deref_mut()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CameraState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraState")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("sky_enabled", &self.sky_enabled)
            .field("fog_enabled", &self.fog_enabled)
            .field("accel_size", &self.accel_size)
            .field("accumulated_weight", &self.accumulated_weight)
            .field("current_iteration", &self.current_iteration)
            .field("denoiser", &self.denoiser.as_ref().map(|_| "attached"))
            .field("denoised", &self.denoised)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/accumulation/state.rs"]
mod tests;
