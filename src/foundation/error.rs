/// Convenience result type used across Subframe.
pub type SubframeResult<T> = Result<T, SubframeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SubframeError {
    /// Invalid user-provided configuration or shutter data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Recording session lifecycle misuse.
    #[error("recording error: {0}")]
    Recording(String),

    /// Error reported by an attached denoiser backend.
    #[error("denoise error: {0}")]
    Denoise(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SubframeError {
    /// Build a [`SubframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SubframeError::Recording`] value.
    pub fn recording(msg: impl Into<String>) -> Self {
        Self::Recording(msg.into())
    }

    /// Build a [`SubframeError::Denoise`] value.
    pub fn denoise(msg: impl Into<String>) -> Self {
        Self::Denoise(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
