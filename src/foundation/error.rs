/// Convenience result type used across loopscan.
pub type LoopscanResult<T> = Result<T, LoopscanError>;

/// Top-level error taxonomy used by the analysis APIs.
///
/// Every failure here is a precondition violation reported immediately;
/// nothing in the pipeline is transient or retryable.
#[derive(thiserror::Error, Debug)]
pub enum LoopscanError {
    /// Invalid caller-provided parameter (e.g. a negative alpha).
    #[error("validation error: {0}")]
    Validation(String),

    /// Input frames do not share a single (width, height, channels) shape.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Too few frames for the dynamics smoothing step to produce output.
    #[error("insufficient frames: {0}")]
    InsufficientFrames(String),

    /// A frame index or range lies outside the video volume.
    #[error("index range: {0}")]
    IndexRange(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoopscanError {
    /// Build a [`LoopscanError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LoopscanError::ShapeMismatch`] value.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Build a [`LoopscanError::InsufficientFrames`] value.
    pub fn insufficient_frames(msg: impl Into<String>) -> Self {
        Self::InsufficientFrames(msg.into())
    }

    /// Build a [`LoopscanError::IndexRange`] value.
    pub fn index_range(msg: impl Into<String>) -> Self {
        Self::IndexRange(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
