/// Convenience result type used across cryptoreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Error taxonomy for timeline resolution, easing and composition data.
///
/// Every variant is a fail-fast configuration error: callers are expected to halt the affected
/// frame or composition rather than substitute a default.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// A negative frame counter, or a frame outside a composition's duration.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    /// An empty section table, a zero/negative duration, or a zero-sized subdivision.
    #[error("invalid section table: {0}")]
    InvalidTable(String),

    /// A zero-width or non-increasing interpolation input range.
    #[error("degenerate range: {0}")]
    DegenerateRange(String),

    /// Non-positive fps, mass or stiffness, negative damping, or non-finite spring parameters.
    #[error("invalid easing params: {0}")]
    InvalidEasingParams(String),

    /// Invalid composition-level data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::InvalidFrame`] value.
    pub fn invalid_frame(msg: impl Into<String>) -> Self {
        Self::InvalidFrame(msg.into())
    }

    /// Build a [`ReelError::InvalidTable`] value.
    pub fn invalid_table(msg: impl Into<String>) -> Self {
        Self::InvalidTable(msg.into())
    }

    /// Build a [`ReelError::DegenerateRange`] value.
    pub fn degenerate_range(msg: impl Into<String>) -> Self {
        Self::DegenerateRange(msg.into())
    }

    /// Build a [`ReelError::InvalidEasingParams`] value.
    pub fn invalid_easing_params(msg: impl Into<String>) -> Self {
        Self::InvalidEasingParams(msg.into())
    }

    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
