/// Convenience result type used across Cyclorama.
pub type CycloramaResult<T> = Result<T, CycloramaError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CycloramaError {
    /// Invalid user-provided layer or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors resolving, reading, or decoding frame assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Operation issued against an already unmounted controller.
    #[error("torn down: {0}")]
    TornDown(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CycloramaError {
    /// Build a [`CycloramaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CycloramaError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`CycloramaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`CycloramaError::TornDown`] value.
    pub fn torn_down(msg: impl Into<String>) -> Self {
        Self::TornDown(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
