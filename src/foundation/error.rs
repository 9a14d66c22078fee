/// Convenience result type used across Glyphcast.
pub type GlyphcastResult<T> = Result<T, GlyphcastError>;

/// Top-level error taxonomy used by the pipeline APIs.
///
/// The steady-state conversion path never errors; these variants surface
/// invariant violations at construction seams (buffer length mismatches,
/// malformed JSON documents, undecodable source streams).
#[derive(thiserror::Error, Debug)]
pub enum GlyphcastError {
    /// Invalid caller-provided data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing an animation document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphcastError {
    /// Build a [`GlyphcastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphcastError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
