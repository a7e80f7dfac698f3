use crate::assets::fetch::FetchError;

/// Convenience result type used across Admark.
pub type AdmarkResult<T> = Result<T, AdmarkError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only two stages abort a composition: loading the source image and
/// serializing the finished surface. Everything else (most notably the logo)
/// degrades gracefully and is reported through `tracing` instead.
#[derive(thiserror::Error, Debug)]
pub enum AdmarkError {
    /// Invalid user-provided options or canvas data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The base image could not be fetched or decoded. Fatal, no retry.
    #[error("source image load failed")]
    SourceLoad(#[source] FetchError),

    /// The flattened surface could not be encoded to PNG.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdmarkError {
    /// Build an [`AdmarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AdmarkError::Serialization`] value.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
