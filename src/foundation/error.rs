/// Convenience result type used across the engine.
pub type PictographResult<T> = Result<T, PictographError>;

/// Top-level error taxonomy for the fallible edges of the engine.
///
/// Placement, mirroring and beta separation never fail; only configuration,
/// dataset loading and text parsing surface errors.
#[derive(thiserror::Error, Debug)]
pub enum PictographError {
    /// Invalid configuration or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Reference dataset could not be read or contained no usable rows.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Unrecognized enum tag or malformed text field.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PictographError {
    /// Build a [`PictographError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PictographError::Dataset`] value.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Build a [`PictographError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`PictographError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
