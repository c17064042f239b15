use crate::eval::error::EvalError;
use crate::grammar::generate::GenerationError;

/// Convenience result type used across randomart.
pub type RandomartResult<T> = Result<T, RandomartError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum RandomartError {
    /// Invalid grammar or builder input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid run configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Grammar expansion could not terminate.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Expression could not be reduced to a value.
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvalError),

    /// Pixel buffer could not be handed off to the image encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RandomartError {
    /// Build a [`RandomartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RandomartError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RandomartError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
