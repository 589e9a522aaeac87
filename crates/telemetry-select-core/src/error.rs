//! Error type shared by the generator, the selection variants and the harness.

use thiserror::Error;

/// Everything that can go wrong in `telemetry-select-core`.
#[derive(Error, Debug)]
pub enum SelectError {
    /// A selection was asked to pick from an empty dataset.
    #[error("no elements: selection requires a non-empty dataset")]
    NoElements,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A variant name did not match any entry in [`crate::Variant::ALL`].
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SelectError {
    pub fn invalid_argument<T: std::fmt::Display>(msg: T) -> Self {
        SelectError::InvalidArgument(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SelectError>;
