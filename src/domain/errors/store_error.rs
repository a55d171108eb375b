//! Errors raised by host storage collaborators.

use thiserror::Error;

/// Storage error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize stored data: {message}")]
    Serialization { message: String },

    #[error("storage unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Creates serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Creates unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::serialization(value.to_string())
    }
}
