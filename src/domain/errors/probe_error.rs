//! Existence probe error types.

use thiserror::Error;

/// Probe error variants. Never surfaced past the probe adapter.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ProbeError {
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },

    #[error("probe timed out")]
    Timeout,

    #[error("network error during probe: {message}")]
    Network { message: String },
}

impl ProbeError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates client build error.
    #[must_use]
    pub fn client_build(message: impl Into<String>) -> Self {
        Self::ClientBuild {
            message: message.into(),
        }
    }
}
