//! Gravatar existence probe over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::domain::errors::ProbeError;
use crate::domain::ports::ExistenceProbePort;

/// Public Gravatar host.
pub const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com";
const USER_AGENT: &str = concat!("avataurus/", env!("CARGO_PKG_VERSION"));

/// Upper bound on a single probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Probes Gravatar with `HEAD /avatar/<hash>?d=404`.
pub struct GravatarClient {
    client: Client,
    base_url: String,
}

impl GravatarClient {
    /// Creates new client against gravatar.com with the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ProbeError> {
        Self::with_config(GRAVATAR_BASE_URL, DEFAULT_PROBE_TIMEOUT)
    }

    /// Creates client with custom base URL and timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_config(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ProbeError::client_build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Address Gravatar answers with 404 when no avatar was uploaded.
    #[must_use]
    pub fn avatar_url(&self, hash: &str) -> String {
        format!("{}/avatar/{hash}?d=404", self.base_url)
    }

    async fn head(&self, url: &str) -> Result<StatusCode, ProbeError> {
        let response = self.client.head(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProbeError::Timeout
            } else if e.is_connect() {
                ProbeError::network("failed to connect to Gravatar")
            } else {
                ProbeError::network(e.to_string())
            }
        })?;

        Ok(response.status())
    }
}

#[async_trait]
impl ExistenceProbePort for GravatarClient {
    async fn probe(&self, hash: &str) -> bool {
        let url = self.avatar_url(hash);

        match self.head(&url).await {
            Ok(status) => {
                debug!(seed_hash = %hash, status = %status, "Gravatar responded");
                status == StatusCode::OK
            }
            Err(e) => {
                warn!(seed_hash = %hash, error = %e, "Gravatar probe failed");
                false
            }
        }
    }
}
