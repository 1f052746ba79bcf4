//! HTTP client for the legacy v1 API.
//!
//! Wraps `reqwest::Client` with endpoint resolution, the credential
//! overlay, timeout management, and uniform response capture. One HTTP
//! round trip per call; no retries.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use tumblr_core::config::{ClientConfig, Credentials};
use tumblr_core::error::{TumblrError, TumblrResult};

use crate::endpoint::Endpoints;
use crate::params::Params;
use crate::response::ApiResponse;

/// Client for a single account.
///
/// Cheap to clone; clones share the underlying connection pool. Every call
/// returns its response as an explicit value, so a clone per task is safe.
#[derive(Debug, Clone)]
pub struct TumblrClient {
    inner: Client,
    endpoints: Endpoints,
    credentials: Credentials,
}

impl TumblrClient {
    /// Create a new client from configuration.
    ///
    /// Fails when either credential field is missing or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> TumblrResult<Self> {
        let credentials = Credentials::from_config(config)?;

        let inner = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .connect_timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| TumblrError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            endpoints: Endpoints::from_config(config),
            credentials,
        })
    }

    /// The endpoint resolver this client routes through.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Execute a GET request, capturing whatever comes back.
    pub async fn get(&self, url: &str) -> TumblrResult<ApiResponse> {
        debug!("GET {url}");
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(Self::classify_error)?;
        Self::capture(response).await
    }

    /// Execute a form-encoded POST request, capturing whatever comes back.
    ///
    /// Parameter values are never logged; they carry credentials.
    pub async fn post(&self, url: &str, params: &Params) -> TumblrResult<ApiResponse> {
        debug!("POST {url} ({} params)", params.len());
        let response = self
            .inner
            .post(url)
            .form(params)
            .send()
            .await
            .map_err(Self::classify_error)?;
        Self::capture(response).await
    }

    /// Capture status and body unconditionally. A non-2xx status is an
    /// ordinary outcome here, not an error.
    async fn capture(response: reqwest::Response) -> TumblrResult<ApiResponse> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(Self::classify_error)?;
        Ok(ApiResponse { status, body })
    }

    /// Classify a reqwest error into a TumblrError variant.
    fn classify_error(e: reqwest::Error) -> TumblrError {
        if e.is_timeout() {
            TumblrError::Timeout(e.to_string())
        } else if e.is_connect() {
            TumblrError::Transport(format!("connection failed: {e}"))
        } else {
            TumblrError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_new_requires_email() {
        let config = ClientConfig::new("", "pw", "example");
        let err = TumblrClient::new(&config).unwrap_err();
        assert!(matches!(err, TumblrError::MissingCredential(field) if field == "email"));
    }

    #[test]
    fn test_new_requires_password() {
        let config = ClientConfig::new("a@b.c", "", "example");
        let err = TumblrClient::new(&config).unwrap_err();
        assert!(matches!(err, TumblrError::MissingCredential(field) if field == "password"));
    }

    #[test]
    fn test_endpoints_come_from_config() {
        let mut config = ClientConfig::new("a@b.c", "pw", "example");
        config.private_root = Some("http://127.0.0.1:7777".to_string());
        let client = TumblrClient::new(&config).unwrap();
        assert_eq!(
            client.endpoints().url_for(Action::Like, false),
            "http://127.0.0.1:7777/api/like"
        );
    }
}
