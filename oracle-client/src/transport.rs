use async_trait::async_trait;
use tracing::error;

use crate::error::{OracleError, Result};

/// Seam between the client and the network.
///
/// Implementations return the raw response body, or `OracleError::Network`
/// for any transport failure. Callers never branch on the failure subtype
/// and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<String>;
}

/// Production transport over a shared reqwest client.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (timeouts, proxy) instead of the default.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, uri: &str) -> Result<String> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(network_error)?;

        response.text().await.map_err(network_error)
    }
}

/// Collapse every reqwest failure subtype into a single `Network` error,
/// keeping the original diagnostic message.
fn network_error(err: reqwest::Error) -> OracleError {
    error!("transport failure: {}", err);
    OracleError::Network(err.to_string())
}
