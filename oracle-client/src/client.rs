use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{OracleError, Result},
    query::Query,
    request::build_uri,
    response::{Response, classify},
    transport::{HttpTransport, Transport},
};

/// Client holding the API key and the transport used for every lookup.
///
/// Queries are independent of each other; the client holds no per-query
/// state and can be shared freely across tasks.
pub struct OracleClient {
    api_key: String,
    transport: Arc<dyn Transport>,
}

impl OracleClient {
    /// Client with the production HTTP transport.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, Arc::new(HttpTransport::new()))
    }

    /// Client with an injected transport (tests, custom reqwest config).
    pub fn with_transport(api_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_key: api_key.into(),
            transport,
        }
    }

    /// Look up the shortest connection between two names.
    ///
    /// Validation failures come back as `InvalidQuery` before anything is
    /// sent; transport failures as `Network`. The response body itself
    /// always classifies, worst case to `Response::Unknown`.
    pub async fn find_connections(&self, from: &str, to: &str) -> Result<Response> {
        let query = Query::new(from, to, &self.api_key);
        let errors = query.validate();
        if !errors.is_empty() {
            return Err(OracleError::InvalidQuery(errors));
        }

        let uri = build_uri(&query);
        debug!(from, to, "fetching connection");
        let raw = self.transport.fetch(&uri).await?;
        Ok(classify(&raw))
    }
}
