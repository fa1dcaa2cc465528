use std::sync::Arc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::http_client::{HttpClient, HttpRequest};
use crate::OracleError;

/// Attaches credentials to every submit and unwraps the response envelope.
#[derive(Clone)]
pub struct AuthenticatedTransport {
    config: Arc<ClientConfig>,
    http_client: Arc<dyn HttpClient>,
}

impl AuthenticatedTransport {
    pub fn new(config: Arc<ClientConfig>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST `envelope` to `{base_url}/{path}` and return the response's
    /// `data` field.
    ///
    /// A 401 becomes [`OracleError::InvalidCredentials`]. Transport errors and
    /// every other non-2xx status are returned as they came.
    pub async fn submit(
        &self,
        path: &str,
        envelope: RequestEnvelope,
    ) -> Result<Value, OracleError> {
        let url = self.config.endpoint_url(path);
        let body = serde_json::to_string(&envelope)?;
        let request = HttpRequest::post(&url)
            .with_bearer_token(self.config.credentials().expose())
            .with_json_body(body);

        tracing::debug!(%url, fields = envelope.len(), "submitting oracle request");

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::debug!(%url, error = %error, "oracle transport failed");
            OracleError::from(error)
        })?;

        tracing::debug!(%url, status = response.status, "oracle responded");

        if response.is_unauthorized() {
            tracing::warn!(%url, "oracle rejected the api key");
            return Err(OracleError::InvalidCredentials(String::from(
                "API Key Provided is invalid",
            )));
        }

        if !response.is_success() {
            return Err(OracleError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let envelope: ResponseEnvelope = serde_json::from_str(&response.body)?;
        Ok(envelope.into_payload())
    }
}
