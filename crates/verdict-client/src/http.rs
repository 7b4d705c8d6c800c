//! HTTP transport for the classifier contract.

use std::time::Duration;

use async_trait::async_trait;
use phishguard_core_types::{PageContext, Verdict};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{verdict_from_status, ClassifierClient, ClientError};

/// Classifier endpoint configuration.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Endpoint receiving `POST {"url": ...}`.
    pub endpoint: String,

    /// Hard bound on one request, so a hung transport can never leave the
    /// gate pending forever.
    pub request_timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/analyze".to_string(),
            request_timeout: Duration::from_millis(5_000),
        }
    }
}

/// Analysis request body.
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
}

/// Analysis response body. Extra fields are ignored; a missing `status`
/// field is a malformed response and resolves `Unreachable`.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    status: String,
}

/// Classifier client over HTTP.
pub struct HttpClassifierClient {
    client: Client,
    config: ClassifierConfig,
}

impl HttpClassifierClient {
    pub fn new(config: ClassifierConfig) -> Result<Self, ClientError> {
        if config.endpoint.is_empty() {
            return Err(ClientError::InvalidConfig(
                "missing classifier endpoint".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| {
                ClientError::InvalidConfig(format!("failed to build HTTP client: {err}"))
            })?;
        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl ClassifierClient for HttpClassifierClient {
    async fn request_verdict(&self, ctx: &PageContext) -> Verdict {
        debug!(url = %ctx.url, endpoint = %self.config.endpoint, "requesting verdict");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&AnalyzeRequest { url: &ctx.url })
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(err) => {
                warn!(url = %ctx.url, error = %err, "classifier unreachable");
                return Verdict::unreachable(format!("request failed: {err}"));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            warn!(url = %ctx.url, http_status = %status, "classifier returned error status");
            return Verdict::unreachable(format!("classifier returned HTTP {status}"));
        }

        match response.json::<AnalyzeResponse>().await {
            Ok(body) => {
                let verdict = verdict_from_status(&body.status);
                debug!(url = %ctx.url, status = %body.status, verdict = verdict.name(), "verdict received");
                verdict
            }
            Err(err) => {
                warn!(url = %ctx.url, error = %err, "classifier response malformed");
                Verdict::unreachable(format!("malformed response: {err}"))
            }
        }
    }
}
