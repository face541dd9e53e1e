//! HTTP delivery of reports
//!
//! Posts the JSON payload to the configured endpoint. `Checked` inspects
//! the response; `Opaque` only detects transport failures.

use super::error::SubmitError;
use super::traits::ReportSink;
use crate::report::SubmitPayload;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How the endpoint's response is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Non-2xx statuses fail with the server-provided message
    #[default]
    Checked,
    /// Response is ignored; success unless the request cannot be sent
    Opaque,
}

/// Error body returned by the endpoint on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Sink that posts reports to an HTTP endpoint
pub struct HttpReportSink {
    endpoint: Option<String>,
    mode: DeliveryMode,
    client: reqwest::Client,
}

impl HttpReportSink {
    pub fn new(endpoint: Option<String>, mode: DeliveryMode) -> Self {
        let endpoint = endpoint.filter(|e| !e.trim().is_empty());
        if endpoint.is_none() {
            debug!("Report endpoint not configured, submissions will fail");
        }

        Self {
            endpoint,
            mode,
            client: reqwest::Client::new(),
        }
    }

    async fn deliver_checked(&self, url: &str, payload: &SubmitPayload) -> Result<(), SubmitError> {
        let response = self.client.post(url).json(payload).send().await?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "Report accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        warn!(status = %status, body = %body, "Report endpoint rejected submission");

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn deliver_opaque(&self, url: &str, payload: &SubmitPayload) -> Result<(), SubmitError> {
        let body = serde_json::to_string(payload)?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await?;

        debug!(status = %response.status(), "Report sent, response not inspected");
        Ok(())
    }
}

#[async_trait]
impl ReportSink for HttpReportSink {
    async fn deliver(&self, payload: &SubmitPayload) -> Result<(), SubmitError> {
        let url = self.endpoint.as_deref().ok_or(SubmitError::NotConfigured)?;

        match self.mode {
            DeliveryMode::Checked => self.deliver_checked(url, payload).await,
            DeliveryMode::Opaque => self.deliver_opaque(url, payload).await,
        }
    }
}
