//! Trait abstraction for report delivery to enable mocking in tests

use super::error::SubmitError;
use crate::report::SubmitPayload;
use async_trait::async_trait;

/// Destination for submitted reports
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Deliver a payload; one request, no retries
    async fn deliver(&self, payload: &SubmitPayload) -> Result<(), SubmitError>;
}
