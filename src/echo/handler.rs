//! The echo handler: describe, log, respond.

use crate::echo::describer::describe;
use crate::echo::document::EchoDocument;
use crate::echo::error::EchoError;
use crate::echo::sink::{LogSink, TracingLogSink};
use crate::echo::source::RequestSource;
use crate::http::EchoResponse;
use std::sync::Arc;
use tracing::warn;

/// Describes requests and writes each description to a [`LogSink`].
#[derive(Clone)]
pub struct EchoHandler {
    sink: Arc<dyn LogSink>,
}

impl EchoHandler {
    /// Create a handler writing to the given sink.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Describe the request and log the description.
    ///
    /// Read failures are returned; a failure to render the log entry is only
    /// reported as a warning.
    pub async fn echo<R>(&self, request: &mut R) -> Result<EchoDocument, EchoError>
    where
        R: RequestSource + ?Sized,
    {
        let document = describe(request).await?;
        self.log_document(&document);
        Ok(document)
    }

    /// Describe the request and render the HTTP response.
    pub async fn respond<R>(&self, request: &mut R) -> EchoResponse
    where
        R: RequestSource + ?Sized,
    {
        let document = match self.echo(request).await {
            Ok(document) => document,
            Err(e) => {
                warn!("Failed to describe request: {}", e);
                return e.into();
            }
        };

        EchoResponse::json_pretty(&document).unwrap_or_else(|e| EchoError::from(e).into())
    }

    fn log_document(&self, document: &EchoDocument) {
        match document.to_pretty_json() {
            Ok(entry) => self.sink.write_entry(&entry),
            Err(e) => warn!("Failed to serialize request details: {}", e),
        }
    }
}

impl Default for EchoHandler {
    fn default() -> Self {
        Self::new(Arc::new(TracingLogSink))
    }
}

impl std::fmt::Debug for EchoHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EchoHandler").finish_non_exhaustive()
    }
}
