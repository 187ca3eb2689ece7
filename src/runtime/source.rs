//! [`RequestSource`] adapter over hyper requests.

use crate::echo::error::EchoError;
use crate::echo::multipart::parse_multipart_stream;
use crate::echo::source::{group_headers, RequestSource};
use crate::http::Part;
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Limited};
use hyper::body::{Body, Incoming};
use hyper::header::CONTENT_TYPE;
use hyper::{HeaderMap, Request};
use std::borrow::Cow;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A hyper request exposed to the describer.
///
/// The body stays unread until the describer asks for it and is capped at the
/// configured size.
pub struct HyperSource<B = Incoming> {
    method: String,
    path: String,
    protocol: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Option<Limited<B>>,
}

impl<B> HyperSource<B> {
    /// Wrap a request, limiting its body to `max_body_size` bytes.
    pub fn new(req: Request<B>, max_body_size: usize) -> Self {
        let (parts, body) = req.into_parts();
        Self {
            method: parts.method.as_str().to_string(),
            path: parts.uri.path().to_string(),
            protocol: format!("{:?}", parts.version),
            query: parts.uri.query().map(str::to_string),
            headers: parts.headers,
            body: Some(Limited::new(body, max_body_size)),
        }
    }
}

#[async_trait]
impl<B> RequestSource for HyperSource<B>
where
    B: Body<Data = Bytes> + Send + Unpin + 'static,
    B::Error: Into<BoxError>,
{
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn query_string(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    fn headers(&self) -> Vec<(String, Vec<String>)> {
        let pairs: Vec<(&str, Cow<'_, str>)> = self
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
            .collect();
        group_headers(pairs.iter().map(|(name, value)| (*name, &**value)))
    }

    async fn read_body(&mut self) -> Result<Bytes, EchoError> {
        let Some(body) = self.body.take() else {
            return Err(EchoError::new("Request body already consumed"));
        };
        let collected = body.collect().await.map_err(EchoError::from_body_error)?;
        Ok(collected.to_bytes())
    }

    async fn read_parts(&mut self) -> Result<Vec<Part>, EchoError> {
        let content_type = self.content_type().unwrap_or_default().to_string();
        let Some(body) = self.body.take() else {
            return Err(EchoError::new("Request body already consumed"));
        };
        parse_multipart_stream(&content_type, body.into_data_stream()).await
    }
}
