//! Echo HTTP response type.

use bytes::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::HeaderMap;
use serde::Serialize;

pub use hyper::StatusCode;

/// Response produced by the echo handler before it is put on the wire.
#[derive(Debug, Clone)]
pub struct EchoResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl EchoResponse {
    fn with_body(status: StatusCode, content_type: &'static str, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// 200 with a pretty-printed JSON body.
    pub fn json_pretty<T: Serialize>(data: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec_pretty(data)?;
        Ok(Self::with_body(StatusCode::OK, "application/json", body))
    }

    /// 200 with a plain text body.
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_body(StatusCode::OK, "text/plain", content.into())
    }

    /// Plain text error response.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::with_body(status, "text/plain", message.into())
    }

    /// Parse the body as JSON.
    pub fn json_body<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
