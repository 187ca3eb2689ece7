//! In-memory HTTP request snapshot.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One named section of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Form field name.
    pub name: String,
    /// Submitted filename, if the part carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Part content type, if the part carried a `Content-Type` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Raw part content.
    pub data: Bytes,
}

impl Part {
    /// Create a plain text field.
    pub fn text(name: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: value.into(),
        }
    }

    /// Create a file part.
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file_name.into()),
            content_type: Some(content_type.into()),
            data: data.into(),
        }
    }

    /// Set the part content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// A fully buffered HTTP request.
///
/// Headers keep their arrival order; repeated calls to [`header`](Self::header)
/// with the same name add further values for that name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSnapshot {
    /// HTTP method, verbatim.
    pub method: String,
    /// Request path without the query string.
    pub path: String,
    /// Protocol string, e.g. `HTTP/1.1`.
    pub protocol: String,
    /// Raw query string, without the leading `?`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Header name and value pairs in arrival order.
    pub headers: Vec<(String, String)>,
    /// Request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Bytes>,
    /// Pre-parsed multipart parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

impl RequestSnapshot {
    /// Create a new snapshot speaking `HTTP/1.1`.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            protocol: "HTTP/1.1".to_string(),
            query: None,
            headers: Vec::new(),
            body: None,
            parts: None,
        }
    }

    /// Set the protocol string.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Set the raw query string.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Add a header value.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set the `Content-Type` header, replacing any previous one.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case("content-type"));
        self.header("Content-Type", content_type)
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a multipart part.
    pub fn part(mut self, part: Part) -> Self {
        self.parts.get_or_insert_with(Vec::new).push(part);
        self
    }

    /// Get the first value of a header, ignoring case.
    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }
}

impl Default for RequestSnapshot {
    fn default() -> Self {
        Self::new("GET", "/")
    }
}
