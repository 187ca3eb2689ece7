//! The request shape the describer consumes.

use crate::echo::error::EchoError;
use crate::echo::multipart::parse_multipart;
use crate::http::{Part, RequestSnapshot};
use async_trait::async_trait;
use bytes::Bytes;
use indexmap::IndexMap;

/// An already parsed HTTP request, as handed over by the hosting server.
///
/// Body and multipart accessors consume the underlying body; a describer
/// calls at most one of them, once.
#[async_trait]
pub trait RequestSource: Send {
    /// HTTP method, verbatim.
    fn method(&self) -> &str;

    /// Request path without the query string.
    fn path(&self) -> &str;

    /// Protocol string, e.g. `HTTP/1.1`.
    fn protocol(&self) -> &str;

    /// Raw query string, if any.
    fn query_string(&self) -> Option<&str>;

    /// Value of the `Content-Type` header, if any.
    fn content_type(&self) -> Option<&str>;

    /// Header names in arrival order, each with all of its values.
    fn headers(&self) -> Vec<(String, Vec<String>)>;

    /// Read the whole body.
    async fn read_body(&mut self) -> Result<Bytes, EchoError>;

    /// Read the multipart parts of the body.
    async fn read_parts(&mut self) -> Result<Vec<Part>, EchoError>;
}

/// Group `(name, value)` pairs by name, keeping first-seen name order.
pub fn group_headers<'a, I>(pairs: I) -> Vec<(String, Vec<String>)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
    for (name, value) in pairs {
        grouped
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }
    grouped.into_iter().collect()
}

#[async_trait]
impl RequestSource for RequestSnapshot {
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
        self.get_header("content-type")
    }

    fn headers(&self) -> Vec<(String, Vec<String>)> {
        group_headers(
            self.headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }

    async fn read_body(&mut self) -> Result<Bytes, EchoError> {
        Ok(self.body.clone().unwrap_or_default())
    }

    async fn read_parts(&mut self) -> Result<Vec<Part>, EchoError> {
        if let Some(parts) = &self.parts {
            return Ok(parts.clone());
        }
        let content_type = self.get_header("content-type").unwrap_or_default().to_string();
        let body = self.body.clone().unwrap_or_default();
        parse_multipart(&content_type, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_headers_keeps_order() {
        let grouped = group_headers([
            ("accept-encoding", "gzip"),
            ("host", "localhost"),
            ("accept-encoding", "br"),
        ]);
        assert_eq!(
            grouped,
            vec![
                (
                    "accept-encoding".to_string(),
                    vec!["gzip".to_string(), "br".to_string()]
                ),
                ("host".to_string(), vec!["localhost".to_string()]),
            ]
        );
    }

    #[test]
    fn test_snapshot_parses_parts_from_body() {
        let body = "--b\r\nContent-Disposition: form-data; name=\"x\"\r\n\r\n1\r\n--b--\r\n";
        let mut snapshot = RequestSnapshot::new("POST", "/echo")
            .content_type("multipart/form-data; boundary=b")
            .body(body);

        let parts = tokio_test::block_on(snapshot.read_parts()).unwrap();
        assert_eq!(parts, vec![Part::text("x", "1")]);
    }

    #[test]
    fn test_snapshot_prefers_explicit_parts() {
        let mut snapshot = RequestSnapshot::new("POST", "/echo")
            .content_type("multipart/form-data; boundary=b")
            .body("not multipart")
            .part(Part::text("y", "2"));

        let parts = tokio_test::block_on(snapshot.read_parts()).unwrap();
        assert_eq!(parts, vec![Part::text("y", "2")]);
        assert_eq!(
            RequestSource::content_type(&snapshot),
            Some("multipart/form-data; boundary=b")
        );
    }
}
