//! `multipart/form-data` parsing.

use crate::echo::error::EchoError;
use crate::http::Part;
use bytes::Bytes;
use futures_util::stream::{self, Stream};
use hyper::header::CONTENT_TYPE;
use std::convert::Infallible;
use tracing::debug;

/// Parse a multipart body arriving as a stream of chunks.
///
/// Parts are returned in arrival order, each fully buffered.
pub async fn parse_multipart_stream<S, O, E>(
    content_type: &str,
    stream: S,
) -> Result<Vec<Part>, EchoError>
where
    S: Stream<Item = Result<O, E>> + Send + 'static,
    O: Into<Bytes> + 'static,
    E: Into<Box<dyn std::error::Error + Send + Sync>> + 'static,
{
    let boundary = multer::parse_boundary(content_type)?;
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        // Raw header: an unparseable content type still marks the part as a file.
        let content_type = field
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
        let data = field.bytes().await?;

        debug!("Parsed multipart part '{}' ({} bytes)", name, data.len());
        parts.push(Part {
            name,
            file_name,
            content_type,
            data,
        });
    }

    Ok(parts)
}

/// Parse an already buffered multipart body.
pub async fn parse_multipart(content_type: &str, body: Bytes) -> Result<Vec<Part>, EchoError> {
    let chunks = stream::iter(vec![Ok::<Bytes, Infallible>(body)]);
    parse_multipart_stream(content_type, chunks).await
}
