//! Builds an [`EchoDocument`] from a [`RequestSource`].

use crate::echo::document::{EchoDocument, ParamMap};
use crate::echo::error::EchoError;
use crate::echo::params;
use crate::echo::source::RequestSource;
use crate::http::Part;

pub const APPLICATION_X_WWW_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Describe a request.
///
/// Only url-encoded and multipart bodies are read; for any other content type
/// the body is left untouched and neither `body` nor `form` is emitted.
pub async fn describe<R>(request: &mut R) -> Result<EchoDocument, EchoError>
where
    R: RequestSource + ?Sized,
{
    let mut document = EchoDocument {
        method: request.method().to_string(),
        path: request.path().to_string(),
        protocol: request.protocol().to_string(),
        query_string: None,
        query: None,
        body: None,
        form: None,
        headers: ParamMap::new(),
    };

    if let Some(query) = request.query_string().filter(|q| !q.trim().is_empty()) {
        document.query_string = Some(query.to_string());
        document.query = Some(params::decode(query));
    }

    let content_type = request.content_type().map(str::to_string);
    match content_type.as_deref() {
        // Exact match only: a charset parameter disables form decoding.
        Some(APPLICATION_X_WWW_FORM_URLENCODED) => {
            let bytes = request.read_body().await?;
            let body = String::from_utf8_lossy(&bytes).into_owned();
            document.form = Some(params::decode(&body));
            document.body = Some(body);
        }
        Some(ct) if ct.starts_with(MULTIPART_FORM_DATA) => {
            let parts = request.read_parts().await?;
            document.body = Some(describe_multipart_body(&parts));
            document.form = Some(
                parts
                    .iter()
                    .map(|part| (part.name.as_str(), describe_part(part)))
                    .collect(),
            );
        }
        _ => {}
    }

    document.headers = extract_headers(request.headers());

    Ok(document)
}

/// Summarize a multipart body as `<N parts>`.
pub fn describe_multipart_body(parts: &[Part]) -> String {
    format!("<{} parts>", parts.len())
}

/// Describe one multipart part.
///
/// Any part carrying a content type counts as a file, even a text field that
/// happens to declare one.
pub fn describe_part(part: &Part) -> String {
    match &part.content_type {
        None => String::from_utf8_lossy(&part.data).into_owned(),
        Some(_) => format!(
            "<file: {}, size: {} bytes>",
            part.file_name.as_deref().unwrap_or("null"),
            part.data.len()
        ),
    }
}

fn extract_headers(headers: Vec<(String, Vec<String>)>) -> ParamMap {
    let mut map = ParamMap::new();
    for (name, values) in headers {
        for value in values {
            map.append(name.as_str(), value);
        }
    }
    map
}
