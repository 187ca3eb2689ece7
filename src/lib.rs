//! # reqecho - HTTP request echo endpoint
//!
//! Answers every request on one path with a structured JSON description of
//! that request and writes the same description to a log sink.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        EchoServer (hyper)                           │
//! │              /echo, /echo/  ──►  HyperSource                        │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                   │ RequestSource
//!                                   ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           EchoHandler                               │
//! │   describe() ──► EchoDocument ──► LogSink (one entry per request)   │
//! │                        │                                            │
//! │                        └──► pretty JSON response body               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reqecho::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = EchoConfig::new().port(8080).path("/echo");
//!     EchoServer::new(config).run().await
//! }
//! ```
//!
//! The describer can also be driven directly with an in-memory request:
//!
//! ```rust
//! use reqecho::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let mut request = RequestSnapshot::new("GET", "/echo").query("a=1&a=2");
//! let document = describe(&mut request).await.unwrap();
//! assert_eq!(document.query.unwrap().get("a"), Some(&ParamValue::from(vec!["1", "2"])));
//! # });
//! ```
//!
//! ## Document shape
//!
//! | key           | present when                                         |
//! |---------------|------------------------------------------------------|
//! | `method`      | always                                               |
//! | `path`        | always                                               |
//! | `protocol`    | always                                               |
//! | `queryString` | the query string is not blank                        |
//! | `query`       | the query string is not blank                        |
//! | `body`        | url-encoded or multipart content type                |
//! | `form`        | url-encoded or multipart content type                |
//! | `headers`     | always                                               |

pub mod echo;
pub mod http;
pub mod runtime;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::echo::{
        describe, EchoDocument, EchoError, EchoHandler, LogSink, MemoryLogSink, ParamMap,
        ParamValue, RequestSource, TracingLogSink,
    };
    pub use crate::http::{EchoResponse, Part, RequestSnapshot, StatusCode};
    pub use crate::runtime::{EchoConfig, EchoServer, HyperSource};
}

// Re-export for convenience
pub use echo::{describe, EchoDocument, EchoError, EchoHandler};
pub use http::{Part, RequestSnapshot};
pub use runtime::{EchoConfig, EchoServer};
