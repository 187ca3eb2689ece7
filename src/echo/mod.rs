//! The request describer: turns an incoming request into an [`EchoDocument`].

pub mod describer;
pub mod document;
pub mod error;
pub mod handler;
pub mod multipart;
pub mod params;
pub mod sink;
pub mod source;

pub use describer::describe;
pub use document::{EchoDocument, ParamMap, ParamValue};
pub use error::EchoError;
pub use handler::EchoHandler;
pub use sink::{LogSink, MemoryLogSink, TracingLogSink};
pub use source::RequestSource;
