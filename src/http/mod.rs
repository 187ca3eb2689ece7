//! HTTP types shared by the echo handler and the server.

mod request;
mod response;

pub use request::{Part, RequestSnapshot};
pub use response::{EchoResponse, StatusCode};
