//! Echo server runtime.

mod config;
mod server;
mod source;

pub use config::EchoConfig;
pub use server::EchoServer;
pub use source::HyperSource;
