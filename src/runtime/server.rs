//! Echo HTTP server implementation.

use crate::echo::EchoHandler;
use crate::http::{EchoResponse, StatusCode};
use crate::runtime::{EchoConfig, HyperSource};
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

/// Echo server.
///
/// Answers the configured path, with or without a trailing slash, for any
/// method with a JSON description of the request.
pub struct EchoServer {
    /// Server configuration.
    config: Arc<EchoConfig>,
    /// Request handler.
    handler: EchoHandler,
}

impl EchoServer {
    /// Create a new echo server logging through `tracing`.
    pub fn new(config: EchoConfig) -> Self {
        Self::with_handler(config, EchoHandler::default())
    }

    /// Create a new echo server with a custom handler.
    pub fn with_handler(config: EchoConfig, handler: EchoHandler) -> Self {
        Self {
            config: Arc::new(config),
            handler,
        }
    }

    /// Bind to the configured address and serve forever.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serve connections from an already bound listener.
    pub async fn serve(
        self,
        listener: TcpListener,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            "Echo server listening on {} (path: {})",
            listener.local_addr()?,
            self.config.path
        );

        loop {
            let (stream, remote_addr) = listener.accept().await?;
            let io = TokioIo::new(stream);

            let handler = self.handler.clone();
            let config = self.config.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req| {
                    let handler = handler.clone();
                    let config = config.clone();
                    async move { handle_request(req, handler, config, remote_addr).await }
                });

                if let Err(err) = http1::Builder::new()
                    .serve_connection(io, service)
                    .await
                {
                    error!("Error serving connection: {:?}", err);
                }
            });
        }
    }
}

/// Handle an incoming HTTP request.
async fn handle_request(
    req: Request<Incoming>,
    handler: EchoHandler,
    config: Arc<EchoConfig>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let path = req.uri().path().to_string();
    let method = req.method().clone();

    debug!("Handling request: {} {} from {}", method, path, remote_addr);

    if config.enable_health && path == "/_health" {
        return Ok(build_response(EchoResponse::text("OK")));
    }

    if !config.is_echo_path(&path) {
        return Ok(build_response(EchoResponse::error(
            StatusCode::NOT_FOUND,
            format!("No route for {}", path),
        )));
    }

    let mut source = HyperSource::new(req, config.max_body_size);
    Ok(build_response(handler.respond(&mut source).await))
}

/// Build a hyper Response from EchoResponse.
fn build_response(echo_response: EchoResponse) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(echo_response.body));
    *response.status_mut() = echo_response.status;
    *response.headers_mut() = echo_response.headers;
    response
}
