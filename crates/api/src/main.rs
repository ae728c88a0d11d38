//! Login stub service entry point using Axum.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{serve, Extension};
use tokio::{net::TcpListener, signal};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

use api::{routes, sink::PayloadSink};

/// Primary server structure.
pub struct LoginStubServer;

impl LoginStubServer {
    /// Build the router, attach middleware and serve until ctrl-c.
    pub async fn start() -> Result<()> {
        tracing_subscriber::fmt::init();

        // Build routes and attach middleware. The payload sink is passed in
        // explicitly rather than held as ambient global state.
        let mut app = routes::create_router()
            .layer(Extension(PayloadSink::stdout()))
            .layer(ConcurrencyLimitLayer::new(100));

        // Enable request logging if requested.
        if std::env::var("LOG_REQUESTS").is_ok() {
            app = app.layer(TraceLayer::new_for_http());
        }

        // Start HTTP server on the stub's historical default address.
        let addr: SocketAddr = "127.0.0.1:5000".parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("listening on {addr}");
        serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
}

#[tokio::main]
async fn main() -> Result<()> {
    LoginStubServer::start().await
}
