// ABOUTME: HTTP server assembly: router composition, middleware stack, and the serve loop
// ABOUTME: Binds the configured address and shuts down gracefully on Ctrl+C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Server
//!
//! [`build_router`] is the whole application as a `Router`, which is what
//! integration tests drive with `oneshot`. [`run`] binds it to a socket.
//!
//! Middleware order, outermost first:
//! 1. request ID assignment (`x-request-id`)
//! 2. per-request trace span
//! 3. CORS
//! 4. request timeout
//! 5. body size limit

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{
    config::environment::ServerConfig,
    middleware::{make_request_span, record_response, request_id_middleware, setup_cors},
    resources::ServerResources,
    routes::{HealthRoutes, RecipeRoutes},
};

/// Compose every route with the shared middleware stack
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(resources))
        .layer(DefaultBodyLimit::max(config.http.max_request_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(make_request_span)
                        .on_response(record_response),
                )
                .layer(setup_cors(&config))
                .layer(TimeoutLayer::new(config.http.request_timeout())),
        )
}

/// Serve the API until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if resources fail to build, the address cannot be bound,
/// or the server fails while running.
pub async fn run(config: ServerConfig) -> Result<()> {
    let address = config.bind_address()?;
    let resources = Arc::new(
        ServerResources::new(Arc::new(config)).context("Failed to build server resources")?,
    );
    let app = build_router(resources);

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(%address, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
