// ABOUTME: HTTP server assembly: route merging, middleware stack, and listener lifecycle
// ABOUTME: Builds the axum router and serves it until ctrl-c or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calorie API Server
//!
//! Middleware order, outermost first: CORS, request tracing span, request id.

use crate::{
    config::ServerConfig,
    errors::AppError,
    middleware::{create_request_span, request_id_middleware, setup_cors},
    routes::{CalorieRoutes, HealthRoutes},
};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the complete application router
#[must_use]
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .merge(CalorieRoutes::routes())
        .merge(HealthRoutes::routes())
        .fallback(handle_not_found)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(setup_cors(config))
}

async fn handle_not_found() -> AppError {
    AppError::not_found("Route")
}

/// Bind `host:port`, resolving hostnames as well as IP literals
///
/// # Errors
///
/// Returns an error if the host does not resolve or the port cannot be bound
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.http_port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.http_port))
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
/// while running
pub async fn run(config: &ServerConfig) -> Result<()> {
    let listener = bind(config).await?;
    let addr = listener.local_addr()?;

    info!("Server listening on http://{addr}");

    axum::serve(listener, build_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install ctrl-c handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received ctrl-c, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
