// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! HTTP surface of the service.
//!
//! Two endpoints accept JSON bodies:
//!
//! - `POST /api/match` runs a single algorithm
//! - `POST /api/compare` runs every algorithm and names the fastest
//!
//! Every response carries permissive CORS headers and `OPTIONS` preflight
//! requests are answered directly, so the browser client can be served from
//! any origin.

pub mod handlers;
pub mod types;

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

pub use handlers::{compare_handler, match_handler, AppState};
pub use types::{CompareEntry, CompareResponse, ErrorResponse, MatchResponse};

use crate::config::PonoConfig;
use crate::engine::MatchEngine;
use crate::error::PonoResult;

/// Path of the single-algorithm endpoint.
pub const MATCH_PATH: &str = "/api/match";

/// Path of the compare-all endpoint.
pub const COMPARE_PATH: &str = "/api/compare";

/// Builds the application router.
///
/// `max_body_bytes` caps the size of request bodies; larger bodies are
/// rejected with `413 Payload Too Large` before any JSON is parsed.
pub fn router(engine: MatchEngine, max_body_bytes: usize) -> Router {
    Router::new()
        .route(MATCH_PATH, post(match_handler))
        .route(COMPARE_PATH, post(compare_handler))
        .layer(middleware::from_fn(cors))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(AppState::new(engine))
}

/// Serves the API on `listener` until ctrl-c is received.
pub async fn serve_on(listener: TcpListener, app: Router) -> PonoResult<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

/// Binds the configured address and serves the API.
pub async fn serve(config: &PonoConfig) -> PonoResult<()> {
    let listener = TcpListener::bind(config.server.address).await?;
    info!(
        name = %config.server.name,
        address = %listener.local_addr()?,
        "HTTP server listening"
    );

    let engine = MatchEngine::new(&config.limits);
    serve_on(listener, router(engine, config.server.max_body_bytes)).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        add_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    add_cors_headers(response.headers_mut());
    response
}

fn add_cors_headers(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
}
