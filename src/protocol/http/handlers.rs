// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Request handlers for the HTTP API.
//!
//! Domain failures (bad input, unknown algorithm, exceeded budget) are never
//! transport failures: they are answered with status 200 and an
//! [`ErrorResponse`] body. Only requests whose body cannot be read as JSON at
//! all are rejected with a 4xx status.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, instrument};

use super::types::{CompareResponse, ErrorResponse, MatchResponse};
use crate::engine::{CompareRequest, MatchEngine, MatchRequest};
use crate::error::{report_error, EngineError, ErrorContext};

/// Shared state of the HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The engine serving every request
    pub engine: Arc<MatchEngine>,
}

impl AppState {
    /// Wraps an engine for sharing between requests.
    pub fn new(engine: MatchEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

/// `POST /api/match`: runs one algorithm.
#[instrument(name = "api_match", skip_all)]
pub async fn match_handler(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.engine.run_single(request).await {
        Ok(result) => {
            debug!(
                algorithm = result.algorithm.id(),
                matches = result.match_count(),
                "match served"
            );
            Json(MatchResponse::from(&result)).into_response()
        }
        Err(err) => engine_error_response("http.match", err),
    }
}

/// `POST /api/compare`: runs every algorithm.
#[instrument(name = "api_compare", skip_all)]
pub async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.engine.compare_all(request).await {
        Ok(comparison) => {
            debug!(fastest = comparison.fastest.id(), "comparison served");
            Json(CompareResponse::from(&comparison)).into_response()
        }
        Err(err) => engine_error_response("http.compare", err),
    }
}

/// Maps an engine failure to a 200 error body.
///
/// Failures caused by the service rather than the request are also sent to
/// the error reporter.
fn engine_error_response(component: &str, err: EngineError) -> Response {
    let body = ErrorResponse::from(&err);
    if err.is_client_error() {
        debug!(error = %err, "request rejected");
    } else {
        report_error(ErrorContext::new(err, component).with_span_trace());
    }
    (StatusCode::OK, Json(body)).into_response()
}

/// Maps a body extraction failure.
///
/// Well-formed JSON of the wrong shape is a domain error; anything else keeps
/// the status chosen by the extractor.
fn rejection_response(rejection: JsonRejection) -> Response {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let err = EngineError::InvalidInput(err.body_text());
            debug!(error = %err, "request rejected");
            (StatusCode::OK, Json(ErrorResponse::from(&err))).into_response()
        }
        other => {
            debug!(status = %other.status(), error = %other.body_text(), "unreadable body");
            (other.status(), Json(ErrorResponse::new(other.body_text()))).into_response()
        }
    }
}
