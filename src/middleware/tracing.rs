// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Creates one span per HTTP request tagged with method, path, and request ID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{body::Body, extract::Request, http::Response};
use std::time::Duration;
use tracing::{field, Span};

use super::request_id::RequestId;

/// Create a tracing span for HTTP requests
#[must_use]
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = field::Empty,
        status_code = field::Empty,
        duration_ms = field::Empty,
    )
}

/// Span factory for `TraceLayer`, picking up the ID set by the request ID middleware
#[must_use]
pub fn make_request_span(request: &Request) -> Span {
    let span = create_request_span(request.method().as_str(), request.uri().path());

    if let Some(request_id) = request.extensions().get::<RequestId>() {
        span.record("request_id", request_id.as_str());
    }

    span
}

/// Response hook for `TraceLayer`, recording status and latency on the request span
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    span.record("status_code", response.status().as_u16());
    span.record("duration_ms", latency.as_millis() as u64);
    tracing::debug!(parent: span, "Response sent");
}
