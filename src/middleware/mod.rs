// ABOUTME: HTTP middleware for request tracing, correlation IDs, and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and CORS setup for the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from server configuration
pub mod cors;
/// Request ID assignment and propagation
pub mod request_id;
/// Per-request tracing spans
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request ID middleware
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};

// Request tracing
pub use tracing::{create_request_span, make_request_span, record_response};
