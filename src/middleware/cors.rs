// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the restaurant website
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::environment::ServerConfig;

/// Configure CORS settings for the pantry API
///
/// Configures cross-origin requests based on `CORS_ALLOWED_ORIGINS`.
/// Supports both wildcard ("*") and specific origin lists.
///
/// Only `GET`, `POST` and `OPTIONS` are served, and the only request header
/// the website sends is `Content-Type`.
///
/// # Examples
///
/// ```bash
/// # Allow all origins (default)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins
/// export CORS_ALLOWED_ORIGINS="https://restaurant.example.com,https://www.restaurant.example.com"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let origins = config.allowed_origins();

    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        if parsed.is_empty() {
            // Fallback to any if parsing failed
            AllowOrigin::any()
        } else {
            AllowOrigin::list(parsed)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
