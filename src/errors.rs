// ABOUTME: Unified error type, error codes, and HTTP error responses for the pantry API
// ABOUTME: Maps domain failures to status codes and the `{"error": ...}` body the UI expects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure that can reach the request boundary is an [`AppError`]. The
//! error carries an [`ErrorCode`] that decides the HTTP status, and a message
//! that becomes the single `error` field of the JSON body. No error is ever
//! returned alongside a partial success payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed or unusable request data
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required request field is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Request body exceeds the configured size limit
    #[serde(rename = "PAYLOAD_TOO_LARGE")]
    PayloadTooLarge = 3002,

    // Resource Management (4000-4999)
    /// The requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Transport (5000-5999)
    /// The request used an HTTP method the endpoint does not serve
    #[serde(rename = "METHOD_NOT_ALLOWED")]
    MethodNotAllowed = 5000,

    // Configuration (6000-6999)
    /// Configuration or embedded data failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => 400,
            Self::ResourceNotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::PayloadTooLarge => 413,
            Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::MethodNotAllowed => "The request method is not supported by this endpoint",
            Self::PayloadTooLarge => "The request body exceeds the size limit",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message, sent to the client verbatim
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required request field is missing
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Wrong HTTP method for the endpoint
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(ErrorCode::MethodNotAllowed, "Method not allowed")
    }

    /// Request body larger than the accepted limit
    #[must_use]
    pub fn payload_too_large(limit_bytes: usize) -> Self {
        Self::new(
            ErrorCode::PayloadTooLarge,
            format!("Request body exceeds {limit_bytes} bytes"),
        )
    }

    /// Invalid configuration or embedded data
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format: a single `error` message field
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Message describing what went wrong
    pub error: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = ?self.code, error = %self, "Request failed");
        } else {
            warn!(code = ?self.code, error = %self, "Request rejected");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::MethodNotAllowed.http_status(), 405);
        assert_eq!(ErrorCode::PayloadTooLarge.http_status(), 413);
        assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
    }

    #[test]
    fn test_not_found_message() {
        let error = AppError::not_found("Recipe");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Recipe not found");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::method_not_allowed());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Method not allowed" }));
    }

    #[test]
    fn test_payload_too_large_names_limit() {
        let error = AppError::payload_too_large(64);
        assert_eq!(error.http_status(), 413);
        assert_eq!(error.message, "Request body exceeds 64 bytes");
    }
}
