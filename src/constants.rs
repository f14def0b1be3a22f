// ABOUTME: System-wide constants and environment-backed defaults for the pantry API
// ABOUTME: Contains service names, ports, limits, and the public error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name reported by logging and health endpoints
    pub const PANTRY_SERVER: &str = "pantry-server";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
}

/// Request and result limits
pub mod limits {
    /// Maximum number of ranked recipes returned by a single search
    pub const MAX_RECIPE_RESULTS: usize = 8;
    /// Default request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default maximum accepted request body size (64 KiB)
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
}

/// Request field names shared by the UI and the server
pub mod fields {
    /// Form field carrying the JSON-encoded ingredient list
    pub const INGREDIENTS: &str = "ingredients";
    /// Query parameter carrying the recipe identifier
    pub const RECIPE_ID: &str = "id";
}

/// Client-facing error messages
pub mod messages {
    /// Find-recipes called without the ingredients field
    pub const NO_INGREDIENTS: &str = "No ingredients provided";
    /// Ingredients field is not a non-empty JSON array of strings
    pub const INVALID_INGREDIENTS: &str = "Invalid ingredients format";
    /// Recipe-details called without an id
    pub const RECIPE_ID_REQUIRED: &str = "Recipe ID is required";
    /// Resource label used for unknown recipe ids
    pub const RECIPE_RESOURCE: &str = "Recipe";
}

/// Environment-based configuration
pub mod env_config {
    use std::env;

    use super::ports;

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| ports::DEFAULT_HOST.into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".into())
    }

    /// Get deployment environment name from environment or default
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
    }

    /// Get CORS allowed origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into())
    }

    /// Get the optional diagnostic log file path
    #[must_use]
    pub fn diagnostic_log_path() -> Option<String> {
        env::var("DIAGNOSTIC_LOG_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
    }
}
