// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{env_config, limits, ports, service_names};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational output (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Transport limits
    pub http: HttpLimitsConfig,
    /// Recipe search behavior
    pub recipes: RecipeConfig,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins: `*` or a comma-separated list
    pub allowed_origins: String,
}

/// Request timeout and body size limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpLimitsConfig {
    /// Seconds before an in-flight request is abandoned
    pub request_timeout_secs: u64,
    /// Largest accepted request body
    pub max_request_body_bytes: usize,
}

impl HttpLimitsConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Recipe search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Maximum ranked recipes per search
    pub max_results: usize,
    /// Append-only diagnostic log; tracing output when unset
    pub diagnostic_log_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: crate::constants::ports::DEFAULT_HOST.to_owned(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            http: HttpLimitsConfig {
                request_timeout_secs: limits::DEFAULT_REQUEST_TIMEOUT_SECS,
                max_request_body_bytes: limits::DEFAULT_MAX_REQUEST_BODY_BYTES,
            },
            recipes: RecipeConfig {
                max_results: limits::MAX_RECIPE_RESULTS,
                diagnostic_log_path: None,
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable fails to parse or the resulting
    /// configuration fails validation.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_config::host(),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(&env_config::environment()),
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
            http: HttpLimitsConfig {
                request_timeout_secs: env_var_or(
                    "REQUEST_TIMEOUT_SECS",
                    &limits::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS value")?,
                max_request_body_bytes: env_var_or(
                    "MAX_REQUEST_BODY_BYTES",
                    &limits::DEFAULT_MAX_REQUEST_BODY_BYTES.to_string(),
                )
                .parse()
                .context("Invalid MAX_REQUEST_BODY_BYTES value")?,
            },
            recipes: RecipeConfig {
                max_results: env_var_or(
                    "MAX_RECIPE_RESULTS",
                    &limits::MAX_RECIPE_RESULTS.to_string(),
                )
                .parse()
                .context("Invalid MAX_RECIPE_RESULTS value")?,
                diagnostic_log_path: env_config::diagnostic_log_path().map(PathBuf::from),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is zero or the origin list is empty.
    pub fn validate(&self) -> Result<()> {
        if self.recipes.max_results == 0 {
            return Err(anyhow::anyhow!("MAX_RECIPE_RESULTS must be at least 1"));
        }

        if self.http.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be at least 1"));
        }

        if self.http.max_request_body_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_REQUEST_BODY_BYTES must be at least 1"));
        }

        if self.allowed_origins().is_empty() {
            return Err(anyhow::anyhow!(
                "CORS_ALLOWED_ORIGINS must be '*' or at least one origin"
            ));
        }

        Ok(())
    }

    /// Socket address to bind
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address.
    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.http_port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.http_port))
    }

    /// Parsed CORS origins; `["*"]` means any origin
    #[must_use]
    pub fn allowed_origins(&self) -> Vec<String> {
        parse_origins(&self.cors.allowed_origins)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} Configuration:\n\
             - Environment: {}\n\
             - Bind: {}:{}\n\
             - Log Level: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Body: {} bytes\n\
             - Max Results: {}\n\
             - Diagnostic Log: {}",
            service_names::PANTRY_SERVER,
            self.environment,
            self.host,
            self.http_port,
            self.log_level,
            self.cors.allowed_origins,
            self.http.request_timeout_secs,
            self.http.max_request_body_bytes,
            self.recipes.max_results,
            self.recipes
                .diagnostic_log_path
                .as_ref()
                .map_or_else(|| "tracing".to_owned(), |p| p.display().to_string()),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
