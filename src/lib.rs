// ABOUTME: Main library entry point for the pantry recipe suggestion API
// ABOUTME: Matches a visitor's ingredients against the restaurant's recipe catalog over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Server
//!
//! Backend for the restaurant website's "what can I make" feature. A visitor
//! lists the ingredients they have; the server ranks the fixed recipe catalog
//! by how much of each recipe those ingredients cover and reports what is
//! still missing.
//!
//! ## Architecture
//!
//! - **Recipes**: embedded catalog, matching predicate, and ranking (pure, synchronous)
//! - **Services**: recipe operations plus request diagnostics
//! - **Routes**: thin axum handlers decoding form/query input
//! - **Middleware**: request IDs, trace spans, CORS
//! - **Config**: environment-driven server settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_server::config::environment::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pantry server configured with port: HTTP={}", config.http_port);
//!     pantry_server::server::run(config).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Request diagnostics side channel
pub mod diagnostics;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request tracing, request IDs, and CORS
pub mod middleware;

/// Recipe catalog, models, and ingredient matching
pub mod recipes;

/// Shared server resources
pub mod resources;

/// `HTTP` routes organized by domain
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Domain service layer
pub mod services;
