// ABOUTME: Configuration management module for centralized server settings and parameters
// ABOUTME: Exposes the environment-driven server configuration used at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the pantry server
//!
//! All settings come from environment variables, read once at startup into a
//! [`ServerConfig`] that is shared read-only afterwards.

/// Environment and server configuration
pub mod environment;

// Re-export main configuration types from environment
pub use environment::{
    CorsConfig, Environment, HttpLimitsConfig, LogLevel, RecipeConfig, ServerConfig,
};
