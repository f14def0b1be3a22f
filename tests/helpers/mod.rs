// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Builds the application router over the embedded catalog with quiet diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod axum_test;

use std::sync::Arc;

use axum::Router;
use pantry_server::{
    config::environment::ServerConfig,
    diagnostics::{DiagnosticSink, NoopSink},
    resources::ServerResources,
    server::build_router,
};

/// Resources over the embedded catalog with diagnostics discarded
pub fn test_resources(config: ServerConfig) -> Arc<ServerResources> {
    test_resources_with_sink(config, Arc::new(NoopSink))
}

/// Resources over the embedded catalog reporting to `sink`
pub fn test_resources_with_sink(
    config: ServerConfig,
    sink: Arc<dyn DiagnosticSink>,
) -> Arc<ServerResources> {
    Arc::new(
        ServerResources::with_diagnostics(Arc::new(config), sink)
            .expect("embedded catalog must load"),
    )
}

/// Full application router with default configuration
pub fn test_app() -> Router {
    build_router(test_resources(ServerConfig::default()))
}
