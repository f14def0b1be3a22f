// ABOUTME: Shared server resources built once at startup and handed to every route
// ABOUTME: Holds the configuration and the recipe service over the embedded catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::info;

use crate::{
    config::environment::ServerConfig,
    diagnostics::{self, DiagnosticSink},
    errors::AppResult,
    recipes::{Catalog, IngredientMatcher},
    services::RecipeService,
};

/// Centralized resource container shared across handlers via `Arc`
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Recipe search and lookup
    pub recipes: RecipeService,
}

impl ServerResources {
    /// Build resources from configuration, loading the embedded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog fails validation.
    pub fn new(config: Arc<ServerConfig>) -> AppResult<Self> {
        let sink = diagnostics::sink_for_path(config.recipes.diagnostic_log_path.as_deref());
        Self::with_diagnostics(config, sink)
    }

    /// Build resources with an explicit diagnostics sink
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog fails validation.
    pub fn with_diagnostics(
        config: Arc<ServerConfig>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> AppResult<Self> {
        let catalog = Arc::new(Catalog::embedded()?);
        info!(recipes = catalog.len(), "Recipe catalog loaded");

        let matcher = IngredientMatcher::new(config.recipes.max_results);
        Ok(Self {
            recipes: RecipeService::new(catalog, matcher, diagnostics),
            config,
        })
    }
}
