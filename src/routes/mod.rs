// ABOUTME: Route module organization for the pantry HTTP endpoints
// ABOUTME: Provides route definitions by domain with thin handlers over the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the pantry server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and system status routes
pub mod health;
/// Ingredient search, recipe details, and catalog listing routes
pub mod recipes;

/// Health route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
