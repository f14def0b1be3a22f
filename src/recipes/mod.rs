// ABOUTME: Recipe domain module: catalog data, models, and ingredient matching
// ABOUTME: Pure, synchronous core with no I/O; shared read-only across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! The "what can I make" core. A visitor lists the ingredients they have; the
//! matcher scans the fixed catalog and returns the recipes that use them,
//! annotated with what is matched and what is still missing.
//!
//! ## Example Usage
//!
//! ```rust
//! use pantry_server::recipes::{Catalog, IngredientMatcher};
//!
//! let catalog = Catalog::embedded()?;
//! let results = IngredientMatcher::default().find_recipes(&catalog, &["eggs", "bread"])?;
//! assert!(results.iter().all(|r| !r.matched_ingredients.is_empty()));
//! # Ok::<(), pantry_server::errors::AppError>(())
//! ```

/// Embedded, read-only recipe catalog
pub mod catalog;
/// Matching predicate and ranking
pub mod matching;
/// Core data models for recipes and match results
pub mod models;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use matching::{ingredient_matches, partition_ingredients, IngredientMatcher};
pub use models::{MatchedRecipe, Recipe};
