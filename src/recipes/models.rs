// ABOUTME: Data models for catalog recipes and per-request ingredient match results
// ABOUTME: Defines Recipe and MatchedRecipe with the camelCase wire format the UI consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A catalog recipe, immutable once the catalog is loaded
///
/// Field order matches the wire format, so serialized objects keep the key
/// order the UI has always received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Stable identifier ("1".."20" for the embedded catalog)
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description shown on recipe cards
    pub description: String,
    /// Image URL for the card
    pub image: String,
    /// Total cooking time in minutes
    pub cook_time: u32,
    /// Free-text difficulty label ("Easy", "Medium", ...)
    pub difficulty: String,
    /// Number of servings, always positive
    pub servings: u32,
    /// Free-text grouping label; meal types and cuisines share this field
    pub category: String,
    /// Ingredient names in display order, never empty
    pub ingredients: Vec<String>,
    /// Preparation steps in order
    pub instructions: Vec<String>,
}

/// A recipe annotated with which of its ingredients the visitor has
///
/// Built fresh for every search and borrowed from the catalog, so producing
/// results never copies recipe data. `matched_ingredients` and
/// `missing_ingredients` partition `recipe.ingredients`, each keeping the
/// recipe order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRecipe<'a> {
    /// The catalog recipe, flattened into the response object
    #[serde(flatten)]
    pub recipe: &'a Recipe,
    /// Ingredients satisfied by at least one query
    pub matched_ingredients: Vec<&'a str>,
    /// Ingredients no query satisfied
    pub missing_ingredients: Vec<&'a str>,
}

impl MatchedRecipe<'_> {
    /// Number of matched ingredients
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_ingredients.len()
    }

    /// Number of missing ingredients
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing_ingredients.len()
    }

    /// Matched ingredient count divided by the recipe's total ingredient count
    ///
    /// Catalog validation guarantees a non-empty ingredient list.
    #[must_use]
    pub fn match_ratio(&self) -> f64 {
        self.matched_count() as f64 / self.recipe.ingredients.len() as f64
    }
}
