// ABOUTME: Fixed, read-only recipe catalog loaded once from an embedded JSON asset
// ABOUTME: Validates catalog invariants at construction and serves listing and id lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use crate::{
    constants::messages,
    errors::{AppError, AppResult},
};

use super::models::Recipe;

/// Built-in catalog shipped with the binary (single source of truth)
const EMBEDDED_CATALOG_JSON: &str = include_str!("catalog.json");

/// Immutable recipe table in definition order
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Load the catalog embedded in the binary
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded asset is malformed or violates a
    /// catalog invariant.
    pub fn embedded() -> AppResult<Self> {
        Self::from_json(EMBEDDED_CATALOG_JSON)
    }

    /// Parse a catalog from a JSON array of recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe recipes or the recipes
    /// violate a catalog invariant.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)
            .map_err(|e| AppError::config(format!("Malformed recipe catalog: {e}")).with_source(e))?;
        Self::from_recipes(recipes)
    }

    /// Build a catalog from already-parsed recipes, keeping their order
    ///
    /// # Errors
    ///
    /// Returns an error if an id repeats, a recipe has no ingredients, or a
    /// recipe declares zero servings.
    pub fn from_recipes(recipes: Vec<Recipe>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());

        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(AppError::config(format!(
                    "Duplicate recipe id '{}' in catalog",
                    recipe.id
                )));
            }
            if recipe.ingredients.is_empty() {
                return Err(AppError::config(format!(
                    "Recipe '{}' has no ingredients",
                    recipe.id
                )));
            }
            if recipe.servings == 0 {
                return Err(AppError::config(format!(
                    "Recipe '{}' must serve at least one person",
                    recipe.id
                )));
            }
        }

        Ok(Self { recipes })
    }

    /// Every recipe in definition order
    #[must_use]
    pub fn list_all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by exact id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no recipe carries `id`.
    pub fn find_by_id(&self, id: &str) -> AppResult<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| AppError::not_found(messages::RECIPE_RESOURCE))
    }

    /// Iterate recipes in definition order
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
