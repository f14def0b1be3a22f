// ABOUTME: Ingredient matching and ranking over the recipe catalog
// ABOUTME: Bidirectional case-insensitive containment, ranked by coverage then missing count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Matcher
//!
//! A recipe ingredient counts as available when it contains a query as a
//! case-insensitive substring, or the query contains it. The rule is loose on
//! purpose and must stay that way: `"egg"` matches `"eggs"`, `"eggplant"`
//! matches `"egg"`, and `"rice"` matches both `"basmati rice"` and `"ice"`.
//! Tightening it to exact or token matching changes which recipes rank first.
//!
//! Ranking is a stable sort on:
//! 1. match ratio (matched / total ingredients), descending
//! 2. missing ingredient count, ascending
//!
//! Remaining ties keep catalog order. Queries are expected lower-cased and
//! trimmed by the caller; the matcher only lowers them again for comparison.

use std::cmp::Ordering;

use crate::{
    constants::{limits, messages},
    errors::{AppError, AppResult},
};

use super::{
    catalog::Catalog,
    models::{MatchedRecipe, Recipe},
};

/// Containment match between one recipe ingredient and one query, either direction
#[must_use]
pub fn ingredient_matches(recipe_ingredient: &str, query: &str) -> bool {
    contains_either_way(&recipe_ingredient.to_lowercase(), &query.to_lowercase())
}

/// Split a recipe's ingredients into (matched, missing), preserving order
#[must_use]
pub fn partition_ingredients<'a, S: AsRef<str>>(
    recipe: &'a Recipe,
    queries: &[S],
) -> (Vec<&'a str>, Vec<&'a str>) {
    partition_lowered(recipe, &lower_queries(queries))
}

/// Ranks catalog recipes against the ingredients a visitor has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientMatcher {
    limit: usize,
}

impl IngredientMatcher {
    /// Create a matcher returning at most `limit` recipes
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Maximum number of recipes returned per search
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Find catalog recipes that use any of `queries`, best coverage first
    ///
    /// An empty result is a successful search with no overlap.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `queries` is empty.
    pub fn find_recipes<'a, S: AsRef<str>>(
        &self,
        catalog: &'a Catalog,
        queries: &[S],
    ) -> AppResult<Vec<MatchedRecipe<'a>>> {
        if queries.is_empty() {
            return Err(AppError::invalid_input(messages::INVALID_INGREDIENTS));
        }

        let lowered = lower_queries(queries);
        let mut matches: Vec<MatchedRecipe<'a>> = catalog
            .iter()
            .filter_map(|recipe| match_recipe(recipe, &lowered))
            .collect();

        // `sort_by` is stable, which keeps catalog order for full ties
        matches.sort_by(rank_order);
        matches.truncate(self.limit);

        Ok(matches)
    }
}

impl Default for IngredientMatcher {
    fn default() -> Self {
        Self::new(limits::MAX_RECIPE_RESULTS)
    }
}

/// Ordering for ranked results: higher ratio first, then fewer missing
#[must_use]
pub fn rank_order(a: &MatchedRecipe<'_>, b: &MatchedRecipe<'_>) -> Ordering {
    b.match_ratio()
        .total_cmp(&a.match_ratio())
        .then_with(|| a.missing_count().cmp(&b.missing_count()))
}

fn match_recipe<'a>(recipe: &'a Recipe, lowered_queries: &[String]) -> Option<MatchedRecipe<'a>> {
    let (matched_ingredients, missing_ingredients) = partition_lowered(recipe, lowered_queries);

    if matched_ingredients.is_empty() {
        return None;
    }

    Some(MatchedRecipe {
        recipe,
        matched_ingredients,
        missing_ingredients,
    })
}

fn partition_lowered<'a>(
    recipe: &'a Recipe,
    lowered_queries: &[String],
) -> (Vec<&'a str>, Vec<&'a str>) {
    recipe
        .ingredients
        .iter()
        .map(String::as_str)
        .partition(|ingredient| {
            let ingredient = ingredient.to_lowercase();
            lowered_queries
                .iter()
                .any(|query| contains_either_way(&ingredient, query))
        })
}

fn lower_queries<S: AsRef<str>>(queries: &[S]) -> Vec<String> {
    queries
        .iter()
        .map(|query| query.as_ref().to_lowercase())
        .collect()
}

// An empty string is a substring of everything, so an empty query matches all
fn contains_either_way(ingredient: &str, query: &str) -> bool {
    ingredient.contains(query) || query.contains(ingredient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_owned(),
            name: format!("Recipe {id}"),
            description: String::new(),
            image: String::new(),
            cook_time: 10,
            difficulty: "Easy".into(),
            servings: 1,
            category: "Test".into(),
            ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
            instructions: vec!["Cook.".into()],
        }
    }

    fn ids(results: &[MatchedRecipe<'_>]) -> Vec<String> {
        results.iter().map(|m| m.recipe.id.clone()).collect()
    }

    #[test]
    fn test_containment_is_bidirectional() {
        assert!(ingredient_matches("eggs", "egg"));
        assert!(ingredient_matches("egg", "eggplant"));
        assert!(ingredient_matches("basmati rice", "rice"));
        assert!(ingredient_matches("ice", "rice"));
        assert!(!ingredient_matches("tomato sauce", "tomatoes"));
    }

    #[test]
    fn test_containment_ignores_case() {
        assert!(ingredient_matches("Greek Yogurt", "yogurt"));
        assert!(ingredient_matches("salt", "SALT"));
    }

    #[test]
    fn test_empty_query_string_matches_everything() {
        assert!(ingredient_matches("saffron", ""));
    }

    #[test]
    fn test_partition_preserves_order() {
        let r = recipe("1", &["flour", "eggs", "milk", "sugar", "egg whites"]);
        let (matched, missing) = partition_ingredients(&r, &["egg", "sugar"]);
        assert_eq!(matched, vec!["eggs", "sugar", "egg whites"]);
        assert_eq!(missing, vec!["flour", "milk"]);
    }

    #[test]
    fn test_empty_query_list_is_invalid_input() {
        let catalog = Catalog::from_recipes(vec![recipe("1", &["salt"])]).unwrap();
        let no_queries: [&str; 0] = [];
        let error = IngredientMatcher::default()
            .find_recipes(&catalog, &no_queries)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_no_overlap_is_empty_success() {
        let catalog = Catalog::from_recipes(vec![recipe("1", &["salt"])]).unwrap();
        let results = IngredientMatcher::default()
            .find_recipes(&catalog, &["chocolate"])
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_ranked_by_ratio_then_missing_then_catalog_order() {
        let catalog = Catalog::from_recipes(vec![
            // 1/4 matched, 3 missing
            recipe("a", &["salt", "x1", "x2", "x3"]),
            // 2/8 matched (same ratio as "a"), 6 missing
            recipe("b", &["salt", "pepper", "y1", "y2", "y3", "y4", "y5", "y6"]),
            // 1/1 matched
            recipe("c", &["pepper"]),
            // 1/4 matched, 3 missing: full tie with "a"
            recipe("d", &["pepper", "z1", "z2", "z3"]),
            // no match
            recipe("e", &["kale"]),
        ])
        .unwrap();

        let results = IngredientMatcher::default()
            .find_recipes(&catalog, &["salt", "pepper"])
            .unwrap();

        assert_eq!(ids(&results), vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn test_results_truncated_to_limit() {
        let recipes = (0..12)
            .map(|n| recipe(&n.to_string(), &["onion", "garlic"]))
            .collect();
        let catalog = Catalog::from_recipes(recipes).unwrap();

        let results = IngredientMatcher::new(3)
            .find_recipes(&catalog, &["onion"])
            .unwrap();
        assert_eq!(ids(&results), vec!["0", "1", "2"]);

        let results = IngredientMatcher::default()
            .find_recipes(&catalog, &["onion"])
            .unwrap();
        assert_eq!(results.len(), limits::MAX_RECIPE_RESULTS);
    }
}
