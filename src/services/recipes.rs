// ABOUTME: Recipe search, detail lookup, and listing business logic extracted from route handlers
// ABOUTME: Runs the ingredient matcher over the shared catalog and reports each step to diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::{
    diagnostics::{DiagnosticEvent, DiagnosticSink, EventDetail, Operation},
    errors::AppResult,
    recipes::{Catalog, IngredientMatcher, MatchedRecipe, Recipe},
};

/// Recipe operations shared by every route that serves them
///
/// Cheap to clone; the catalog and sink are shared.
#[derive(Clone)]
pub struct RecipeService {
    catalog: Arc<Catalog>,
    matcher: IngredientMatcher,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl RecipeService {
    /// Create a service over `catalog` reporting to `diagnostics`
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        matcher: IngredientMatcher,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            catalog,
            matcher,
            diagnostics,
        }
    }

    /// The catalog this service reads from
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Note that a request for `operation` arrived
    pub async fn record_request(&self, operation: Operation) {
        self.record(operation, EventDetail::RequestReceived).await;
    }

    /// Note that `operation` failed before or inside the service
    pub async fn record_failure(&self, operation: Operation, message: &str) {
        self.record(operation, EventDetail::Failed(message.to_owned()))
            .await;
    }

    /// Rank catalog recipes against the visitor's ingredients
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `ingredients` is empty.
    pub async fn find_recipes(&self, ingredients: &[String]) -> AppResult<Vec<MatchedRecipe<'_>>> {
        let operation = Operation::FindRecipes;
        self.record(
            operation,
            EventDetail::IngredientsReceived(ingredients.to_vec()),
        )
        .await;

        match self.matcher.find_recipes(&self.catalog, ingredients) {
            Ok(results) => {
                self.record(operation, EventDetail::RecipesFound(results.len()))
                    .await;
                Ok(results)
            }
            Err(e) => {
                self.record_failure(operation, &e.message).await;
                Err(e)
            }
        }
    }

    /// Full recipe for `id`, unmodified
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no recipe carries `id`.
    pub async fn recipe_details(&self, id: &str) -> AppResult<&Recipe> {
        let operation = Operation::RecipeDetails;

        match self.catalog.find_by_id(id) {
            Ok(recipe) => {
                self.record(operation, EventDetail::RecipeFound(recipe.name.clone()))
                    .await;
                Ok(recipe)
            }
            Err(e) => {
                self.record_failure(operation, &e.message).await;
                Err(e)
            }
        }
    }

    /// Every catalog recipe in definition order
    pub async fn list_recipes(&self) -> &[Recipe] {
        let recipes = self.catalog.list_all();
        self.record(Operation::ListRecipes, EventDetail::RecipesFound(recipes.len()))
            .await;
        recipes
    }

    async fn record(&self, operation: Operation, detail: EventDetail) {
        self.diagnostics
            .record(DiagnosticEvent::now(operation, detail))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<EventDetail>>,
    }

    impl RecordingSink {
        fn details(&self) -> Vec<EventDetail> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DiagnosticSink for RecordingSink {
        async fn record(&self, event: DiagnosticEvent) {
            self.events.lock().unwrap().push(event.detail);
        }
    }

    fn service_with(sink: Arc<RecordingSink>) -> RecipeService {
        RecipeService::new(
            Arc::new(Catalog::embedded().unwrap()),
            IngredientMatcher::default(),
            sink,
        )
    }

    #[tokio::test]
    async fn test_find_recipes_reports_payload_and_count() {
        let sink = Arc::new(RecordingSink::default());
        let service = service_with(Arc::clone(&sink));

        let ingredients = vec!["eggs".to_owned(), "bread".to_owned(), "avocado".to_owned()];
        let results = service.find_recipes(&ingredients).await.unwrap();

        assert_eq!(results[0].recipe.id, "1");
        assert_eq!(
            sink.details(),
            vec![
                EventDetail::IngredientsReceived(ingredients.clone()),
                EventDetail::RecipesFound(results.len()),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_recipes_reports_failure() {
        let sink = Arc::new(RecordingSink::default());
        let service = service_with(Arc::clone(&sink));

        let error = service.find_recipes(&[]).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(matches!(
            sink.details().last(),
            Some(EventDetail::Failed(message)) if message == "Invalid ingredients format"
        ));
    }

    #[tokio::test]
    async fn test_recipe_details_found_and_missing() {
        let sink = Arc::new(RecordingSink::default());
        let service = service_with(Arc::clone(&sink));

        let recipe = service.recipe_details("1").await.unwrap();
        assert_eq!(recipe.name, "Avocado Toast with Eggs");
        assert_eq!(recipe.instructions.len(), 6);

        let error = service.recipe_details("999").await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Recipe not found");

        assert_eq!(
            sink.details(),
            vec![
                EventDetail::RecipeFound("Avocado Toast with Eggs".into()),
                EventDetail::Failed("Recipe not found".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_recipes_returns_catalog_order() {
        let service = service_with(Arc::new(RecordingSink::default()));
        let recipes = service.list_recipes().await;
        assert_eq!(recipes.len(), 20);
        assert_eq!(recipes[0].id, "1");
        assert_eq!(recipes[19].id, "20");
    }
}
