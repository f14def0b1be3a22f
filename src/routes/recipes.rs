// ABOUTME: Recipe route handlers for ingredient search, recipe details, and catalog listing
// ABOUTME: Decodes form and query input, delegates to RecipeService, and encodes JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! The website posts its ingredient list as a form field holding a JSON
//! array (`FormData` with `ingredients='["eggs","bread"]'`) and fetches
//! details with `?id=`. The legacy `/php/*.php` paths stay routable so the
//! existing front end works unchanged; the legacy details path answers any
//! method, as it always has.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{FromRequest, Multipart, Path, Query, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Form, Json, Router,
};

use serde_json::Value;

use crate::{
    constants::{fields, messages},
    diagnostics::Operation,
    errors::{AppError, AppResult},
    resources::ServerResources,
};

/// Recipe routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let find = || post(Self::handle_find_recipes).fallback(Self::reject_find_method);
        let details = get(Self::handle_recipe_details).fallback(Self::reject_details_method);

        Router::new()
            .route("/api/find-recipes", find())
            .route("/php/find-recipes.php", find())
            .route("/api/recipe-details", details)
            .route("/php/recipe-details.php", any(Self::handle_recipe_details))
            .route(
                "/api/recipes",
                get(Self::handle_list_recipes).fallback(Self::reject_list_method),
            )
            .route(
                "/api/recipes/:id",
                get(Self::handle_recipe_by_path).fallback(Self::reject_details_method),
            )
            .with_state(resources)
    }

    /// Handle ingredient search
    async fn handle_find_recipes(
        State(resources): State<Arc<ServerResources>>,
        request: Request,
    ) -> Result<Response, AppError> {
        let service = &resources.recipes;
        let operation = Operation::FindRecipes;
        service.record_request(operation).await;

        let limit_bytes = resources.config.http.max_request_body_bytes;
        let ingredients = match read_ingredients(request, limit_bytes).await {
            Ok(ingredients) => ingredients,
            Err(e) => {
                service.record_failure(operation, &e.message).await;
                return Err(e);
            }
        };

        let results = service.find_recipes(&ingredients).await?;
        Ok(Json(results).into_response())
    }

    /// Handle recipe details by `?id=`
    async fn handle_recipe_details(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Response, AppError> {
        let service = &resources.recipes;
        let operation = Operation::RecipeDetails;
        service.record_request(operation).await;

        let Some(id) = params.get(fields::RECIPE_ID) else {
            service
                .record_failure(operation, messages::RECIPE_ID_REQUIRED)
                .await;
            return Err(AppError::missing_field(messages::RECIPE_ID_REQUIRED));
        };

        let recipe = service.recipe_details(id).await?;
        Ok(Json(recipe).into_response())
    }

    /// Handle recipe details by path segment
    async fn handle_recipe_by_path(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let service = &resources.recipes;
        service.record_request(Operation::RecipeDetails).await;

        let recipe = service.recipe_details(&id).await?;
        Ok(Json(recipe).into_response())
    }

    /// Handle catalog listing
    async fn handle_list_recipes(State(resources): State<Arc<ServerResources>>) -> Response {
        let service = &resources.recipes;
        service.record_request(Operation::ListRecipes).await;

        Json(service.list_recipes().await).into_response()
    }

    async fn reject_find_method(State(resources): State<Arc<ServerResources>>) -> AppError {
        method_not_allowed(&resources, Operation::FindRecipes).await
    }

    async fn reject_details_method(State(resources): State<Arc<ServerResources>>) -> AppError {
        method_not_allowed(&resources, Operation::RecipeDetails).await
    }

    async fn reject_list_method(State(resources): State<Arc<ServerResources>>) -> AppError {
        method_not_allowed(&resources, Operation::ListRecipes).await
    }
}

/// Log a wrong-method request against its operation and build the 405
async fn method_not_allowed(resources: &ServerResources, operation: Operation) -> AppError {
    let error = AppError::method_not_allowed();
    let service = &resources.recipes;
    service.record_request(operation).await;
    service.record_failure(operation, &error.message).await;
    error
}

/// Pull the ingredient list out of a multipart or urlencoded form body
async fn read_ingredients(request: Request, limit_bytes: usize) -> AppResult<Vec<String>> {
    let rejected = |status: StatusCode| body_rejection(status, limit_bytes);

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let raw = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|rejection| rejected(rejection.status()))?;
        multipart_text_field(multipart, fields::INGREDIENTS, limit_bytes).await?
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(form) = Form::<HashMap<String, String>>::from_request(request, &())
            .await
            .map_err(|rejection| rejected(rejection.status()))?;
        form.get(fields::INGREDIENTS).cloned()
    } else {
        None
    };

    let raw = raw.ok_or_else(|| AppError::missing_field(messages::NO_INGREDIENTS))?;
    parse_ingredients(&raw)
}

/// An oversized body is reported as such; any other unreadable body counts as
/// a request without ingredients
fn body_rejection(status: StatusCode, limit_bytes: usize) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(limit_bytes)
    } else {
        AppError::missing_field(messages::NO_INGREDIENTS)
    }
}

async fn multipart_text_field(
    mut multipart: Multipart,
    name: &str,
    limit_bytes: usize,
) -> AppResult<Option<String>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| body_rejection(e.status(), limit_bytes))?
    {
        if field.name() == Some(name) {
            let value = field
                .text()
                .await
                .map_err(|e| body_rejection(e.status(), limit_bytes))?;
            return Ok(Some(value));
        }
    }

    Ok(None)
}

/// Decode the JSON-encoded ingredient list
///
/// The value must be a non-empty array of strings or numbers. Numbers are
/// compared by their decimal text, so `["eggs", 2]` searches for "eggs" and "2".
fn parse_ingredients(raw: &str) -> AppResult<Vec<String>> {
    let values: Vec<Value> = serde_json::from_str(raw)
        .map_err(|e| AppError::invalid_input(messages::INVALID_INGREDIENTS).with_source(e))?;

    if values.is_empty() {
        return Err(AppError::invalid_input(messages::INVALID_INGREDIENTS));
    }

    values
        .into_iter()
        .map(|value| match value {
            Value::String(ingredient) => Ok(ingredient),
            Value::Number(number) => Ok(number.to_string()),
            _ => Err(AppError::invalid_input(messages::INVALID_INGREDIENTS)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_ingredients_accepts_string_array() {
        assert_eq!(
            parse_ingredients(r#"["eggs", "Bread"]"#).unwrap(),
            vec!["eggs", "Bread"]
        );
    }

    #[test]
    fn test_parse_ingredients_accepts_numbers_as_text() {
        assert_eq!(
            parse_ingredients(r#"["eggs", 2, 1.5]"#).unwrap(),
            vec!["eggs", "2", "1.5"]
        );
    }

    #[test]
    fn test_parse_ingredients_rejects_bad_shapes() {
        for raw in [
            "[]",
            "\"eggs\"",
            "{\"a\":1}",
            "[null]",
            "[\"eggs\", true]",
            "[[\"eggs\"]]",
            "not json",
            "",
        ] {
            let error = parse_ingredients(raw).unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidInput, "input: {raw}");
            assert_eq!(error.message, "Invalid ingredients format");
        }
    }

    #[test]
    fn test_body_rejection_distinguishes_size_limit() {
        let too_large = body_rejection(StatusCode::PAYLOAD_TOO_LARGE, 64);
        assert_eq!(too_large.code, ErrorCode::PayloadTooLarge);

        let unreadable = body_rejection(StatusCode::BAD_REQUEST, 64);
        assert_eq!(unreadable.code, ErrorCode::MissingRequiredField);
        assert_eq!(unreadable.message, "No ingredients provided");
    }
}
