use crate::api::extract::ValidJson;
use crate::api::models::*;
use crate::storage::Recipe;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use tracing::info;

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Every recipe in stored order", body = [Recipe])
    )
)]
pub async fn list_recipes_handler(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.recipes.all().to_vec())
}

#[utoipa::path(
    get,
    path = "/recipe/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 422, description = "Invalid id", body = ErrorResponse)
    )
)]
pub async fn get_recipe_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Recipe>, AppError> {
    let Path(id) = path?;

    info!(id, "Fetching recipe");

    state
        .recipes
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Recipe with ID {} not found", id)))
}

/// Validates and echoes the payload. Nothing is added to the store.
#[utoipa::path(
    post,
    path = "/add-recipe",
    tag = "recipes",
    request_body = RecipeCreate,
    responses(
        (status = 201, description = "Recipe accepted", body = RecipeCreate),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn add_recipe_handler(
    ValidJson(payload): ValidJson<RecipeCreate>,
) -> (StatusCode, Json<RecipeCreate>) {
    info!(
        label = %payload.label,
        submitter_id = payload.submitter_id,
        "Recipe accepted (not persisted)"
    );

    (StatusCode::CREATED, Json(payload))
}
