use crate::api::models::*;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::info;

#[utoipa::path(
    get,
    path = "/search",
    tag = "recipes",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching recipes", body = RecipeSearchResults),
        (status = 422, description = "Invalid query parameters", body = ErrorResponse)
    )
)]
pub async fn search_handler(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<RecipeSearchResults>, AppError> {
    let Query(params) = query?;

    info!(keyword = ?params.keyword, max_result = ?params.max_result, "Searching");

    let results = state
        .recipes
        .search(params.keyword.as_deref(), params.max_result);

    info!(found = results.len(), "Search complete");

    Ok(Json(RecipeSearchResults { results }))
}
