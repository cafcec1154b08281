use crate::api::models::*;
use crate::storage::generate_foods;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::info;

#[utoipa::path(
    get,
    path = "/foods/{total}",
    tag = "foods",
    params(
        ("total" = i64, Path, description = "Number of records to generate")
    ),
    responses(
        (status = 200, description = "Generated foods", body = GetFoodResponse),
        (status = 400, description = "Total above the configured cap", body = ErrorResponse),
        (status = 422, description = "Invalid total", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn foods_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<GetFoodResponse>, AppError> {
    let Path(total) = path?;

    if total > state.max_foods {
        return Err(AppError::BadRequest(format!(
            "total must be at most {}, got {}",
            state.max_foods, total
        )));
    }

    info!(total, "Generating foods");

    let data = generate_foods(total)
        .map_err(|e| AppError::Internal(format!("Food generation failed: {:#}", e)))?;

    Ok(Json(GetFoodResponse { data }))
}
