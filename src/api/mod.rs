pub mod extract;
pub mod food;
pub mod item;
pub mod models;
pub mod openapi;
pub mod recipe;
pub mod search;

// Re-exports
pub use models::*;

use axum::{Json, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/test", get(test_handler))
        .route("/openapi.json", get(openapi::openapi_handler))
        .merge(recipe::routes())
        .merge(search::routes())
        .merge(food::routes())
        .merge(item::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// Root and demo handlers (simple, keep here)
#[utoipa::path(
    get,
    path = "/",
    tag = "demo",
    responses((status = 200, description = "Greeting", body = RootResponse))
)]
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        msg: "Hello, World!".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/test",
    tag = "demo",
    responses((status = 200, description = "Active demo entries", body = [TestEntry]))
)]
pub async fn test_handler() -> Json<Vec<TestEntry>> {
    let entries = [true, false, true].map(|active| TestEntry {
        name: "hafhis".to_string(),
        active,
    });

    Json(entries.into_iter().filter(|e| e.active).collect())
}
