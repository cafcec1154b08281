use crate::api::food::handlers::foods_handler;
use crate::api::models::AppState;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/foods/{total}", get(foods_handler))
}
