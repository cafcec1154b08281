use crate::api::item::handlers::create_item_handler;
use crate::api::models::AppState;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items/", post(create_item_handler))
}
