use crate::api::models::AppState;
use crate::api::recipe::handlers::{add_recipe_handler, get_recipe_handler, list_recipes_handler};
use axum::{
    Router,
    routing::{get, post},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes_handler))
        .route("/recipe/{id}", get(get_recipe_handler))
        .route("/add-recipe", post(add_recipe_handler))
}
