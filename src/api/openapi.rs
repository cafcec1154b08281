//! OpenAPI document served at `/openapi.json`

use crate::api::models::*;
use crate::api::{food, item, recipe, search};
use crate::schema::FieldError;
use crate::storage::{Food, Recipe};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::root_handler,
        crate::api::test_handler,
        recipe::handlers::list_recipes_handler,
        recipe::handlers::get_recipe_handler,
        recipe::handlers::add_recipe_handler,
        search::handlers::search_handler,
        food::handlers::foods_handler,
        item::handlers::create_item_handler,
    ),
    components(schemas(
        Recipe,
        RecipeCreate,
        RecipeSearchResults,
        Food,
        GetFoodResponse,
        Item,
        ItemResponse,
        RootResponse,
        TestEntry,
        ErrorResponse,
        FieldError,
    )),
    tags(
        (name = "recipes", description = "Recipe lookup, search and submission"),
        (name = "foods", description = "Synthetic food records"),
        (name = "items", description = "Item pricing"),
        (name = "demo", description = "Greeting and demo endpoints"),
    ),
    info(title = "Recipe API")
)]
pub struct ApiDoc;

pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
