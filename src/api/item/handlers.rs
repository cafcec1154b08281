use crate::api::extract::ValidJson;
use crate::api::models::*;
use axum::Json;
use tracing::info;

#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = Item,
    responses(
        (status = 200, description = "Item with computed price", body = ItemResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_item_handler(ValidJson(item): ValidJson<Item>) -> Json<ItemResponse> {
    info!(name = %item.name, price = item.price, "Pricing item");

    Json(ItemResponse {
        price_with_tax: item.price_with_tax(),
        item,
    })
}
