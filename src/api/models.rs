use crate::schema::{FieldError, Fields, HttpUrl, Shape, ValidationError};
use crate::storage::{Food, Recipe, RecipeStore};
use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

/// Default cap on `/foods/{total}`
pub const DEFAULT_MAX_FOODS: i64 = 10_000;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<RecipeStore>,
    pub max_foods: i64,
}

impl AppState {
    pub fn new(recipes: RecipeStore) -> Self {
        Self {
            recipes: Arc::new(recipes),
            max_foods: DEFAULT_MAX_FOODS,
        }
    }

    pub fn with_max_foods(mut self, max_foods: i64) -> Self {
        self.max_foods = max_foods;
        self
    }
}

/// Fixed greeting
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub msg: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TestEntry {
    pub name: String,
    pub active: bool,
}

/// Recipe search parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of the recipe label
    pub keyword: Option<String>,
    /// Maximum number of results
    pub max_result: Option<usize>,
}

/// Response from search endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeSearchResults {
    pub results: Vec<Recipe>,
}

/// Request to add a recipe. Validated and echoed, never stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeCreate {
    pub label: String,
    pub source: String,
    #[schema(value_type = String)]
    pub url: HttpUrl,
    pub submitter_id: i64,
}

impl Shape for RecipeCreate {
    fn from_fields(fields: &mut Fields) -> Option<Self> {
        let label = fields.required("label");
        let source = fields.required("source");
        let url = fields.required("url");
        let submitter_id = fields.required("submitter_id");
        Some(Self {
            label: label?,
            source: source?,
            url: url?,
            submitter_id: submitter_id?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetFoodResponse {
    pub data: Vec<Food>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl Item {
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax.map(|tax| self.price + tax)
    }
}

impl Shape for Item {
    fn from_fields(fields: &mut Fields) -> Option<Self> {
        let name = fields.required("name");
        let description = fields.optional("description");
        let price = fields.required("price");
        let tax = fields.optional("tax");
        Some(Self {
            name: name?,
            description,
            price: price?,
            tax,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

/// Error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(ValidationError::single("path", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(ValidationError::single("query", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, details) = match self {
            AppError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.errors),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, Vec::new()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, Vec::new()),
            AppError::Internal(_) => {
                error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use serde_json::json;

    #[test]
    fn test_recipe_create_valid() {
        let payload: RecipeCreate = validate(json!({
            "label": "Toast",
            "source": "Kitchen",
            "url": "https://toast.example/recipe",
            "submitter_id": 12
        }))
        .unwrap();
        assert_eq!(payload.submitter_id, 12);
        assert_eq!(payload.url.as_str(), "https://toast.example/recipe");
    }

    #[test]
    fn test_recipe_create_bad_url() {
        let err = validate::<RecipeCreate>(json!({
            "label": "Toast",
            "source": "Kitchen",
            "url": "not-a-url",
            "submitter_id": 12
        }))
        .unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "url");
    }

    #[test]
    fn test_item_price_with_tax() {
        let item: Item = validate(json!({"name": "Foo", "price": 45.2, "tax": 3.5})).unwrap();
        assert_eq!(item.price_with_tax(), Some(48.7));

        let item: Item = validate(json!({"name": "Foo", "price": 45.2})).unwrap();
        assert_eq!(item.price_with_tax(), None);
    }

    #[test]
    fn test_item_integer_price() {
        let item: Item = validate(json!({"name": "Foo", "price": 10})).unwrap();
        assert_eq!(item.price, 10.0);
    }

    #[test]
    fn test_item_response_omits_price_with_tax() {
        let item: Item = validate(json!({"name": "Foo", "price": 1.5})).unwrap();
        let value = serde_json::to_value(ItemResponse {
            price_with_tax: item.price_with_tax(),
            item,
        })
        .unwrap();
        assert!(value.get("price_with_tax").is_none());
        assert!(value["tax"].is_null());
        assert!(value["description"].is_null());
    }
}
