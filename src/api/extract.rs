use crate::api::models::AppError;
use crate::schema::{self, Shape, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// JSON body validated against shape `T` before the handler runs.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: Shape + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::single("body", rejection.body_text()))?;

        Ok(ValidJson(schema::validate(raw)?))
    }
}
