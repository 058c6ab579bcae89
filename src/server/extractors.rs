//! Request extractors

use crate::core::error::ApiError;
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON request body whose rejections use the API error format
///
/// Axum's `Json` answers malformed bodies with a plain-text 422; this maps
/// every rejection to a 400 [`ApiError::BadRequest`].
///
/// ```rust,ignore
/// pub async fn create_customer(
///     JsonBody(payload): JsonBody<NewCustomer>,
/// ) -> Result<impl IntoResponse, ApiError> { ... }
/// ```
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(payload))
    }
}
