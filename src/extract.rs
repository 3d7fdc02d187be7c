use axum::{
    async_trait,
    extract::{Form, FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Request body extractor accepting JSON as well as urlencoded forms.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::Validation(e.to_string()))?;
            return Ok(Self(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(Self(value))
    }
}
