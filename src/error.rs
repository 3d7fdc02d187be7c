use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// Errors surfaced to HTTP clients as a JSON `{"error": ...}` body.
///
/// Storage detail stays in the server log; clients only ever see the
/// generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn storage(message: &'static str, source: anyhow::Error) -> Self {
        Self::Storage { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Storage { message, source } => {
                error!(error = %source, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_bad_request() {
        let response = ApiError::Validation("Name, email, and password are required".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Name, email, and password are required" })
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = ApiError::NotFound("User not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "User not found" })
        );
    }

    #[tokio::test]
    async fn conflict_maps_to_409() {
        let response = ApiError::Conflict("Email already exists".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn storage_keeps_detail_out_of_the_response() {
        let response = ApiError::storage(
            "Failed to create user",
            anyhow::anyhow!("open users.json: permission denied"),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Failed to create user" }));
    }
}
