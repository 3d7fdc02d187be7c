//! HTTP handlers for the `/users` routes.
//!
//! Every response returns the full stored record, password hash included;
//! redaction is deliberately disabled (demo behavior).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    extract::JsonOrForm,
    state::AppState,
    users::{
        dto::{CreateUserRequest, DeleteResponse, UpdateUserRequest, UserQuery},
        model::User,
        password, repo,
    },
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/users", get(get_users))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
}

/// GET /users returns the whole collection; GET /users?id=X a single user.
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Response, ApiError> {
    let users = state.store.load().await;

    if let Some(id) = query.id.as_deref() {
        let user = repo::find_by_id(&users, id).ok_or_else(|| {
            warn!(%id, "user not found");
            ApiError::NotFound("User not found".into())
        })?;
        return Ok(Json(user.clone()).into_response());
    }

    Ok(Json(users).into_response())
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (Some(name), Some(email), Some(password)) = (
        payload.name.filter(|v| !v.is_empty()),
        payload.email.filter(|v| !v.is_empty()),
        payload.password.filter(|v| !v.is_empty()),
    ) else {
        warn!("user creation rejected, missing required fields");
        return Err(ApiError::Validation(
            "Name, email, and password are required".into(),
        ));
    };

    let mut users = state.store.load().await;

    if repo::find_by_email(&users, &email, None).is_some() {
        warn!(%email, "email already exists");
        return Err(ApiError::Conflict("Email already exists".into()));
    }

    let hashed = password::hash_password(&password)
        .map_err(|e| ApiError::storage("Failed to create user", e))?;

    let user = User {
        id: User::generate_id(),
        name,
        email,
        password: hashed,
        profile_picture_url: payload.profile_picture_url.unwrap_or_default(),
    };

    repo::insert(&mut users, user.clone());
    state
        .store
        .save(&users)
        .await
        .map_err(|e| ApiError::storage("Failed to create user", e))?;

    info!(user_id = %user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, patch))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(mut patch): JsonOrForm<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let mut users = state.store.load().await;

    // Unknown id wins over an email conflict.
    if repo::find_by_id(&users, &id).is_none() {
        warn!(%id, "user not found");
        return Err(ApiError::NotFound("User not found".into()));
    }

    if let Some(email) = patch.email.as_deref().filter(|v| !v.is_empty()) {
        if repo::find_by_email(&users, email, Some(id.as_str())).is_some() {
            warn!(%email, "email already exists");
            return Err(ApiError::Conflict("Email already exists".into()));
        }
    }

    if let Some(plain) = patch.password.take().filter(|v| !v.is_empty()) {
        patch.password = Some(
            password::hash_password(&plain)
                .map_err(|e| ApiError::storage("Failed to update user", e))?,
        );
    }

    let updated = match repo::find_by_id_mut(&mut users, &id) {
        Some(user) => {
            repo::update_fields(user, patch);
            user.clone()
        }
        None => return Err(ApiError::NotFound("User not found".into())),
    };

    state
        .store
        .save(&users)
        .await
        .map_err(|e| ApiError::storage("Failed to update user", e))?;

    info!(user_id = %updated.id, "user updated");
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut users = state.store.load().await;

    let Some(removed) = repo::remove(&mut users, &id) else {
        warn!(%id, "user not found");
        return Err(ApiError::NotFound("User not found".into()));
    };

    state
        .store
        .save(&users)
        .await
        .map_err(|e| ApiError::storage("Failed to delete user", e))?;

    info!(user_id = %removed.id, email = %removed.email, "user deleted");
    Ok(Json(DeleteResponse {
        message: "User deleted successfully".into(),
        user: removed,
    }))
}
