use serde::{Deserialize, Serialize};

use crate::users::model::User;

/// Query string accepted by `GET /users`.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
}

/// Request body for user creation. Required fields are checked in the
/// handler so a missing field maps to the documented 400 message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile_picture_url: Option<String>,
}

/// Partial update for `PUT /users/:id`; omitted fields are left untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile_picture_url: Option<String>,
}

/// Response returned after a delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub user: User,
}
