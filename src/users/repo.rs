//! Pure in-memory operations over the loaded user collection.

use crate::users::dto::UpdateUserRequest;
use crate::users::model::User;

pub fn find_by_id<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    users.iter().find(|u| u.id == id)
}

pub fn find_by_id_mut<'a>(users: &'a mut [User], id: &str) -> Option<&'a mut User> {
    users.iter_mut().find(|u| u.id == id)
}

/// Exact-match email lookup. `excluding_id` skips one user, which lets an
/// update keep its own email without reporting a conflict.
pub fn find_by_email<'a>(
    users: &'a [User],
    email: &str,
    excluding_id: Option<&str>,
) -> Option<&'a User> {
    users
        .iter()
        .filter(|u| excluding_id != Some(u.id.as_str()))
        .find(|u| u.email == email)
}

/// Append a user. The caller has already checked email uniqueness.
pub fn insert(users: &mut Vec<User>, user: User) {
    users.push(user);
}

/// Overwrite only the fields carried by `patch`. `name`, `email` and
/// `password` must be present and non-empty to apply; a present but empty
/// `profile_picture_url` is an explicit reset.
pub fn update_fields(user: &mut User, patch: UpdateUserRequest) {
    if let Some(name) = patch.name.filter(|v| !v.is_empty()) {
        user.name = name;
    }
    if let Some(email) = patch.email.filter(|v| !v.is_empty()) {
        user.email = email;
    }
    if let Some(password) = patch.password.filter(|v| !v.is_empty()) {
        user.password = password;
    }
    if let Some(url) = patch.profile_picture_url {
        user.profile_picture_url = url;
    }
}

pub fn remove(users: &mut Vec<User>, id: &str) -> Option<User> {
    let idx = users.iter().position(|u| u.id == id)?;
    Some(users.remove(idx))
}
