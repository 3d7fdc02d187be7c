use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// User record as persisted in the storage document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,       // creation time in ms, rendered as a decimal string
    pub name: String,
    pub email: String,
    pub password: String, // bcrypt hash, never plaintext
    #[serde(default)]
    pub profile_picture_url: String,
}

impl User {
    /// Id for a newly created user. Derived from the creation time, so
    /// uniqueness is assumed rather than enforced.
    pub fn generate_id() -> String {
        let now = OffsetDateTime::now_utc();
        (now.unix_timestamp_nanos() / 1_000_000).to_string()
    }
}
