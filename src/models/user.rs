use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public view of a user, as returned by the profile endpoint.
/// Never carries the password hash.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

/// Full user row, including the stored password hash. Internal to the
/// authentication handlers.
#[derive(Debug, FromRow)]
pub struct UserRecord {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}
