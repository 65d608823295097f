use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRole;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(deserialize_with = "crate::models::user::deserialize_secret_string")]
    pub password: SecretString,
}

/// Issued session. The role is echoed so clients can show the fixture admin screens.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub expires_at: DateTime<Utc>,
}
