use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::jwt::JwtSettings;
use crate::models::user::{UserCredentials, UserRole, UserStatus};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,  // Subject (user id)
    pub username: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub exp: usize,   // Expiration time (as UTC timestamp)
}

impl Claims {
    /// Parse the user ID from the claims subject field.
    /// Returns None if the UUID is invalid.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

pub fn generate_token(
    user: &UserCredentials,
    jwt_settings: &JwtSettings,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + jwt_settings.token_lifetime();

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        role: user.role,
        status: user.status,
        exp: expires_at.timestamp() as usize,
    };

    encode(&Header::new(Algorithm::HS256), &claims, &jwt_settings.encoding_key())
}

pub fn decode_token(token: &str, jwt_settings: &JwtSettings) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(token, &jwt_settings.decoding_key(), &jwt_settings.validation())
        .map(|data| data.claims)
}
