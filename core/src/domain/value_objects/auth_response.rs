use serde::{Deserialize, Serialize};

use crate::domain::entities::token::IssuedToken;
use crate::domain::entities::user::User;

/// Result of a successful login or registration
///
/// Carries the signed access token, its lifetime and the authenticated user
/// as stored after the operation (e.g. with `last_login_at` refreshed).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    /// Seconds until `access_token` expires
    pub expires_in: i64,
    pub user: User,
}

impl AuthResponse {
    pub fn new(token: IssuedToken, user: User) -> Self {
        Self {
            access_token: token.token,
            expires_in: token.expires_in,
            user,
        }
    }
}
