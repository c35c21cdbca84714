use serde::{Deserialize, Serialize};
use validator::Validate;

use tm_core::domain::value_objects::{AuthResponse, PermissionSummary};

use super::user::UserSummary;

/// Body of `POST /api/auth/login`; `username` may also be an email
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(max = 120))]
    pub username: Option<String>,
    #[validate(length(max = 128))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    #[validate(length(max = 128))]
    pub new_password: Option<String>,
}

/// Issued token with its lifetime in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: UserSummary,
}

impl From<AuthResponse> for TokenResponse {
    fn from(response: AuthResponse) -> Self {
        Self {
            user: UserSummary::from(&response.user),
            token: response.access_token,
            expires_in: response.expires_in,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,
    pub user: UserSummary,
    pub permissions: PermissionSummary,
}
