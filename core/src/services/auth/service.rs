//! Main authentication service implementation

use std::sync::Arc;

use tm_shared::validation::missing_fields;

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;
use crate::services::user::{CreateUser, UserService};

use super::config::AuthServiceConfig;

/// Authentication service: login, registration and password changes
pub struct AuthService<U: UserRepository + ?Sized> {
    /// User repository for credential lookups
    users: Arc<U>,
    /// Account validation and persistence
    user_service: Arc<UserService<U>>,
    /// Token service for JWT management
    token_service: Arc<TokenService<U>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U: UserRepository + ?Sized> AuthService<U> {
    /// Create a new authentication service
    pub fn new(
        users: Arc<U>,
        user_service: Arc<UserService<U>>,
        token_service: Arc<TokenService<U>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users,
            user_service,
            token_service,
            config,
        }
    }

    /// Authenticates by username or email and password
    ///
    /// On success the user's last login is recorded and a token issued.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - Unknown identifier or wrong password
    /// * `AuthError::AccountDisabled` - Correct password on an inactive account
    pub async fn login(&self, identifier: Option<&str>, password: Option<&str>) -> DomainResult<AuthResponse> {
        let missing = missing_fields(&[("username", identifier), ("password", password)]);
        if !missing.is_empty() {
            return Err(ValidationError::missing(missing).into());
        }
        let identifier = identifier.unwrap_or_default().trim();
        let password = password.unwrap_or_default();

        let user = match self.users.find_by_username_or_email(identifier).await? {
            Some(user) => user,
            None => {
                tracing::warn!(identifier, "Login attempt for unknown user");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.user_service.hasher().verify(password, &user.password_hash) {
            tracing::warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            tracing::warn!(user_id = user.id, "Login attempt on disabled account");
            return Err(AuthError::AccountDisabled.into());
        }

        let token = self.token_service.issue_access_token(&user)?;
        let user = self.user_service.record_login(user.id).await?;

        tracing::info!(user_id = user.id, role = %user.role, "User logged in");
        Ok(AuthResponse::new(token, user))
    }

    /// Creates an account and signs a token for it
    pub async fn register(&self, input: CreateUser) -> DomainResult<AuthResponse> {
        if !self.config.allow_role_self_registration {
            if let Some(role) = input.role.as_deref() {
                if role.parse::<Role>()? != Role::Client {
                    return Err(ValidationError::BusinessRuleViolation {
                        rule: "Self-registration is limited to the client role".to_string(),
                    }
                    .into());
                }
            }
        }

        let user = self.user_service.create(input).await?;
        let token = self.token_service.issue_access_token(&user)?;
        Ok(AuthResponse::new(token, user))
    }

    /// Replaces the password of `user` after checking the current one
    pub async fn change_password(
        &self,
        user: User,
        current_password: Option<&str>,
        new_password: Option<&str>,
    ) -> DomainResult<User> {
        let missing = missing_fields(&[
            ("current_password", current_password),
            ("new_password", new_password),
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::missing(missing).into());
        }

        let current_password = current_password.unwrap_or_default();
        if !self.user_service.hasher().verify(current_password, &user.password_hash) {
            return Err(AuthError::IncorrectPassword.into());
        }

        let user = self
            .user_service
            .set_password(user.id, new_password.unwrap_or_default())
            .await?;
        tracing::info!(user_id = user.id, "Password changed");
        Ok(user)
    }
}
