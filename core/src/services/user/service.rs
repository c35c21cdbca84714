//! User management: the write side of the credential store

use std::sync::Arc;

use tm_shared::validation::{
    missing_fields, validators, MIN_PASSWORD_LENGTH, MIN_PHONE_LENGTH, MIN_USERNAME_LENGTH,
};

use crate::domain::entities::user::{Gender, NewUser, Role, User, UserProfile};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;

use super::types::{CreateUser, ProfileInput, UserChanges};

/// Validates user input, hashes passwords and persists accounts
pub struct UserService<U: UserRepository + ?Sized> {
    users: Arc<U>,
    hasher: PasswordHasher,
}

impl<U: UserRepository + ?Sized> UserService<U> {
    pub fn new(users: Arc<U>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    pub fn hasher(&self) -> PasswordHasher {
        self.hasher
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.users.list_all().await
    }

    /// A missing user is `DomainError::NotFound`
    pub async fn get(&self, id: i64) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    pub async fn count(&self, role: Option<Role>) -> DomainResult<u64> {
        self.users.count(role).await
    }

    /// Validates and stores a new account
    ///
    /// # Errors
    ///
    /// * `ValidationError::MissingFields` - username, email or password absent
    /// * `ValidationError::TooShort` / `InvalidEmail` / `InvalidRole` / `InvalidGender`
    /// * `ValidationError::DuplicateValue` - username or email taken
    pub async fn create(&self, input: CreateUser) -> DomainResult<User> {
        let missing = missing_fields(&[
            ("username", Some(input.username.as_str())),
            ("email", Some(input.email.as_str())),
            ("password", Some(input.password.as_str())),
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::missing(missing).into());
        }

        let username = validate_username(&input.username)?;
        let email = validate_email(&input.email)?;
        validate_password(&input.password)?;
        let role = match input.role.as_deref() {
            Some(role) => role.parse::<Role>()?,
            None => Role::default(),
        };
        let profile = build_profile(UserProfile::default(), input.profile)?;

        self.ensure_username_free(&username, None).await?;
        self.ensure_email_free(&email, None).await?;

        let password_hash = self.hasher.hash(&input.password)?;
        let mut new_user = NewUser::new(username, email, password_hash)
            .with_role(role)
            .with_profile(profile);
        if let Some(is_active) = input.is_active {
            new_user.is_active = is_active;
        }

        let user = self.users.create(new_user).await?;
        tracing::info!(user_id = user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Applies a partial update
    ///
    /// Who may change which field is decided by the caller.
    pub async fn update(&self, id: i64, changes: UserChanges) -> DomainResult<User> {
        let mut user = self.get(id).await?;

        if let Some(username) = changes.username.as_deref() {
            let username = validate_username(username)?;
            if username != user.username {
                self.ensure_username_free(&username, Some(id)).await?;
                user.username = username;
            }
        }
        if let Some(email) = changes.email.as_deref() {
            let email = validate_email(email)?;
            if email != user.email {
                self.ensure_email_free(&email, Some(id)).await?;
                user.email = email;
            }
        }
        if let Some(role) = changes.role.as_deref() {
            user.role = role.parse()?;
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }
        user.profile = build_profile(user.profile, changes.profile)?;
        if let Some(password) = changes.password.as_deref() {
            validate_password(password)?;
            user.password_hash = self.hasher.hash(password)?;
        }

        user.updated_at = chrono::Utc::now();
        self.users.update(user).await
    }

    /// Hashes `password` and stores it for the user; other columns are left as stored
    pub async fn set_password(&self, user_id: i64, password: &str) -> DomainResult<User> {
        validate_password(password)?;
        let hash = self.hasher.hash(password)?;
        self.users.update_password_hash(user_id, hash).await
    }

    /// Stamps the last login time
    pub async fn record_login(&self, user_id: i64) -> DomainResult<User> {
        self.users.record_login(user_id).await
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.users.delete(id).await? {
            return Err(DomainError::not_found("User"));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn ensure_username_free(&self, username: &str, except: Option<i64>) -> DomainResult<()> {
        match self.users.find_by_username(username).await? {
            Some(existing) if Some(existing.id) != except => Err(ValidationError::DuplicateValue {
                field: "Username".to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }

    async fn ensure_email_free(&self, email: &str, except: Option<i64>) -> DomainResult<()> {
        match self.users.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != except => Err(ValidationError::DuplicateValue {
                field: "Email".to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

fn validate_username(username: &str) -> Result<String, ValidationError> {
    if !validators::is_valid_username(username) {
        return Err(ValidationError::TooShort {
            field: "Username".to_string(),
            min: MIN_USERNAME_LENGTH,
        });
    }
    Ok(username.trim().to_string())
}

fn validate_email(email: &str) -> Result<String, ValidationError> {
    if !validators::is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.trim().to_lowercase())
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if !validators::is_valid_password(password) {
        return Err(ValidationError::TooShort {
            field: "Password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Merges given profile fields into `profile`; blank values clear a field
fn build_profile(mut profile: UserProfile, input: ProfileInput) -> Result<UserProfile, ValidationError> {
    if let Some(name) = input.name {
        profile.name = non_blank(name);
    }
    if let Some(last_name) = input.last_name {
        profile.last_name = non_blank(last_name);
    }
    if let Some(phone) = input.phone {
        let phone = non_blank(phone);
        if let Some(phone) = phone.as_deref() {
            if !validators::is_valid_phone(phone) {
                return Err(ValidationError::TooShort {
                    field: "Phone".to_string(),
                    min: MIN_PHONE_LENGTH,
                });
            }
        }
        profile.phone = phone;
    }
    if let Some(address) = input.address {
        profile.address = non_blank(address);
    }
    if let Some(gender) = input.gender {
        profile.gender = match non_blank(gender) {
            Some(gender) => Some(gender.parse::<Gender>()?),
            None => None,
        };
    }
    Ok(profile)
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
