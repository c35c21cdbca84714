//! User repository trait defining the interface for credential persistence.
//!
//! This is the credential store contract: lookups by login identifier and by
//! id, plus the writes the services need. Password hashing happens before a
//! record reaches the repository.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, Role, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user whose username equals `identifier` or whose email equals
    /// its lowercase form
    async fn find_by_username_or_email(&self, identifier: &str) -> Result<Option<User>, DomainError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// All users ordered by id
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Insert a new user and return it with its assigned id
    ///
    /// # Errors
    /// * `ValidationError::DuplicateValue` when the username or email is taken
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Persist every field of an existing user
    ///
    /// # Errors
    /// * `DomainError::NotFound` when no user has this id
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Stamp the last login time, leaving every other column as stored
    ///
    /// # Errors
    /// * `DomainError::NotFound` when no user has this id
    async fn record_login(&self, id: i64) -> Result<User, DomainError>;

    /// Replace only the password hash
    ///
    /// # Errors
    /// * `DomainError::NotFound` when no user has this id
    async fn update_password_hash(&self, id: i64, password_hash: String) -> Result<User, DomainError>;

    /// Delete a user (and, in relational stores, their notes)
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Count users, optionally only those holding `role`
    async fn count(&self, role: Option<Role>) -> Result<u64, DomainError>;
}
