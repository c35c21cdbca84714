//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, Role, User};
use crate::errors::{DomainError, ValidationError};

use super::trait_::UserRepository;

/// Mock user repository backed by a map keyed by id
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
    next_id: Arc<AtomicI64>,
    unavailable: Arc<AtomicBool>,
    read_only: Arc<AtomicBool>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            unavailable: Arc::new(AtomicBool::new(false)),
            read_only: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Store a fully formed user under its own id
    pub async fn insert(&self, user: User) {
        self.next_id.fetch_max(user.id + 1, Ordering::SeqCst);
        self.users.write().await.insert(user.id, user);
    }

    /// Make every call fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make writes fail while lookups keep working
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        self.check_available()?;
        if self.read_only.load(Ordering::SeqCst) {
            return Err(DomainError::internal("user store is read-only"));
        }
        Ok(())
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::internal("user store unavailable"));
        }
        Ok(())
    }

    fn check_unique(
        users: &BTreeMap<i64, User>,
        username: &str,
        email: &str,
        except_id: Option<i64>,
    ) -> Result<(), DomainError> {
        let is_other = |u: &&User| Some(u.id) != except_id;
        if users.values().filter(is_other).any(|u| u.username == username) {
            return Err(ValidationError::DuplicateValue {
                field: "username".to_string(),
            }
            .into());
        }
        if users
            .values()
            .filter(is_other)
            .any(|u| u.email.eq_ignore_ascii_case(email))
        {
            return Err(ValidationError::DuplicateValue {
                field: "email".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_username_or_email(&self, identifier: &str) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        let email = identifier.to_lowercase();
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.username == identifier || u.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        self.check_writable()?;
        let mut users = self.users.write().await;
        Self::check_unique(&users, &user.username, &user.email, None)?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = user.into_user(id);
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.check_writable()?;
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User"));
        }
        Self::check_unique(&users, &user.username, &user.email, Some(user.id))?;

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn record_login(&self, id: i64) -> Result<User, DomainError> {
        self.check_writable()?;
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or_else(|| DomainError::not_found("User"))?;
        user.update_last_login();
        Ok(user.clone())
    }

    async fn update_password_hash(&self, id: i64, password_hash: String) -> Result<User, DomainError> {
        self.check_writable()?;
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or_else(|| DomainError::not_found("User"))?;
        user.set_password_hash(password_hash);
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.check_writable()?;
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn count(&self, role: Option<Role>) -> Result<u64, DomainError> {
        self.check_available()?;
        let users = self.users.read().await;
        let count = users
            .values()
            .filter(|u| role.map_or(true, |r| u.role == r))
            .count();
        Ok(count as u64)
    }
}
