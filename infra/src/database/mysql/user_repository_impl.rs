//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};

use tm_core::domain::entities::user::{Gender, NewUser, Role, User, UserProfile};
use tm_core::errors::DomainError;
use tm_core::repositories::UserRepository;

use super::{query_error, write_error};

const USER_COLUMNS: &str = r#"
    id, username, email, password_hash, name, last_name, phone, address,
    gender, role, is_active, created_at, updated_at, last_login_at
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::internal(format!("Failed to get {}: {}", name, e))
        };

        let role: String = row.try_get("role").map_err(|e| column("role", e))?;
        let role = role
            .parse::<Role>()
            .map_err(|_| DomainError::internal(format!("Unknown role stored: {}", role)))?;

        let gender: Option<String> = row.try_get("gender").map_err(|e| column("gender", e))?;
        let gender = gender.and_then(|value| match value.parse::<Gender>() {
            Ok(gender) => Some(gender),
            Err(_) => {
                tracing::warn!("Ignoring unknown gender value: {}", value);
                None
            }
        });

        Ok(User {
            id: row.try_get("id").map_err(|e| column("id", e))?,
            username: row.try_get("username").map_err(|e| column("username", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| column("password_hash", e))?,
            profile: UserProfile {
                name: row.try_get("name").map_err(|e| column("name", e))?,
                last_name: row.try_get("last_name").map_err(|e| column("last_name", e))?,
                phone: row.try_get("phone").map_err(|e| column("phone", e))?,
                address: row.try_get("address").map_err(|e| column("address", e))?,
                gender,
            },
            role,
            is_active: row.try_get("is_active").map_err(|e| column("is_active", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
            last_login_at: row
                .try_get("last_login_at")
                .map_err(|e| column("last_login_at", e))?,
        })
    }

    async fn find_one(&self, filter: &str, value: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE {} = ? LIMIT 1", USER_COLUMNS, filter);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to load user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to load user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_username_or_email(&self, identifier: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE username = ? OR email = ? ORDER BY id LIMIT 1",
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(identifier)
            .bind(identifier.to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to load user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_one("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", &email.to_lowercase()).await
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list users", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                username, email, password_hash, name, last_name, phone,
                address, gender, role, is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;
        let now = Utc::now();

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(user.email.to_lowercase())
            .bind(&user.password_hash)
            .bind(&user.profile.name)
            .bind(&user.profile.last_name)
            .bind(&user.profile.phone)
            .bind(&user.profile.address)
            .bind(user.profile.gender.map(Gender::as_str))
            .bind(user.role.as_str())
            .bind(user.is_active)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("Failed to create user", e))?;

        let id = result.last_insert_id() as i64;
        tracing::debug!("Created user {} ({})", id, user.username);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::internal(format!("User {} vanished after insert", id)))
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                username = ?,
                email = ?,
                password_hash = ?,
                name = ?,
                last_name = ?,
                phone = ?,
                address = ?,
                gender = ?,
                role = ?,
                is_active = ?,
                updated_at = ?,
                last_login_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&user.username)
            .bind(user.email.to_lowercase())
            .bind(&user.password_hash)
            .bind(&user.profile.name)
            .bind(&user.profile.last_name)
            .bind(&user.profile.phone)
            .bind(&user.profile.address)
            .bind(user.profile.gender.map(Gender::as_str))
            .bind(user.role.as_str())
            .bind(user.is_active)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("Failed to update user", e))?;

        // MySQL reports 0 affected rows for an unchanged record, so re-read
        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    async fn record_login(&self, id: i64) -> Result<User, DomainError> {
        let now = Utc::now();
        sqlx::query("UPDATE users SET last_login_at = ?, updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to record login", e))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    async fn update_password_hash(&self, id: i64, password_hash: String) -> Result<User, DomainError> {
        sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(&password_hash)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to update password", e))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, role: Option<Role>) -> Result<u64, DomainError> {
        let count: i64 = match role {
            Some(role) => sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?")
                .bind(role.as_str())
                .fetch_one(&self.pool)
                .await,
            None => sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(&self.pool)
                .await,
        }
        .map_err(|e| query_error("Failed to count users", e))?;

        Ok(count as u64)
    }
}
