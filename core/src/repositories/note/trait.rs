//! Note repository trait.

use async_trait::async_trait;

use crate::domain::entities::note::{NewNote, Note};
use crate::errors::DomainError;

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, DomainError>;

    /// Every note, newest first
    async fn list_all(&self) -> Result<Vec<Note>, DomainError>;

    /// Notes of one user, newest first
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Note>, DomainError>;

    /// Notes of one user whose title contains `title` (case-insensitive)
    async fn search_by_title(&self, user_id: i64, title: &str) -> Result<Vec<Note>, DomainError>;

    async fn create(&self, note: NewNote) -> Result<Note, DomainError>;

    async fn update(&self, note: Note) -> Result<Note, DomainError>;

    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Remove every note of a user, returning how many were removed
    async fn delete_by_user(&self, user_id: i64) -> Result<u64, DomainError>;

    /// Count notes, optionally only those of `user_id`
    async fn count(&self, user_id: Option<i64>) -> Result<u64, DomainError>;
}
