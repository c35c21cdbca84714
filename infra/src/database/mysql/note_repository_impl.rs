//! MySQL implementation of the NoteRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{mysql::MySqlRow, MySqlPool, Row};

use tm_core::domain::entities::note::{NewNote, Note};
use tm_core::errors::DomainError;
use tm_core::repositories::NoteRepository;

use super::{like_pattern, query_error, write_error};

const NOTE_COLUMNS: &str = "id, title, content, user_id, created_at, updated_at";

pub struct MySqlNoteRepository {
    pool: MySqlPool,
}

impl MySqlNoteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_note(row: &MySqlRow) -> Result<Note, DomainError> {
        let read = |e: sqlx::Error| DomainError::internal(format!("Failed to read note: {}", e));

        Ok(Note {
            id: row.try_get("id").map_err(read)?,
            title: row.try_get("title").map_err(read)?,
            content: row.try_get("content").map_err(read)?,
            user_id: row.try_get("user_id").map_err(read)?,
            created_at: row.try_get("created_at").map_err(read)?,
            updated_at: row.try_get("updated_at").map_err(read)?,
        })
    }
}

#[async_trait]
impl NoteRepository for MySqlNoteRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, DomainError> {
        let query = format!("SELECT {} FROM notes WHERE id = ? LIMIT 1", NOTE_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to load note", e))?;

        row.as_ref().map(Self::row_to_note).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Note>, DomainError> {
        let query = format!(
            "SELECT {} FROM notes ORDER BY created_at DESC, id DESC",
            NOTE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list notes", e))?;

        rows.iter().map(Self::row_to_note).collect()
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Note>, DomainError> {
        let query = format!(
            "SELECT {} FROM notes WHERE user_id = ? ORDER BY created_at DESC, id DESC",
            NOTE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list notes", e))?;

        rows.iter().map(Self::row_to_note).collect()
    }

    async fn search_by_title(&self, user_id: i64, title: &str) -> Result<Vec<Note>, DomainError> {
        let query = format!(
            "SELECT {} FROM notes WHERE user_id = ? AND LOWER(title) LIKE ? \
             ORDER BY created_at DESC, id DESC",
            NOTE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id)
            .bind(like_pattern(title))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to search notes", e))?;

        rows.iter().map(Self::row_to_note).collect()
    }

    async fn create(&self, note: NewNote) -> Result<Note, DomainError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO notes (title, content, user_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.user_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("Failed to create note", e))?;

        let id = result.last_insert_id() as i64;
        tracing::debug!("Created note {} for user {}", id, note.user_id);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::internal(format!("Note {} vanished after insert", id)))
    }

    async fn update(&self, note: Note) -> Result<Note, DomainError> {
        sqlx::query(
            "UPDATE notes SET title = ?, content = ?, user_id = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.user_id)
        .bind(note.updated_at)
        .bind(note.id)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("Failed to update note", e))?;

        self.find_by_id(note.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Note"))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete note", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user(&self, user_id: i64) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM notes WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete notes", e))?;

        Ok(result.rows_affected())
    }

    async fn count(&self, user_id: Option<i64>) -> Result<u64, DomainError> {
        let count: i64 = match user_id {
            Some(user_id) => sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await,
            None => sqlx::query_scalar("SELECT COUNT(*) FROM notes")
                .fetch_one(&self.pool)
                .await,
        }
        .map_err(|e| query_error("Failed to count notes", e))?;

        Ok(count as u64)
    }
}
