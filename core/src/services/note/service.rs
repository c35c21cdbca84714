//! Note management

use std::sync::Arc;

use tm_shared::validation::missing_fields;

use crate::domain::entities::note::{NewNote, Note};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::NoteRepository;

/// Fields of a note to change; `None` leaves a field as is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<i64>,
}

/// Validates and persists notes
///
/// Ownership rules are enforced by the caller.
pub struct NoteService<N: NoteRepository + ?Sized> {
    notes: Arc<N>,
}

impl<N: NoteRepository + ?Sized> NoteService<N> {
    pub fn new(notes: Arc<N>) -> Self {
        Self { notes }
    }

    pub async fn list(&self, user_id: Option<i64>) -> DomainResult<Vec<Note>> {
        match user_id {
            Some(user_id) => self.notes.list_by_user(user_id).await,
            None => self.notes.list_all().await,
        }
    }

    pub async fn search(&self, user_id: i64, title: &str) -> DomainResult<Vec<Note>> {
        self.notes.search_by_title(user_id, title.trim()).await
    }

    pub async fn get(&self, id: i64) -> DomainResult<Note> {
        self.notes
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Note"))
    }

    pub async fn count(&self, user_id: Option<i64>) -> DomainResult<u64> {
        self.notes.count(user_id).await
    }

    /// Creates a note for `user_id` after trimming title and content
    pub async fn create(&self, title: Option<&str>, content: Option<&str>, user_id: i64) -> DomainResult<Note> {
        let missing = missing_fields(&[("title", title), ("content", content)]);
        if !missing.is_empty() {
            return Err(ValidationError::missing(missing).into());
        }

        let note = self
            .notes
            .create(NewNote {
                title: title.unwrap_or_default().trim().to_string(),
                content: content.unwrap_or_default().trim().to_string(),
                user_id,
            })
            .await?;
        tracing::debug!(note_id = note.id, user_id, "Note created");
        Ok(note)
    }

    pub async fn update(&self, mut note: Note, changes: NoteChanges) -> DomainResult<Note> {
        if let Some(title) = changes.title {
            note.title = required_text("title", &title)?;
        }
        if let Some(content) = changes.content {
            note.content = required_text("content", &content)?;
        }
        if let Some(user_id) = changes.user_id {
            note.user_id = user_id;
        }
        note.touch();
        self.notes.update(note).await
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.notes.delete(id).await? {
            return Err(DomainError::not_found("Note"));
        }
        Ok(())
    }

    /// Removes every note of a user
    pub async fn delete_for_user(&self, user_id: i64) -> DomainResult<u64> {
        self.notes.delete_by_user(user_id).await
    }
}

fn required_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing([field]));
    }
    Ok(trimmed.to_string())
}
