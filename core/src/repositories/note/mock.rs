//! In-memory implementation of NoteRepository

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::note::{NewNote, Note};
use crate::errors::DomainError;

use super::trait_::NoteRepository;

#[derive(Clone)]
pub struct MockNoteRepository {
    notes: Arc<RwLock<BTreeMap<i64, Note>>>,
    next_id: Arc<AtomicI64>,
}

impl MockNoteRepository {
    pub fn new() -> Self {
        Self {
            notes: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Store a fully formed note under its own id
    pub async fn insert(&self, note: Note) {
        self.next_id.fetch_max(note.id + 1, Ordering::SeqCst);
        self.notes.write().await.insert(note.id, note);
    }

    fn newest_first(mut notes: Vec<Note>) -> Vec<Note> {
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        notes
    }
}

impl Default for MockNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, DomainError> {
        Ok(self.notes.read().await.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Note>, DomainError> {
        let notes = self.notes.read().await;
        Ok(Self::newest_first(notes.values().cloned().collect()))
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Note>, DomainError> {
        let notes = self.notes.read().await;
        Ok(Self::newest_first(
            notes.values().filter(|n| n.user_id == user_id).cloned().collect(),
        ))
    }

    async fn search_by_title(&self, user_id: i64, title: &str) -> Result<Vec<Note>, DomainError> {
        let needle = title.to_lowercase();
        let notes = self.notes.read().await;
        Ok(Self::newest_first(
            notes
                .values()
                .filter(|n| n.user_id == user_id && n.title.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        ))
    }

    async fn create(&self, note: NewNote) -> Result<Note, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let note = note.into_note(id);
        self.notes.write().await.insert(id, note.clone());
        Ok(note)
    }

    async fn update(&self, note: Note) -> Result<Note, DomainError> {
        let mut notes = self.notes.write().await;
        if !notes.contains_key(&note.id) {
            return Err(DomainError::not_found("Note"));
        }
        notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.notes.write().await.remove(&id).is_some())
    }

    async fn delete_by_user(&self, user_id: i64) -> Result<u64, DomainError> {
        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|_, n| n.user_id != user_id);
        Ok((before - notes.len()) as u64)
    }

    async fn count(&self, user_id: Option<i64>) -> Result<u64, DomainError> {
        let notes = self.notes.read().await;
        let count = notes
            .values()
            .filter(|n| user_id.map_or(true, |id| n.user_id == id))
            .count();
        Ok(count as u64)
    }
}
