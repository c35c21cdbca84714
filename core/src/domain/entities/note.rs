//! Note entity: a short text owned by a single user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Owning user
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A note that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

impl NewNote {
    pub fn into_note(self, id: i64) -> Note {
        let now = Utc::now();
        Note {
            id,
            title: self.title,
            content: self.content,
            user_id: self.user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
