use serde::Deserialize;
use validator::Validate;

use tm_core::services::NoteChanges;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub content: Option<String>,
    /// Owner; defaults to the caller
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNoteRequest {
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<i64>,
}

impl From<UpdateNoteRequest> for NoteChanges {
    fn from(request: UpdateNoteRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            user_id: request.user_id,
        }
    }
}

/// Query of `GET /api/notes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteListQuery {
    pub user_id: Option<i64>,
}

/// Query of `GET /api/notes/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteSearchQuery {
    pub user_id: Option<i64>,
    pub title: Option<String>,
}
