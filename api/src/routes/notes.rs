//! Note endpoints under `/api/notes`
//!
//! Callers below manager only ever see and touch their own notes.

use actix_web::{web, HttpResponse};
use validator::Validate;

use tm_core::domain::entities::user::{Role, User};
use tm_core::errors::{AuthError, ValidationError};
use tm_core::services::authorization::{can_access, has_permission};
use tm_shared::types::ApiResponse;

use crate::dto::note::{CreateNoteRequest, NoteListQuery, NoteSearchQuery, UpdateNoteRequest};
use crate::handlers::ApiResult;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

fn denied(caller: &User, reason: &str) -> AuthError {
    AuthError::AccessDenied {
        reason: reason.to_string(),
        actual: caller.role,
    }
}

fn is_manager(caller: &User) -> bool {
    has_permission(caller, Role::Manager)
}

/// Handler for GET /api/notes?user_id=
pub async fn list_notes(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<NoteListQuery>,
) -> ApiResult<HttpResponse> {
    let owner = if is_manager(&auth.user) {
        query.user_id
    } else {
        Some(auth.user_id())
    };

    let notes = state.note_service.list(owner).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("{} notes found", notes.len()),
        notes,
    )))
}

/// Handler for GET /api/notes/search?user_id=&title=
pub async fn search_notes(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<NoteSearchQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let title = match query.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => return Err(ValidationError::missing(["title"]).into()),
    };

    let owner = if is_manager(&auth.user) {
        query.user_id.ok_or_else(|| ValidationError::missing(["user_id"]))?
    } else {
        auth.user_id()
    };

    let notes = state.note_service.search(owner, &title).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("{} notes found", notes.len()),
        notes,
    )))
}

/// Handler for GET /api/notes/{id}
pub async fn get_note(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let note = state.note_service.get(path.into_inner()).await?;
    if !can_access(&auth.user, note.user_id) {
        return Err(denied(&auth.user, "You can only view your own notes").into());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success("Note found", note)))
}

/// Handler for POST /api/notes
///
/// Creating a note for someone else requires manager or higher.
pub async fn create_note(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateNoteRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let owner = request.user_id.unwrap_or(auth.user_id());
    if owner != auth.user_id() && !is_manager(&auth.user) {
        return Err(denied(&auth.user, "You can only create notes for yourself").into());
    }
    if owner != auth.user_id() {
        state.user_service.get(owner).await?;
    }

    let note = state
        .note_service
        .create(request.title.as_deref(), request.content.as_deref(), owner)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Note created successfully", note)))
}

/// Handler for PUT /api/notes/{id}
pub async fn update_note(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<i64>,
    request: web::Json<UpdateNoteRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let note = state.note_service.get(path.into_inner()).await?;
    if !can_access(&auth.user, note.user_id) {
        return Err(denied(&auth.user, "You can only edit your own notes").into());
    }

    if let Some(new_owner) = request.user_id.filter(|owner| *owner != note.user_id) {
        if !is_manager(&auth.user) {
            return Err(denied(&auth.user, "Only managers can reassign notes").into());
        }
        state.user_service.get(new_owner).await?;
    }

    let note = state.note_service.update(note, request.into()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Note updated successfully", note)))
}

/// Handler for DELETE /api/notes/{id}
pub async fn delete_note(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let note = state.note_service.get(path.into_inner()).await?;
    if !can_access(&auth.user, note.user_id) {
        return Err(denied(&auth.user, "You can only delete your own notes").into());
    }

    state.note_service.delete(note.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Note deleted successfully")))
}
