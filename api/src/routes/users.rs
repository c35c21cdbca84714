//! User management endpoints under `/api/users`
//!
//! Every route runs behind [`JwtAuth`](crate::middleware::JwtAuth); list and
//! create additionally carry a role gate, the rest check ownership inline.

use actix_web::{web, HttpResponse};
use validator::Validate;

use tm_core::domain::entities::user::{Role, User};
use tm_core::errors::{AuthError, ValidationError};
use tm_core::services::authorization::{can_access, has_role};
use tm_core::services::UserChanges;
use tm_shared::types::ApiResponse;

use crate::dto::user::{CreateUserRequest, UpdateUserRequest, UserNotesResponse, UserResponse};
use crate::handlers::ApiResult;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

fn ensure_can_access(caller: &User, owner_id: i64) -> Result<(), AuthError> {
    if can_access(caller, owner_id) {
        Ok(())
    } else {
        Err(AuthError::AccessDenied {
            reason: "Access denied".to_string(),
            actual: caller.role,
        })
    }
}

/// Handler for GET /api/users (manager or higher)
pub async fn list_users(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let users = state.user_service.list().await?;

    let mut response = Vec::with_capacity(users.len());
    for user in users {
        let notes_count = state.note_service.count(Some(user.id)).await?;
        response.push(UserResponse::new(user).with_notes_count(notes_count));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("{} users found", response.len()),
        response,
    )))
}

/// Handler for GET /api/users/{id}
pub async fn get_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    ensure_can_access(&auth.user, id)?;

    let user = state.user_service.get(id).await?;
    let notes_count = state.note_service.count(Some(id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User found",
        UserResponse::new(user).with_notes_count(notes_count),
    )))
}

/// Handler for GET /api/users/{id}/notes
pub async fn get_user_notes(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    ensure_can_access(&auth.user, id)?;

    let user = state.user_service.get(id).await?;
    let notes = state.note_service.list(Some(id)).await?;
    let response = UserNotesResponse {
        user: UserResponse::new(user).with_notes_count(notes.len() as u64),
        notes,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success("User notes found", response)))
}

/// Handler for POST /api/users (admin only)
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let user = state.user_service.create(request.into()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "User created successfully",
        UserResponse::new(user).with_notes_count(0),
    )))
}

/// Handler for PUT /api/users/{id}
///
/// Admins may edit anyone; other users only themselves and never their
/// own role or active flag.
pub async fn update_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<i64>,
    request: web::Json<UpdateUserRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let request = request.into_inner();
    request.validate()?;
    let changes = UserChanges::from(request);

    let is_admin = has_role(&auth.user, Role::Admin);
    if !is_admin && auth.user_id() != id {
        return Err(AuthError::AccessDenied {
            reason: "You can only update your own profile".to_string(),
            actual: auth.role(),
        }
        .into());
    }
    if !is_admin && changes.touches_privileged_fields() {
        return Err(AuthError::AccessDenied {
            reason: "Only admins can change role or active status".to_string(),
            actual: auth.role(),
        }
        .into());
    }
    if auth.user_id() == id && changes.is_active == Some(false) {
        return Err(ValidationError::BusinessRuleViolation {
            rule: "You cannot deactivate your own account".to_string(),
        }
        .into());
    }

    let user = state.user_service.update(id, changes).await?;
    let notes_count = state.note_service.count(Some(id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User updated successfully",
        UserResponse::new(user).with_notes_count(notes_count),
    )))
}

/// Handler for DELETE /api/users/{id} (admin only)
///
/// Removes the user, then sweeps any notes the store did not cascade.
pub async fn delete_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    if auth.user_id() == id {
        return Err(ValidationError::BusinessRuleViolation {
            rule: "You cannot delete your own account".to_string(),
        }
        .into());
    }

    let user = state.user_service.get(id).await?;
    state.user_service.delete(user.id).await?;
    let removed = state.note_service.delete_for_user(user.id).await?;
    log::info!("User {} deleted with {} notes by {}", user.id, removed, auth.user_id());

    Ok(HttpResponse::Ok().json(ApiResponse::message(format!(
        "User {} deleted successfully",
        user.username
    ))))
}
