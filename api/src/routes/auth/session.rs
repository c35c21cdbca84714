//! Endpoints acting on the authenticated caller

use actix_web::{web, HttpResponse};
use validator::Validate;

use tm_core::services::authorization::permission_summary;
use tm_shared::types::ApiResponse;

use crate::dto::auth::{ChangePasswordRequest, ValidateTokenResponse};
use crate::dto::user::{UserResponse, UserSummary};
use crate::handlers::ApiResult;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/auth/validate
pub async fn validate(auth: AuthContext) -> ApiResult<HttpResponse> {
    let response = ValidateTokenResponse {
        valid: true,
        permissions: permission_summary(&auth.user),
        user: UserSummary::from(&auth.user),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success("Token is valid", response)))
}

/// Handler for GET /api/auth/profile
pub async fn profile(state: web::Data<AppState>, auth: AuthContext) -> ApiResult<HttpResponse> {
    let notes_count = state.note_service.count(Some(auth.user_id())).await?;
    let profile = UserResponse::new(auth.user).with_notes_count(notes_count);

    Ok(HttpResponse::Ok().json(ApiResponse::success("Profile retrieved", profile)))
}

/// Handler for PUT /api/auth/change-password
///
/// ## Errors
/// - 400 Bad Request: Missing fields or a new password under 6 characters
/// - 401 Unauthorized: Current password is wrong
pub async fn change_password(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    state
        .auth_service
        .change_password(
            auth.user,
            request.current_password.as_deref(),
            request.new_password.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Password updated successfully")))
}

/// Handler for GET /api/auth/users (admin only)
pub async fn list_users(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let users: Vec<UserResponse> = state
        .user_service
        .list()
        .await?
        .into_iter()
        .map(UserResponse::new)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("{} users found", users.len()),
        users,
    )))
}
