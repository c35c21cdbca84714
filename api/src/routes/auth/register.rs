use actix_web::{web, HttpResponse};
use validator::Validate;

use tm_shared::types::ApiResponse;

use crate::dto::auth::TokenResponse;
use crate::dto::user::CreateUserRequest;
use crate::handlers::ApiResult;
use crate::state::AppState;

/// Handler for POST /api/auth/register
///
/// Creates an account and signs the caller in. Roles above `client` are
/// refused unless self-registration of roles is enabled; `is_active` is
/// ignored.
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid fields, or a disallowed role
/// - 409 Conflict: Username or email already in use
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let mut request = request.into_inner();
    request.validate()?;
    request.is_active = None;

    let response = state.auth_service.register(request.into()).await?;
    log::info!("Registered user {}", response.user.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "User registered successfully",
        TokenResponse::from(response),
    )))
}
