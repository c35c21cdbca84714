use actix_web::{web, HttpResponse};
use validator::Validate;

use tm_shared::types::ApiResponse;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::ApiResult;
use crate::state::AppState;

/// Handler for POST /api/auth/login
///
/// # Request Body
///
/// ```json
/// { "username": "rafa", "password": "secret123" }
/// ```
///
/// `username` may also be the account email.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "Login successful",
///     "data": { "token": "...", "expires_in": 3600, "user": { ... } }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing username or password
/// - 401 Unauthorized: Invalid credentials or disabled account
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let response = state
        .auth_service
        .login(request.username.as_deref(), request.password.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Login successful",
        TokenResponse::from(response),
    )))
}
