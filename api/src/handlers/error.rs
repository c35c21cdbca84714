//! Conversion of domain errors into HTTP responses.
//!
//! Every failure leaves the API as the JSON error envelope
//! `{"success": false, "message": ..., "errors"?: [...], "user_role"?: ...}`.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;
use validator::ValidationErrors;

use tm_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use tm_shared::types::ErrorResponse;

/// Message sent instead of internal error detail
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub type ApiResult<T> = Result<T, ApiError>;

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request could not be parsed or failed field validation
    #[error("{message}")]
    BadRequest {
        message: String,
        errors: Vec<String>,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    fn envelope(&self) -> ErrorResponse {
        match self {
            ApiError::BadRequest { message, errors } => {
                ErrorResponse::new(message.clone()).with_errors(errors.clone())
            }
            ApiError::Domain(error) => domain_envelope(error),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, error.code),
                })
            })
            .collect();
        details.sort();

        ApiError::BadRequest {
            message: "Invalid input".to_string(),
            errors: details,
        }
    }
}

fn domain_envelope(error: &DomainError) -> ErrorResponse {
    match error {
        DomainError::Internal { .. } | DomainError::Token(TokenError::GenerationFailed) => {
            ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
        }
        DomainError::Token(_) => ErrorResponse::new(AuthError::InvalidOrExpiredToken.to_string()),
        DomainError::Auth(auth_error) => {
            let response = ErrorResponse::new(auth_error.to_string());
            match auth_error.caller_role() {
                Some(role) => response.with_user_role(role.to_string()),
                None => response,
            }
        }
        DomainError::Validation(ValidationError::MissingFields { fields }) => {
            ErrorResponse::new(error.to_string()).with_errors(fields.clone())
        }
        DomainError::NotFound { .. } | DomainError::Validation(_) => {
            ErrorResponse::new(error.to_string())
        }
    }
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(validation) if validation.is_conflict() => StatusCode::CONFLICT,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Auth(auth_error) if auth_error.is_forbidden() => StatusCode::FORBIDDEN,
        DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
        DomainError::Token(TokenError::GenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Domain(error) => domain_status(error),
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected with {}: {}", status.as_u16(), self);
        }

        let mut envelope = self.envelope();
        if status.is_server_error() {
            envelope.message = INTERNAL_ERROR_MESSAGE.to_string();
        }
        HttpResponse::build(status).json(envelope)
    }
}

/// Malformed or oversized JSON bodies
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &error {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body too large".to_string()
        }
        _ => format!("Invalid JSON body: {}", error),
    };
    ApiError::bad_request(message).into()
}

/// Path segments that do not parse, e.g. a non-numeric id
pub fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid path parameter: {}", error)).into()
}

pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid query parameter: {}", error)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use tm_core::domain::entities::user::Role;

    async fn body(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let (status, json) = body(AuthError::MissingToken.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Access token required");
        assert!(json.get("user_role").is_none());
    }

    #[actix_web::test]
    async fn test_insufficient_role_echoes_caller_role() {
        let error = AuthError::InsufficientRole {
            required: Role::Admin,
            actual: Role::Client,
        };
        let (status, json) = body(error.into()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["user_role"], "client");
        assert_eq!(json["message"], "Access denied. Requires role: admin or higher");
    }

    #[actix_web::test]
    async fn test_duplicate_is_conflict() {
        let error = ValidationError::DuplicateValue {
            field: "Email".to_string(),
        };
        let (status, json) = body(error.into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "Email already in use");
    }

    #[actix_web::test]
    async fn test_missing_fields_are_listed() {
        let (status, json) = body(ValidationError::missing(["title", "content"]).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Required fields: title, content");
        assert_eq!(json["errors"], serde_json::json!(["title", "content"]));
    }

    #[actix_web::test]
    async fn test_token_failures_share_one_message() {
        for error in [TokenError::Expired, TokenError::InvalidSignature, TokenError::Malformed] {
            let (status, json) = body(ApiError::Domain(error.into())).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(json["message"], "Invalid or expired token");
        }
    }

    #[actix_web::test]
    async fn test_internal_detail_is_hidden() {
        let error = DomainError::internal("connection refused on 10.0.0.3:3306");
        let (status, json) = body(error.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "Internal server error");
    }

    #[actix_web::test]
    async fn test_not_found_names_resource() {
        let (status, json) = body(DomainError::not_found("Note").into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Note not found");
    }
}
