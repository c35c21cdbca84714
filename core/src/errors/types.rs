//! Error types for authentication, token verification and input validation
//!
//! The `Display` text of each variant is the client-facing message; the
//! presentation layer chooses the status code.

use thiserror::Error;

use crate::domain::entities::user::Role;

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Access token required")]
    MissingToken,

    #[error("Invalid token format. Use: Bearer <token>")]
    MalformedHeader,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account disabled. Contact the administrator")]
    AccountDisabled,

    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error("Access denied. Requires role: {required} or higher")]
    InsufficientRole { required: Role, actual: Role },

    #[error("{reason}")]
    AccessDenied { reason: String, actual: Role },
}

impl AuthError {
    /// Role of the caller, for failures that happened after authentication
    pub fn caller_role(&self) -> Option<Role> {
        match self {
            AuthError::InsufficientRole { actual, .. } | AuthError::AccessDenied { actual, .. } => {
                Some(*actual)
            }
            _ => None,
        }
    }

    /// Whether this is an authorization (403) rather than authentication (401) failure
    pub fn is_forbidden(&self) -> bool {
        self.caller_role().is_some()
    }
}

/// Reasons a bearer token fails verification
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Token expired")]
    Expired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token subject is unknown or inactive")]
    UnknownOrInactiveSubject,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid role. Must be one of: admin, manager, client")]
    InvalidRole { value: String },

    #[error("Invalid gender. Must be one of: male, female, other, prefer_not_to_say")]
    InvalidGender { value: String },

    #[error("{field} already in use")]
    DuplicateValue { field: String },

    #[error("{rule}")]
    BusinessRuleViolation { rule: String },
}

impl ValidationError {
    /// Build a missing-fields error from field names
    pub fn missing<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationError::MissingFields {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Duplicates are conflicts rather than bad input
    pub fn is_conflict(&self) -> bool {
        matches!(self, ValidationError::DuplicateValue { .. })
    }
}
