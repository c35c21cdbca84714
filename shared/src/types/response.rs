//! API response envelopes
//!
//! Every endpoint answers with one of two shapes:
//! `{"success": true, "message": ..., "data": ...}` or
//! `{"success": false, "message": ..., "errors": [...]}`.

use serde::{Deserialize, Serialize};

/// Success envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true` for this envelope
    pub success: bool,

    /// Human-readable summary of the outcome
    pub message: String,

    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying data
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Map the data to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response without payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Failure envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false` for this envelope
    pub success: bool,

    /// Human-readable error message, never internal detail
    pub message: String,

    /// Field-level problems, when there are several
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,

    /// Role of the caller on authorization failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
            user_role: None,
        }
    }

    /// Attach field-level errors
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        if !errors.is_empty() {
            self.errors = Some(errors);
        }
        self
    }

    /// Echo the caller's role
    pub fn with_user_role(mut self, role: impl Into<String>) -> Self {
        self.user_role = Some(role.into());
        self
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success("Found 1 notes", vec![1, 2]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": true, "message": "Found 1 notes", "data": [1, 2]}));
    }

    #[test]
    fn test_message_only_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::message("Note deleted")).unwrap();
        assert_eq!(value, json!({"success": true, "message": "Note deleted"}));
    }

    #[test]
    fn test_error_envelope_shape() {
        let response = ErrorResponse::new("Access denied").with_user_role("client");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "message": "Access denied", "user_role": "client"})
        );

        let empty = ErrorResponse::new("Bad request").with_errors(vec![]);
        assert!(empty.errors.is_none());
    }
}
