//! Inputs accepted by the user service
//!
//! Fields arrive as raw strings; parsing and validation happen in the service
//! so every entry point reports the same errors.

/// Optional profile fields; blank strings are stored as absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
}

/// Data for a new account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Defaults to client
    pub role: Option<String>,
    /// Defaults to active
    pub is_active: Option<bool>,
    pub profile: ProfileInput,
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub profile: ProfileInput,
}

impl UserChanges {
    /// Whether the update touches fields reserved to administrators
    pub fn touches_privileged_fields(&self) -> bool {
        self.role.is_some() || self.is_active.is_some()
    }
}
