//! User entity representing an account holder of the TennisManager system.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Account role. The hierarchy is admin > manager > client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Client,
}

impl Role {
    /// Every role, highest first
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Client];

    /// Position in the hierarchy; a higher level includes every lower one
    pub fn level(self) -> u8 {
        match self {
            Role::Admin => 3,
            Role::Manager => 2,
            Role::Client => 1,
        }
    }

    /// Level of a role name as found in claims or storage; unknown names rank 0
    pub fn level_of(name: &str) -> u8 {
        name.parse::<Role>().map(Role::level).unwrap_or(0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Client => "client",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Client
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "client" => Ok(Role::Client),
            _ => Err(ValidationError::InvalidRole {
                value: s.to_string(),
            }),
        }
    }
}

/// Self-declared gender of a user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer_not_to_say",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "prefer_not_to_say" => Ok(Gender::PreferNotToSay),
            _ => Err(ValidationError::InvalidGender {
                value: s.to_string(),
            }),
        }
    }
}

/// Optional personal details attached to an account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gender: Option<Gender>,
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, immutable once created
    pub id: i64,

    /// Unique login name
    pub username: String,

    /// Unique, lowercase email address
    pub email: String,

    /// bcrypt hash of the password; never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Personal details
    #[serde(flatten)]
    pub profile: UserProfile,

    pub role: Role,

    /// Inactive accounts cannot log in and their tokens stop verifying
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Display name built from the profile, falling back to the username
    pub fn full_name(&self) -> String {
        match (
            non_blank(self.profile.name.as_deref()),
            non_blank(self.profile.last_name.as_deref()),
        ) {
            (Some(name), Some(last_name)) => format!("{} {}", name, last_name),
            (Some(name), None) => name.to_string(),
            (None, Some(last_name)) => last_name.to_string(),
            (None, None) => self.username.clone(),
        }
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }
}

/// A user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile: UserProfile,
    pub role: Role,
    pub is_active: bool,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>, password_hash: String) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash,
            profile: UserProfile::default(),
            role: Role::default(),
            is_active: true,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Materialize with the identifier the store assigned
    pub fn into_user(self, id: i64) -> User {
        let now = Utc::now();
        User {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            profile: self.profile,
            role: self.role,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        NewUser::new("rafa", "rafa@club.com", "hash".to_string()).into_user(7)
    }

    #[test]
    fn test_role_levels_are_ordered() {
        assert!(Role::Admin.level() > Role::Manager.level());
        assert!(Role::Manager.level() > Role::Client.level());
        assert_eq!(Role::level_of("manager"), 2);
        assert_eq!(Role::level_of("coach"), 0);
    }

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::Manager.to_string(), "manager");
        assert!(matches!(
            "owner".parse::<Role>(),
            Err(ValidationError::InvalidRole { .. })
        ));
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("prefer_not_to_say".parse::<Gender>().unwrap(), Gender::PreferNotToSay);
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_new_user_defaults() {
        let user = user();
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Client);
        assert!(user.is_active);
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_full_name_fallbacks() {
        let mut user = user();
        assert_eq!(user.full_name(), "rafa");

        user.profile.name = Some("Rafael".to_string());
        assert_eq!(user.full_name(), "Rafael");

        user.profile.last_name = Some("Nadal".to_string());
        assert_eq!(user.full_name(), "Rafael Nadal");

        user.profile.name = Some("  ".to_string());
        assert_eq!(user.full_name(), "Nadal");
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let value = serde_json::to_value(user()).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["role"], "client");
    }

    #[test]
    fn test_deactivate_and_last_login() {
        let mut user = user();
        user.deactivate();
        assert!(!user.is_active);
        user.activate();
        assert!(user.is_active);
        user.update_last_login();
        assert!(user.last_login_at.is_some());
    }
}
