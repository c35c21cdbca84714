use serde::{Deserialize, Serialize};
use validator::Validate;

use tm_core::domain::entities::note::Note;
use tm_core::domain::entities::user::{Role, User};
use tm_core::services::{CreateUser, ProfileInput, UserChanges};

/// Public identity summary returned alongside tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name(),
            role: user.role,
            is_active: user.is_active,
        }
    }
}

/// Full user record, never including the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(flatten)]
    pub user: User,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_count: Option<u64>,
}

impl UserResponse {
    pub fn new(user: User) -> Self {
        Self {
            full_name: user.full_name(),
            user,
            notes_count: None,
        }
    }

    pub fn with_notes_count(mut self, count: u64) -> Self {
        self.notes_count = Some(count);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNotesResponse {
    pub user: UserResponse,
    pub notes: Vec<Note>,
}

/// Optional profile fields shared by create and update bodies
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub address: Option<String>,
    pub gender: Option<String>,
}

impl From<ProfileRequest> for ProfileInput {
    fn from(request: ProfileRequest) -> Self {
        Self {
            name: request.name,
            last_name: request.last_name,
            phone: request.phone,
            address: request.address,
            gender: request.gender,
        }
    }
}

/// Body of `POST /api/users` and `POST /api/auth/register`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(max = 80))]
    pub username: Option<String>,
    #[validate(length(max = 120))]
    pub email: Option<String>,
    #[validate(length(max = 128))]
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: ProfileRequest,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            username: request.username.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            role: request.role,
            is_active: request.is_active,
            profile: request.profile.into(),
        }
    }
}

/// Body of `PUT /api/users/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 80))]
    pub username: Option<String>,
    #[validate(length(max = 120))]
    pub email: Option<String>,
    #[validate(length(max = 128))]
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: ProfileRequest,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            password: request.password,
            role: request.role,
            is_active: request.is_active,
            profile: request.profile.into(),
        }
    }
}
