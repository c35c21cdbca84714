//! Business services containing domain logic and use cases.

pub mod auth;
pub mod authorization;
pub mod note;
pub mod password;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use note::{NoteChanges, NoteService};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
pub use user::{CreateUser, ProfileInput, UserChanges, UserService};
