pub mod auth_response;
pub mod permissions;

pub use auth_response::AuthResponse;
pub use permissions::PermissionSummary;
