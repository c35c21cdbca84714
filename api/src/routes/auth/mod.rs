//! Authentication route handlers
//!
//! - Login and public registration issue access tokens
//! - Session endpoints inspect and manage the authenticated caller

pub mod login;
pub mod register;
pub mod session;

pub use login::login;
pub use register::register;
pub use session::{change_password, list_users, profile, validate};
