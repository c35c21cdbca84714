//! Request and response bodies of the HTTP API

pub mod auth;
pub mod note;
pub mod system;
pub mod user;

pub use auth::*;
pub use note::*;
pub use system::*;
pub use user::*;
