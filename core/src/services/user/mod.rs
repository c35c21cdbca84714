//! User service module
//!
//! Account creation and updates with input validation, uniqueness checks and
//! password hashing.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::UserService;
pub use types::{CreateUser, ProfileInput, UserChanges};
