//! Authentication service module
//!
//! This module provides:
//! - Login by username or email with bcrypt password checks
//! - Public registration
//! - Password changes for authenticated users

mod config;
mod service;


pub use config::AuthServiceConfig;
pub use service::AuthService;
