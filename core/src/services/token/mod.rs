//! Token service module for JWT management
//!
//! Issues HS256 access tokens carrying id, username and role, and verifies
//! them against the live credential store. There is no revocation list;
//! deactivating an account is the only way to invalidate a token early.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
