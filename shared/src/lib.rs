//! Shared utilities and common types for the TennisManager server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelopes
//! - Input validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig,
};
pub use types::{ApiResponse, ErrorResponse, HealthStatus};
pub use utils::validation;
