//! Type definitions shared by every crate
//!
//! - `response` - Success and failure envelopes, health status

pub mod response;

pub use response::{ApiResponse, ErrorResponse, HealthStatus};
