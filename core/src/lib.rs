//! # TennisManager Core
//!
//! Entities, repository traits with in-memory stores, and the services that
//! hold the rules: who may log in, what a token proves, which role reaches
//! which record. Nothing here knows about HTTP or MySQL.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
