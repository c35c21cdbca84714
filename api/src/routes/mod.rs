//! Route handlers grouped by resource

pub mod auth;
pub mod catalog;
pub mod notes;
pub mod system;
pub mod users;
