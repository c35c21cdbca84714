//! TennisManager HTTP API
//!
//! Library half of the API crate: the app factory, middleware, handlers and
//! DTOs, shared by the server binary and the HTTP tests.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use config::Config;
pub use state::{AppState, CatalogRepositories, HealthProbe};
