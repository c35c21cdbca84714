//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository traits on MySQL.
//!
//! - **Database**: connection pool, start-up retries and schema creation
//! - **Repositories**: users, notes and the read-only catalog, using SQLx

use thiserror::Error;

use tm_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::connection::{DatabasePool, PoolStatistics};
pub use database::mysql::{
    CatalogTable, MySqlCatalogRepository, MySqlNoteRepository, MySqlUserRepository,
};

/// Errors raised while setting up infrastructure
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::internal(error.to_string())
    }
}
