//! Shared services built once at start-up and handed to every worker.

use std::sync::Arc;

use async_trait::async_trait;

use tm_core::domain::entities::catalog::{Cart, CartDetail, Category, Product, Venture};
use tm_core::repositories::{CatalogRepository, NoteRepository, UserRepository};
use tm_core::services::{AuthService, NoteService, TokenService, UserService};
use tm_infra::DatabasePool;

use crate::config::Config;

/// Connectivity check used by `GET /health`
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn is_connected(&self) -> bool;
}

#[async_trait]
impl HealthProbe for DatabasePool {
    async fn is_connected(&self) -> bool {
        matches!(self.health_check().await, Ok(true))
    }
}

/// Application services over type-erased repositories
pub struct AppState {
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub token_service: Arc<TokenService<dyn UserRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
    pub note_service: Arc<NoteService<dyn NoteRepository>>,
    /// Absent when running without a database (tests)
    pub database: Option<Arc<dyn HealthProbe>>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        notes: Arc<dyn NoteRepository>,
        config: &Config,
    ) -> Self {
        let user_service = Arc::new(UserService::new(users.clone(), config.password_hasher()));
        let token_service = Arc::new(TokenService::new(users.clone(), config.token_service_config()));
        let auth_service = Arc::new(AuthService::new(
            users,
            user_service.clone(),
            token_service.clone(),
            config.auth_service_config(),
        ));

        Self {
            auth_service,
            token_service,
            user_service,
            note_service: Arc::new(NoteService::new(notes)),
            database: None,
        }
    }

    pub fn with_database(mut self, probe: Arc<dyn HealthProbe>) -> Self {
        self.database = Some(probe);
        self
    }
}

/// Read-only catalog repositories, one per entity
#[derive(Clone)]
pub struct CatalogRepositories {
    pub categories: Arc<dyn CatalogRepository<Category>>,
    pub products: Arc<dyn CatalogRepository<Product>>,
    pub ventures: Arc<dyn CatalogRepository<Venture>>,
    pub carts: Arc<dyn CatalogRepository<Cart>>,
    pub cart_details: Arc<dyn CatalogRepository<CartDetail>>,
}

impl CatalogRepositories {
    /// Serve every entity from a single repository
    pub fn from_shared<R>(repository: Arc<R>) -> Self
    where
        R: CatalogRepository<Category>
            + CatalogRepository<Product>
            + CatalogRepository<Venture>
            + CatalogRepository<Cart>
            + CatalogRepository<CartDetail>
            + 'static,
    {
        Self {
            categories: repository.clone(),
            products: repository.clone(),
            ventures: repository.clone(),
            carts: repository.clone(),
            cart_details: repository,
        }
    }
}
