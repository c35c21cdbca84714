//! Read-only repository for catalog records.

use async_trait::async_trait;

use crate::domain::entities::catalog::CatalogEntity;
use crate::errors::DomainError;

#[async_trait]
pub trait CatalogRepository<T: CatalogEntity>: Send + Sync {
    /// Every record ordered by id
    async fn list(&self) -> Result<Vec<T>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DomainError>;
}
