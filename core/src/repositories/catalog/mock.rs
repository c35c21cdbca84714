//! In-memory implementation of CatalogRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::catalog::CatalogEntity;
use crate::errors::DomainError;

use super::trait_::CatalogRepository;

#[derive(Clone)]
pub struct MockCatalogRepository<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: CatalogEntity> MockCatalogRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(mut records: Vec<T>) -> Self {
        records.sort_by_key(|r| r.id());
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<T: CatalogEntity> Default for MockCatalogRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: CatalogEntity> CatalogRepository<T> for MockCatalogRepository<T> {
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }
}
