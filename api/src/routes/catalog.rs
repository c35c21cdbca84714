//! Public read-only catalog endpoints
//!
//! The same two handlers serve every entity; each scope resolves its
//! repository from app data by entity type.

use actix_web::{web, HttpResponse};

use tm_core::domain::entities::catalog::CatalogEntity;
use tm_core::errors::DomainError;
use tm_core::repositories::CatalogRepository;
use tm_shared::types::ApiResponse;

use crate::handlers::ApiResult;

/// Handler for GET /api/{collection}
pub async fn list<T: CatalogEntity>(
    repository: web::Data<dyn CatalogRepository<T>>,
) -> ApiResult<HttpResponse> {
    let records = repository.list().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("{} {} found", records.len(), T::COLLECTION),
        records,
    )))
}

/// Handler for GET /api/{collection}/{id}
pub async fn get<T: CatalogEntity>(
    repository: web::Data<dyn CatalogRepository<T>>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let record = repository
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found(T::RESOURCE))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("{} found", T::RESOURCE),
        record,
    )))
}

/// Scope exposing `GET ""` and `GET /{id}` for one entity
pub fn scope<T: CatalogEntity>(path: &str) -> actix_web::Scope {
    web::scope(path)
        .route("", web::get().to(list::<T>))
        .route("/{id}", web::get().to(get::<T>))
}
