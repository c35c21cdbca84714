//! Service description and health endpoints

use actix_web::{web, HttpResponse};
use serde_json::json;

use tm_core::domain::entities::user::Role;
use tm_core::errors::DomainResult;
use tm_shared::types::{ApiResponse, HealthStatus};

use crate::dto::system::{HealthResponse, HealthStatistics};
use crate::state::AppState;

/// Handler for GET / and GET /api-info
pub async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(
        "TennisManager API",
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "authentication": "Authorization: Bearer <token>",
            "roles": {
                "admin": "Full access, including user administration",
                "manager": "Reads all users and manages every note",
                "client": "Manages own profile and notes"
            },
            "endpoints": {
                "health": "GET /health",
                "auth": {
                    "login": "POST /api/auth/login",
                    "register": "POST /api/auth/register",
                    "validate": "GET /api/auth/validate",
                    "profile": "GET /api/auth/profile",
                    "change_password": "PUT /api/auth/change-password",
                    "users": "GET /api/auth/users (admin)"
                },
                "users": {
                    "list": "GET /api/users (manager)",
                    "create": "POST /api/users (admin)",
                    "get": "GET /api/users/{id}",
                    "notes": "GET /api/users/{id}/notes",
                    "update": "PUT /api/users/{id}",
                    "delete": "DELETE /api/users/{id} (admin)"
                },
                "notes": {
                    "list": "GET /api/notes?user_id=",
                    "search": "GET /api/notes/search?user_id=&title=",
                    "create": "POST /api/notes",
                    "get": "GET /api/notes/{id}",
                    "update": "PUT /api/notes/{id}",
                    "delete": "DELETE /api/notes/{id}"
                },
                "catalog": [
                    "GET /api/categories",
                    "GET /api/products",
                    "GET /api/ventures",
                    "GET /api/carts",
                    "GET /api/cart-details"
                ]
            }
        }),
    ))
}

async fn collect_statistics(state: &AppState) -> DomainResult<HealthStatistics> {
    Ok(HealthStatistics {
        total_users: state.user_service.count(None).await?,
        total_notes: state.note_service.count(None).await?,
        admins: state.user_service.count(Some(Role::Admin)).await?,
        managers: state.user_service.count(Some(Role::Manager)).await?,
        clients: state.user_service.count(Some(Role::Client)).await?,
    })
}

/// Handler for GET /health
///
/// Answers 503 when the database is unreachable or a count fails.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let connected = match &state.database {
        Some(probe) => probe.is_connected().await,
        None => true,
    };

    let statistics = if connected {
        match collect_statistics(&state).await {
            Ok(statistics) => Some(statistics),
            Err(error) => {
                log::error!("Health check failed: {}", error);
                None
            }
        }
    } else {
        None
    };

    let healthy = statistics.is_some();
    let response = HealthResponse {
        status: if healthy {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        },
        database: if healthy { "connected" } else { "disconnected" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        statistics,
    };

    if healthy {
        HttpResponse::Ok().json(ApiResponse::success("Service healthy", response))
    } else {
        HttpResponse::ServiceUnavailable().json(ApiResponse {
            success: false,
            message: "Service unavailable".to_string(),
            data: Some(response),
        })
    }
}
