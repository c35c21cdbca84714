//! Bearer token gate and role gate behaviour

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use common::TestContext;
use tm_core::domain::entities::user::Role;
use tm_core::repositories::UserRepository;
use tm_core::services::{TokenService, TokenServiceConfig};

#[actix_web::test]
async fn test_missing_header_is_rejected() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/auth/profile").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Access token required");
}

#[actix_web::test]
async fn test_wrong_scheme_is_malformed() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(("Authorization", "Token abc"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token format. Use: Bearer <token>");
}

#[actix_web::test]
async fn test_garbage_token_is_invalid() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/validate")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid or expired token");
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("rafa", Role::Client).await;
    let expired = ctx.state.token_service.issue(&user, -60).unwrap().token;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", expired)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_foreign_signature_is_rejected() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("rafa", Role::Admin).await;
    let foreign = TokenService::new(ctx.users.clone(), TokenServiceConfig::new("another-secret"));
    let token = foreign.issue_access_token(&user).unwrap().token;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_deactivated_user_loses_access() {
    let ctx = TestContext::new();
    let mut user = ctx.seed_user("rafa", Role::Client).await;
    let header = ctx.bearer(&user);
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/validate")
        .insert_header(header.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    user.deactivate();
    ctx.users.update(user).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/validate")
        .insert_header(header)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_validate_reports_live_identity_and_permissions() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("coach", Role::Manager).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/validate")
        .insert_header(ctx.bearer(&user))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["valid"], true);
    assert_eq!(body["data"]["user"]["id"], user.id);
    assert_eq!(body["data"]["user"]["role"], "manager");
    assert_eq!(body["data"]["permissions"]["is_admin"], false);
    assert_eq!(body["data"]["permissions"]["is_manager"], true);
    assert_eq!(body["data"]["permissions"]["is_client"], true);
}

#[actix_web::test]
async fn test_insufficient_role_echoes_caller_role() {
    let ctx = TestContext::new();
    let client = ctx.seed_user("rafa", Role::Client).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header(ctx.bearer(&client))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user_role"], "client");
    assert_eq!(body["message"], "Access denied. Requires role: manager or higher");
}

#[actix_web::test]
async fn test_higher_role_passes_lower_gate() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("boss", Role::Admin).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header(ctx.bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_store_failure_is_internal_error() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("rafa", Role::Client).await;
    let header = ctx.bearer(&user);
    ctx.users.set_unavailable(true);
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/validate")
        .insert_header(header)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Internal server error");
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(("X-Request-ID", "req-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "req-42");

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));
}
