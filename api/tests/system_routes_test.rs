//! Service description, health and fallback routes

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use common::TestContext;
use tm_core::domain::entities::user::Role;

#[actix_web::test]
async fn test_root_describes_the_api() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn test_health_reports_statistics() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("boss", Role::Admin).await;
    let client = ctx.seed_user("rafa", Role::Client).await;
    ctx.seed_user("ana", Role::Client).await;
    ctx.seed_note(&client, "Footwork").await;
    ctx.seed_note(&admin, "Budget").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Service healthy");
    let stats = &body["data"]["statistics"];
    assert_eq!(stats["total_users"], 3);
    assert_eq!(stats["total_notes"], 2);
    assert_eq!(stats["admins"], 1);
    assert_eq!(stats["managers"], 0);
    assert_eq!(stats["clients"], 2);
}

#[actix_web::test]
async fn test_health_degrades_when_store_fails() {
    let ctx = TestContext::new();
    ctx.users.set_unavailable(true);
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Service unavailable");
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/rackets").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Endpoint not found");
}
