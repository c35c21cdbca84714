//! Application factory
//!
//! Wires middleware, extractor error handling and every route onto an
//! Actix-web `App`. Used by the binary and by the HTTP tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use tm_core::domain::entities::catalog::{Cart, CartDetail, Category, Product, Venture};
use tm_shared::config::CorsConfig;
use tm_shared::types::ErrorResponse;

use crate::handlers::{json_error_handler, path_error_handler, query_error_handler};
use crate::middleware::{create_cors, JwtAuth, RequestIdMiddleware, RequireRole};
use crate::routes::{auth, catalog, notes, system, users};
use crate::state::{AppState, CatalogRepositories};

/// Access log line including the request id
const LOG_FORMAT: &str = r#"%a "%r" %s %b %T %{x-request-id}o"#;

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    catalog: CatalogRepositories,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let jwt = JwtAuth::new(state.token_service.clone());

    App::new()
        .app_data(state)
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::Data::from(catalog.categories))
        .app_data(web::Data::from(catalog.products))
        .app_data(web::Data::from(catalog.ventures))
        .app_data(web::Data::from(catalog.carts))
        .app_data(web::Data::from(catalog.cart_details))
        // The last wrap runs first: CORS, then logging, then the request id
        .wrap(RequestIdMiddleware)
        .wrap(Logger::new(LOG_FORMAT))
        .wrap(create_cors(cors))
        .route("/", web::get().to(system::api_info))
        .route("/api-info", web::get().to(system::api_info))
        .route("/health", web::get().to(system::health_check))
        .service(
            web::scope("/api/auth")
                .route("/login", web::post().to(auth::login))
                .route("/register", web::post().to(auth::register))
                .service(
                    web::scope("")
                        .wrap(jwt.clone())
                        .route("/validate", web::get().to(auth::validate))
                        .route("/profile", web::get().to(auth::profile))
                        .route("/change-password", web::put().to(auth::change_password))
                        .route(
                            "/users",
                            web::get().to(auth::list_users).wrap(RequireRole::admin()),
                        ),
                ),
        )
        .service(
            web::scope("/api/users")
                .wrap(jwt.clone())
                .service(
                    web::resource("")
                        .route(web::get().to(users::list_users).wrap(RequireRole::manager()))
                        .route(web::post().to(users::create_user).wrap(RequireRole::admin())),
                )
                .route("/{id}/notes", web::get().to(users::get_user_notes))
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(users::get_user))
                        .route(web::put().to(users::update_user))
                        .route(web::delete().to(users::delete_user).wrap(RequireRole::admin())),
                ),
        )
        .service(
            web::scope("/api/notes")
                .wrap(jwt)
                .route("/search", web::get().to(notes::search_notes))
                .service(
                    web::resource("")
                        .route(web::get().to(notes::list_notes))
                        .route(web::post().to(notes::create_note)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(notes::get_note))
                        .route(web::put().to(notes::update_note))
                        .route(web::delete().to(notes::delete_note)),
                ),
        )
        .service(catalog::scope::<Category>("/api/categories"))
        .service(catalog::scope::<Product>("/api/products"))
        .service(catalog::scope::<Venture>("/api/ventures"))
        .service(catalog::scope::<Cart>("/api/carts"))
        .service(catalog::scope::<CartDetail>("/api/cart-details"))
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Endpoint not found"))
}
