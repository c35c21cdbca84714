//! CORS configuration for browser clients.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use tm_shared::config::CorsConfig;

/// Builds the CORS middleware from configuration
///
/// `*` in the origin list allows any origin; otherwise only the listed
/// origins are accepted. Unknown method or header names are skipped.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| method.parse().ok())
        .collect();
    let headers: Vec<header::HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|name| header::HeaderName::from_bytes(name.as_bytes()).ok())
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(headers)
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("CORS accepts any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_listed_origin_is_echoed() {
        let config = CorsConfig {
            allowed_origins: vec!["https://club.example".to_string()],
            ..CorsConfig::default()
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://club.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://club.example"
        );
    }
}
