//! Bearer token authentication and role gates for protected endpoints.
//!
//! [`JwtAuth`] resolves the `Authorization: Bearer <token>` header to the
//! live user and stores it in the request extensions as an [`AuthContext`].
//! [`RequireRole`] runs inside it and rejects callers below a required role.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;

use tm_core::{
    domain::entities::user::{Role, User},
    errors::{AuthError, DomainError, DomainResult},
    repositories::UserRepository,
    services::{authorization, token::TokenService},
};

use crate::handlers::ApiError;

/// Identity bound to an authenticated request
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The caller as currently stored, not as claimed by the token
    pub user: User,
}

impl AuthContext {
    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Resolves a bearer token to its user
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_bearer(&self, token: &str) -> DomainResult<User>;
}

#[async_trait]
impl<U: UserRepository + ?Sized> TokenVerifier for TokenService<U> {
    async fn verify_bearer(&self, token: &str) -> DomainResult<User> {
        self.verify(token).await
    }
}

/// Extracts the token of an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(req: &HttpRequest) -> Result<String, AuthError> {
    let header = req.headers().get(AUTHORIZATION).ok_or(AuthError::MissingToken)?;
    let value = header.to_str().map_err(|_| AuthError::MalformedHeader)?;

    match value.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    verifier: Arc<dyn TokenVerifier>,
}

impl JwtAuth {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: self.verifier.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn TokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = self.verifier.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(req.request()) {
                Ok(token) => token,
                Err(error) => {
                    log::debug!("Rejected {} {}: {}", req.method(), req.path(), error);
                    return Ok(reject(req, error.into()));
                }
            };

            let user = match verifier.verify_bearer(&token).await {
                Ok(user) => user,
                Err(DomainError::Token(reason)) => {
                    log::debug!("Token rejected on {}: {}", req.path(), reason);
                    return Ok(reject(req, AuthError::InvalidOrExpiredToken.into()));
                }
                Err(error) => return Ok(reject(req, error.into())),
            };

            req.extensions_mut().insert(AuthContext { user });

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Role gate; must run inside [`JwtAuth`]
#[derive(Debug, Clone, Copy)]
pub struct RequireRole {
    required: Role,
}

impl RequireRole {
    pub fn new(required: Role) -> Self {
        Self { required }
    }

    pub fn admin() -> Self {
        Self::new(Role::Admin)
    }

    pub fn manager() -> Self {
        Self::new(Role::Manager)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            required: self.required,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    required: Role,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let required = self.required;

        Box::pin(async move {
            let caller = req.extensions().get::<AuthContext>().map(AuthContext::role);

            match caller {
                None => return Ok(reject(req, AuthError::NotAuthenticated.into())),
                Some(actual) if !authorization::role_satisfies(actual.as_str(), required) => {
                    log::info!(
                        "Denied {} {}: requires {}, caller is {}",
                        req.method(),
                        req.path(),
                        required,
                        actual
                    );
                    return Ok(reject(req, AuthError::InsufficientRole { required, actual }.into()));
                }
                Some(_) => {}
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn reject<B>(req: ServiceRequest, error: ApiError) -> ServiceResponse<EitherBody<B>> {
    let response = error.error_response();
    req.into_response(response).map_into_right_body()
}

/// Extractor for the authenticated caller
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| AuthError::NotAuthenticated.into());

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req), Ok("test_token_123".to_string()));
    }

    #[test]
    fn test_missing_header() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(extract_bearer_token(&req), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_other_schemes_are_malformed() {
        for value in ["Token abc", "bearer abc", "Bearer", "Bearer   ", "abc"] {
            let req = TestRequest::default()
                .insert_header((AUTHORIZATION, value))
                .to_http_request();
            assert_eq!(
                extract_bearer_token(&req),
                Err(AuthError::MalformedHeader),
                "header {:?}",
                value
            );
        }
    }
}
