pub mod auth;
pub mod cors;
pub mod request_id;

pub use auth::{extract_bearer_token, AuthContext, JwtAuth, RequireRole, TokenVerifier};
pub use cors::create_cors;
pub use request_id::{RequestId, RequestIdMiddleware};
