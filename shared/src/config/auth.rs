//! Token signing and credential hashing settings

use serde::{Deserialize, Serialize};

use super::{env_flag, env_parse};

const DEVELOPMENT_SECRET: &str = "dev-secret-key-change-in-production";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret shared by signing and verification
    pub secret: String,
    /// Lifetime of issued tokens in seconds
    pub access_token_expiry: i64,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEVELOPMENT_SECRET.to_string(),
            access_token_expiry: 3600,
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// `JWT_SECRET`, then `SECRET_KEY`, then the development secret
    pub fn from_env() -> Self {
        let secret = ["JWT_SECRET", "SECRET_KEY"]
            .iter()
            .find_map(|key| std::env::var(key).ok().filter(|value| !value.is_empty()))
            .unwrap_or_else(|| DEVELOPMENT_SECRET.to_string());

        Self {
            secret,
            access_token_expiry: env_parse("JWT_ACCESS_TOKEN_EXPIRY").unwrap_or(3600),
            algorithm: default_algorithm(),
        }
    }

    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEVELOPMENT_SECRET
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub jwt: JwtConfig,

    /// bcrypt work factor for new password hashes
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Lets `POST /api/auth/register` ask for manager or admin
    #[serde(default)]
    pub allow_role_self_registration: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
            allow_role_self_registration: false,
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            bcrypt_cost: env_parse("BCRYPT_COST").unwrap_or_else(default_bcrypt_cost),
            allow_role_self_registration: env_flag("ALLOW_ROLE_SELF_REGISTRATION"),
        }
    }
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_bcrypt_cost() -> u32 {
    12
}
