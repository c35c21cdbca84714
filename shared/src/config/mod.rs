//! Settings read once at start-up, grouped by concern
//!
//! - `auth` - token signing and password hashing
//! - `database` - MySQL pool
//! - `environment` - deployment environment and log filter
//! - `server` - listener and CORS

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Value of `key` parsed as `T`; `None` when unset or unparsable
pub(crate) fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|value| value.trim().parse().ok())
}

/// `1`, `true` or `yes` in any case
pub(crate) fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Risky settings to log at start-up
    pub fn security_warnings(&self) -> Vec<&'static str> {
        let production = self.environment.is_production();
        let mut warnings = Vec::new();
        if production && self.auth.jwt.is_using_default_secret() {
            warnings.push("JWT_SECRET is not set; tokens are signed with the development secret");
        }
        if production && self.cors.allows_any_origin() {
            warnings.push("CORS accepts any origin in production");
        }
        if self.auth.allow_role_self_registration {
            warnings.push("Public registration may assign elevated roles");
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults_are_quiet() {
        assert!(AppConfig::default().security_warnings().is_empty());
    }

    #[test]
    fn test_production_defaults_warn() {
        let config = AppConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert_eq!(config.security_warnings().len(), 2);
    }

    #[test]
    fn test_self_registration_always_warns() {
        let mut config = AppConfig::default();
        config.auth.allow_role_self_registration = true;
        assert_eq!(
            config.security_warnings(),
            vec!["Public registration may assign elevated roles"]
        );
    }

    #[test]
    fn test_unset_variables_yield_nothing() {
        assert_eq!(env_parse::<u16>("TM_TEST_SURELY_UNSET_VARIABLE"), None);
        assert!(!env_flag("TM_TEST_SURELY_UNSET_VARIABLE"));
    }
}
