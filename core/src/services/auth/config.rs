//! Configuration for the authentication service

use tm_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Whether public registration may request a role above client
    pub allow_role_self_registration: bool,
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            allow_role_self_registration: config.allow_role_self_registration,
        }
    }
}
