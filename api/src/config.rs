use tm_core::services::{AuthServiceConfig, PasswordHasher, TokenServiceConfig};
use tm_shared::config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig,
};

/// Runtime configuration of the API server
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from(AppConfig::from_env())
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }

    pub fn token_service_config(&self) -> TokenServiceConfig {
        TokenServiceConfig::from(&self.auth.jwt)
    }

    pub fn auth_service_config(&self) -> AuthServiceConfig {
        AuthServiceConfig::from(&self.auth)
    }

    pub fn password_hasher(&self) -> PasswordHasher {
        PasswordHasher::new(self.auth.bcrypt_cost)
    }

    /// Start-up warnings about unsafe settings
    pub fn security_warnings(&self) -> Vec<&'static str> {
        AppConfig::from(self.clone()).security_warnings()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from(AppConfig::default())
    }
}

impl From<AppConfig> for Config {
    fn from(config: AppConfig) -> Self {
        Self {
            environment: config.environment,
            server: config.server,
            database: config.database,
            auth: config.auth,
            cors: config.cors,
            logging: config.logging,
        }
    }
}

impl From<Config> for AppConfig {
    fn from(config: Config) -> Self {
        Self {
            environment: config.environment,
            server: config.server,
            database: config.database,
            auth: config.auth,
            cors: config.cors,
            logging: config.logging,
        }
    }
}
