//! MySQL connection pool
//!
//! Wraps an SQLx pool with start-up retries for a server that is still
//! booting, a liveness probe and schema creation.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool,
};
use tracing::log::LevelFilter;

use tm_shared::config::DatabaseConfig;

use super::schema::SCHEMA;
use crate::InfrastructureError;

const SLOW_STATEMENT_THRESHOLD: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Opens a pool with a single attempt
    ///
    /// An unparsable URL is [`InfrastructureError::Config`]; a refused or
    /// timed out connection is [`InfrastructureError::Database`].
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let statement_level = if config.enable_logging {
            LevelFilter::Info
        } else {
            LevelFilter::Debug
        };
        let options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(statement_level)
            .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT_THRESHOLD);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(options)
            .await?;

        tracing::info!(max_connections = config.max_connections, "MySQL pool ready");
        Ok(Self { pool, config })
    }

    /// Opens a pool, retrying while the server is unreachable
    ///
    /// Up to `connect_retries` attempts `retry_delay` seconds apart; a bad
    /// URL is not retried.
    pub async fn connect_with_retry(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let attempts = config.connect_retries.max(1);
        let delay = Duration::from_secs(config.retry_delay);

        let mut attempt: u32 = 1;
        loop {
            match Self::new(config.clone()).await {
                Err(InfrastructureError::Database(error)) if attempt < attempts => {
                    tracing::warn!(attempt, attempts, %error, "MySQL not reachable yet");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    tracing::error!(attempt, %error, "Giving up on MySQL");
                    return Err(error);
                }
                Ok(pool) => return Ok(pool),
            }
        }
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Runs `SELECT 1`
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let value: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        if value != 1 {
            tracing::warn!(value, "Unexpected health probe result");
        }
        Ok(value == 1)
    }

    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("MySQL pool closed");
    }

    /// Creates missing tables; existing ones are left untouched
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await.map_err(|e| {
                tracing::error!(error = %e, "Schema statement failed");
                InfrastructureError::Database(e)
            })?;
        }

        tracing::info!(tables = SCHEMA.len(), "Schema up to date");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
