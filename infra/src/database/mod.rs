//! Database layer: pooled MySQL connections, schema and repositories

pub mod connection;
pub mod mysql;
pub mod schema;

#[cfg(test)]
mod tests;

pub use connection::{DatabasePool, PoolStatistics};
