//! PostgreSQL database connector and utilities
//!
//! Provides connection management, schema sync and health checks.

mod config;
mod connector;
mod health;
mod schema;

pub use config::PostgresConfig;
pub use connector::{close, connect_from_config_with_retry};
pub use health::check_health;
pub use schema::create_table_if_not_exists;

// Re-export SeaORM types for convenience
pub use sea_orm::{DatabaseConnection, DbErr};
