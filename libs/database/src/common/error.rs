/// Unified database error type for all database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Schema synchronisation failed
    #[error("Schema sync failed for table '{table}': {details}")]
    SchemaSync { table: String, details: String },
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
