/// Error type for connector setup and health checks.
///
/// Query-level failures are owned by the domain crates; this only covers
/// building clients from configuration.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// MongoDB driver error (bad connection string, driver setup)
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = DatabaseError::ConfigError("MongoDB connection string is empty".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: MongoDB connection string is empty"
        );
    }
}
