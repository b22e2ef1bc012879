//! MongoDB connector and utilities
//!
//! Provides client construction from [`MongoConfig`] and a ping-based health check.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_URI, MongoConfig};
pub use connector::{client_options, connect_lazy};
pub use health::{HealthStatus, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
