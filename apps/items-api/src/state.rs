//! Shared application state.

use mongodb::{Client, Database};

/// Cloned into each router that needs it (cheap: the client is an `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Shares the driver's connection pool across clones
    pub mongo_client: Client,
    pub db: Database,
}
