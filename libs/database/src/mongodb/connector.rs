use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Parse the connection string and apply pool/timeouts from `config`.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    if config.url.trim().is_empty() {
        return Err(DatabaseError::ConfigError(
            "MongoDB connection string is empty".to_string(),
        ));
    }

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client without contacting the server.
///
/// The driver connects on first use, so the service can start (and answer
/// liveness probes) while MongoDB is still unreachable.
#[instrument(skip(config), fields(url = %config.redacted_url()))]
pub async fn connect_lazy(config: &MongoConfig) -> DatabaseResult<Client> {
    let options = client_options(config).await?;
    let client = Client::with_options(options)?;
    info!("MongoDB client configured");
    Ok(client)
}
