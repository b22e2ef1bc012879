use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        url = %config.mongodb.redacted_url(),
        database = config.mongodb.database(),
        collection = config.mongodb.collection(),
        "Configuring MongoDB client"
    );

    // The driver connects on first use; an unreachable store must not stop
    // the service from starting.
    let mongo_client = database::mongodb::connect_lazy(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    let probe = mongo_client.clone();
    tokio::spawn(async move {
        let status = database::mongodb::check_health_detailed(&probe).await;
        if status.healthy {
            info!(
                response_time_ms = status.response_time_ms,
                "MongoDB reachable"
            );
        } else {
            warn!(
                error = status.message.as_deref().unwrap_or("unknown"),
                "MongoDB not reachable at startup; requests will fail until it is"
            );
        }
    });

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let app = api::app(&state)?;

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        "Starting Items API with graceful shutdown (30s timeout)"
    );

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            // The driver closes pooled connections on drop
            drop(state.mongo_client);
            info!("MongoDB connection closed");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
