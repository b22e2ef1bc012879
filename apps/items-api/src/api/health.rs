//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;
use serde_json::Value;
use std::time::Duration;

use crate::state::AppState;

/// Upper bound for a readiness probe, independent of driver timeouts.
const READY_TIMEOUT: Duration = Duration::from_secs(3);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// 200 `{"status":"ready","mongodb":"connected"}` or 503 when MongoDB does not answer
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let client = &state.mongo_client;

    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "mongodb",
        Box::pin(async move {
            match tokio::time::timeout(READY_TIMEOUT, check_health_detailed(client)).await {
                Ok(status) if status.healthy => Ok(()),
                Ok(status) => Err(status.message.unwrap_or_else(|| "unhealthy".to_string())),
                Err(_) => Err(format!("no answer within {:?}", READY_TIMEOUT)),
            }
        }),
    )];

    run_health_checks(checks).await
}
