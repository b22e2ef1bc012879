//! Items API routes

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::state::AppState;

/// Items router over the configured collection
pub fn router(state: &AppState) -> Router {
    let repository =
        MongoItemRepository::with_collection(state.db.clone(), state.config.mongodb.collection());
    let service = ItemService::new(repository);

    handlers::router(service)
}
