use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ItemResult;
use crate::models::{Item, ItemChanges, NewItem};

/// Persistence for items
///
/// Every method is a single store call. Deciding what "not found" means is
/// left to the service, so `update` and `delete` report whether a document
/// matched instead of failing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item and return the identifier the store assigned
    async fn insert(&self, item: NewItem) -> ItemResult<ObjectId>;

    /// All items in the store's natural order
    async fn find_all(&self) -> ItemResult<Vec<Item>>;

    async fn find_by_id(&self, id: ObjectId) -> ItemResult<Option<Item>>;

    /// Apply `changes` to the item; `false` when no item matched
    async fn update(&self, id: ObjectId, changes: ItemChanges) -> ItemResult<bool>;

    /// `false` when no item was deleted
    async fn delete(&self, id: ObjectId) -> ItemResult<bool>;
}
