//! Item Service - one repository call per operation

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemChanges, NewItem, UpdateItem, now};
use crate::repository::ItemRepository;

/// Item operations over any [`ItemRepository`]
///
/// Applies creation defaults, stamps timestamps, and turns "nothing matched"
/// into [`ItemError::NotFound`].
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create an item; `quantity` defaults to 0 and `category` to "".
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<ObjectId> {
        let item = NewItem::new(input, now())?;
        let id = self.repository.insert(item).await?;

        tracing::info!(item_id = %id, "Item created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self), fields(item_id = %id))]
    pub async fn get_item(&self, id: ObjectId) -> ItemResult<Item> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Merge supplied fields into the item and refresh `updated_at`.
    ///
    /// An update with no fields still succeeds for an existing item.
    ///
    /// `updated_at` is stamped at millisecond precision without reading the
    /// prior value, so it only moves forward when at least 1 ms has passed
    /// since the previous write. Two writes inside the same millisecond
    /// leave it equal, never earlier.
    #[instrument(skip(self, input), fields(item_id = %id))]
    pub async fn update_item(&self, id: ObjectId, input: UpdateItem) -> ItemResult<()> {
        let changes = ItemChanges::new(input, now());
        let touch_only = changes.is_touch_only();

        if !self.repository.update(id, changes).await? {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = %id, touch_only, "Item updated");
        Ok(())
    }

    #[instrument(skip(self), fields(item_id = %id))]
    pub async fn delete_item(&self, id: ObjectId) -> ItemResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = %id, "Item deleted");
        Ok(())
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
