//! In-memory implementation of ItemRepository
//!
//! Same observable behavior as the MongoDB repository: ids are fresh
//! ObjectIds, listing follows insertion order, updates merge supplied fields.
//! Used by the handler tests and for running the API without a database.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemChanges, ItemDocument, NewItem, NewItemDocument, to_bson_datetime};
use crate::repository::ItemRepository;

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<ItemDocument>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self, item), fields(item_name = %item.name))]
    async fn insert(&self, item: NewItem) -> ItemResult<ObjectId> {
        let id = ObjectId::new();
        let doc = NewItemDocument::from(item);

        self.items.write().await.push(ItemDocument {
            id,
            name: doc.name,
            price: doc.price,
            quantity: doc.quantity,
            category: doc.category,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        });

        Ok(id)
    }

    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().cloned().map(Item::from).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|doc| doc.id == id).cloned().map(Item::from))
    }

    #[instrument(skip(self, changes), fields(item_id = %id))]
    async fn update(&self, id: ObjectId, changes: ItemChanges) -> ItemResult<bool> {
        let mut items = self.items.write().await;
        let Some(doc) = items.iter_mut().find(|doc| doc.id == id) else {
            return Ok(false);
        };

        if let Some(name) = changes.name {
            doc.name = name;
        }
        if let Some(price) = changes.price {
            doc.price = price;
        }
        if let Some(quantity) = changes.quantity {
            doc.quantity = quantity;
        }
        if let Some(category) = changes.category {
            doc.category = category;
        }
        doc.updated_at = to_bson_datetime(changes.updated_at);

        Ok(true)
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn delete(&self, id: ObjectId) -> ItemResult<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|doc| doc.id != id);
        Ok(items.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateItem, UpdateItem, now};

    fn new_item(name: &str, price: f64) -> NewItem {
        NewItem::new(
            CreateItem {
                name: Some(name.into()),
                price: Some(price),
                ..Default::default()
            },
            now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryItemRepository::new();
        let first = repo.insert(new_item("a", 1.0)).await.unwrap();
        let second = repo.insert(new_item("b", 2.0)).await.unwrap();

        let items = repo.find_all().await.unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![first.to_hex(), second.to_hex()]);
    }

    #[tokio::test]
    async fn test_update_merges_supplied_fields() {
        let repo = InMemoryItemRepository::new();
        let id = repo.insert(new_item("a", 1.0)).await.unwrap();

        let changes = ItemChanges::new(
            UpdateItem {
                quantity: Some(4.0),
                ..Default::default()
            },
            now(),
        );
        assert!(repo.update(id, changes).await.unwrap());

        let item = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(item.name, "a");
        assert_eq!(item.quantity, 4.0);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_missing() {
        let repo = InMemoryItemRepository::new();
        let missing = ObjectId::new();

        let changes = ItemChanges::new(UpdateItem::default(), now());
        assert!(!repo.update(missing, changes).await.unwrap());
        assert!(!repo.delete(missing).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let repo = InMemoryItemRepository::new();
        let id = repo.insert(new_item("a", 1.0)).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }
}
