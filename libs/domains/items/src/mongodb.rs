//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use database::mongodb::DEFAULT_COLLECTION;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemChanges, ItemDocument, NewItem, NewItemDocument, to_bson_datetime};
use crate::repository::ItemRepository;

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Repository over the default `items` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoItemRepository::new(client.database("crud_db"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<ItemDocument>(collection_name);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<ItemDocument> {
        &self.collection
    }

    /// `$set` of the supplied fields plus `updated_at`
    fn build_update(changes: &ItemChanges) -> Document {
        let mut set = doc! { "updated_at": to_bson_datetime(changes.updated_at) };

        if let Some(ref name) = changes.name {
            set.insert("name", name.as_str());
        }

        if let Some(price) = changes.price {
            set.insert("price", price);
        }

        if let Some(quantity) = changes.quantity {
            set.insert("quantity", quantity);
        }

        if let Some(ref category) = changes.category {
            set.insert("category", category.as_str());
        }

        doc! { "$set": set }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, item), fields(item_name = %item.name))]
    async fn insert(&self, item: NewItem) -> ItemResult<ObjectId> {
        let result = self
            .collection
            .clone_with_type::<NewItemDocument>()
            .insert_one(NewItemDocument::from(item))
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ItemError::Database(format!(
                "insert returned a non-ObjectId _id: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(item_id = %id, "Item inserted");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<ItemDocument> = cursor.try_collect().await?;

        Ok(docs.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> ItemResult<Option<Item>> {
        let doc = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(doc.map(Item::from))
    }

    #[instrument(skip(self, changes), fields(item_id = %id))]
    async fn update(&self, id: ObjectId, changes: ItemChanges) -> ItemResult<bool> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, Self::build_update(&changes))
            .await?;

        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn delete(&self, id: ObjectId) -> ItemResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UpdateItem, now};
    use mongodb::bson::Bson;

    #[test]
    fn test_build_update_touch_only() {
        let changes = ItemChanges::new(UpdateItem::default(), now());
        let update = MongoItemRepository::build_update(&changes);

        let set = update.get_document("$set").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains_key("updated_at"));
    }

    #[test]
    fn test_build_update_sets_only_supplied_fields() {
        let changes = ItemChanges::new(
            UpdateItem {
                price: Some(99.0),
                category: Some("tools".into()),
                ..Default::default()
            },
            now(),
        );
        let update = MongoItemRepository::build_update(&changes);

        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get("price"), Some(&Bson::Double(99.0)));
        assert_eq!(set.get_str("category").unwrap(), "tools");
        assert!(!set.contains_key("name"));
        assert!(!set.contains_key("quantity"));
    }

    #[test]
    fn test_build_update_keeps_fractional_quantity() {
        let changes = ItemChanges::new(
            UpdateItem {
                quantity: Some(2.5),
                ..Default::default()
            },
            now(),
        );
        let update = MongoItemRepository::build_update(&changes);

        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get("quantity"), Some(&Bson::Double(2.5)));
    }
}
