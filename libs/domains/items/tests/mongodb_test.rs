//! MongoDB repository tests
//!
//! Run against a throwaway MongoDB container from `test-utils`; they need
//! Docker and are ignored by default:
//!
//! ```text
//! cargo test -p domain_items --test mongodb_test -- --ignored
//! ```

use domain_items::{CreateItem, ItemError, ItemService, MongoItemRepository, UpdateItem};
use mongodb::bson::oid::ObjectId;
use std::time::Duration;
use test_utils::{TestDataBuilder, TestMongo};

fn service(mongo: &TestMongo, test_name: &str) -> ItemService<MongoItemRepository> {
    let builder = TestDataBuilder::from_test_name(test_name);
    let repo = MongoItemRepository::new(mongo.database(&builder.database_name()));
    ItemService::new(repo)
}

fn widget(price: f64) -> CreateItem {
    CreateItem {
        name: Some("Widget".into()),
        price: Some(price),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_then_get_round_trips_timestamps() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo, "mongo_create_get");

    let id = service.create_item(widget(9.5)).await.unwrap();
    let item = service.get_item(id).await.unwrap();

    assert_eq!(item.id, id.to_hex());
    assert_eq!(item.quantity, 0.0);
    assert_eq!(item.category, "");
    assert_eq!(item.created_at, item.updated_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_merges_fields_and_refreshes_updated_at() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo, "mongo_update");

    let id = service.create_item(widget(5.0)).await.unwrap();
    let before = service.get_item(id).await.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    service
        .update_item(
            id,
            UpdateItem {
                price: Some(99.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let after = service.get_item(id).await.unwrap();
    assert_eq!(after.price, 99.0);
    assert_eq!(after.name, before.name);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_ids_are_not_found() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo, "mongo_missing");
    let missing = ObjectId::new();

    assert!(matches!(
        service.get_item(missing).await,
        Err(ItemError::NotFound(_))
    ));
    assert!(matches!(
        service.update_item(missing, UpdateItem::default()).await,
        Err(ItemError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_item(missing).await,
        Err(ItemError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_and_delete() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo, "mongo_list_delete");

    let first = service.create_item(widget(1.0)).await.unwrap();
    let second = service.create_item(widget(2.0)).await.unwrap();

    let items = service.list_items().await.unwrap();
    assert_eq!(items.len(), 2);

    service.delete_item(first).await.unwrap();
    let items = service.list_items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, second.to_hex());
}
