use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{ItemError, ItemResult, REQUIRED_FIELDS_MESSAGE};

/// Current time at the precision MongoDB stores (milliseconds).
///
/// Timestamps handed to the store and returned to clients always go through
/// this, so a read-back value equals the value that was written.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub(crate) fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub(crate) fn from_bson_datetime(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// Item as stored in the `items` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub category: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

/// Insert shape; `_id` is left out so the store assigns it.
#[derive(Debug, Clone, Serialize)]
pub struct NewItemDocument {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub category: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl From<NewItem> for NewItemDocument {
    fn from(item: NewItem) -> Self {
        Self {
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            category: item.category,
            created_at: to_bson_datetime(item.created_at),
            updated_at: to_bson_datetime(item.updated_at),
        }
    }
}

/// Item as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// ObjectId as a 24 character hex string
    #[schema(example = "65f1c0a2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 9.99)]
    pub price: f64,
    pub quantity: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            price: doc.price,
            quantity: doc.quantity,
            category: doc.category,
            created_at: from_bson_datetime(doc.created_at),
            updated_at: from_bson_datetime(doc.updated_at),
        }
    }
}

/// Request body for creating an item
///
/// `name` and `price` are optional at the type level so a missing field is
/// reported as a validation error rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(required(message = "Name and price are required"))]
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[validate(required(message = "Name and price are required"))]
    #[schema(example = 9.99)]
    pub price: Option<f64>,
    /// Defaults to 0
    pub quantity: Option<f64>,
    /// Defaults to an empty string
    pub category: Option<String>,
}

/// Request body for updating an item. Only supplied fields are changed.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub category: Option<String>,
}

/// Validated insert payload with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewItem {
    /// Apply defaults and stamp both timestamps with `now`.
    pub fn new(input: CreateItem, now: DateTime<Utc>) -> ItemResult<Self> {
        let (Some(name), Some(price)) = (input.name, input.price) else {
            return Err(ItemError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        };

        Ok(Self {
            name,
            price,
            quantity: input.quantity.unwrap_or(0.0),
            category: input.category.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Field-level merge for an existing item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub category: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ItemChanges {
    pub fn new(input: UpdateItem, updated_at: DateTime<Utc>) -> Self {
        Self {
            name: input.name,
            price: input.price,
            quantity: input.quantity,
            category: input.category,
            updated_at,
        }
    }

    /// True when only `updated_at` would change
    pub fn is_touch_only(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.category.is_none()
    }
}

/// Body returned by a successful create
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "65f1c0a2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Item created successfully")]
    pub message: String,
}

/// Body returned by a successful update or delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
