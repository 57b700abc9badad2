use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of an inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A price in dollars, persisted as a 32-bit float.
///
/// Converting from `f64` rounds to the nearest `f32` rather than rejecting
/// the extra precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(pub f32);

impl From<f64> for Dollars {
    fn from(amount: f64) -> Self {
        Self(amount as f32)
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A title-keyed inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub title: String,
    pub price: Dollars,
    pub quantity: i64,
    pub in_stock: bool,
    pub sku: u32,
}

/// Payload for inserting a new record. The store supplies the id.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryCreate {
    pub title: String,
    pub price: Dollars,
    pub quantity: i64,
    pub in_stock: bool,
    pub sku: u32,
}

/// The fields an update is allowed to touch.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryPatch {
    pub price: Dollars,
    pub quantity: i64,
    pub in_stock: bool,
}

/// Equality filter on `title`; the only query path into the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFilter {
    pub title: String,
}

impl TitleFilter {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl InventoryRecord {
    /// Creates a record with a fresh id. Mainly for seeding and tests; the
    /// collection actor assigns ids on insert.
    #[cfg(test)]
    pub fn new(
        title: impl Into<String>,
        price: impl Into<Dollars>,
        quantity: i64,
        in_stock: bool,
        sku: u32,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.into(),
            price: price.into(),
            quantity,
            in_stock,
            sku,
        }
    }
}
