//! The record store seam the inventory service is built against.

use async_trait::async_trait;

use crate::domain::{InventoryCreate, InventoryPatch, InventoryRecord, RecordId, TitleFilter};
use crate::inventory_actor::StoreError;

/// Find/insert/update/delete primitives over the inventory collection.
///
/// Implementations must be safe to share across concurrent requests. Each
/// call is a single round trip; callers get no atomicity across calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_one(&self, filter: &TitleFilter) -> Result<Option<InventoryRecord>, StoreError>;

    /// Inserts a new record and returns the id the store assigned to it.
    async fn insert_one(&self, record: InventoryCreate) -> Result<RecordId, StoreError>;

    /// Applies `patch` to the first matching record. Returns the matched count.
    async fn update_one(&self, filter: &TitleFilter, patch: InventoryPatch) -> Result<u64, StoreError>;

    /// Removes the first matching record. Returns the deleted count.
    async fn delete_one(&self, filter: &TitleFilter) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
