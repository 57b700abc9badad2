use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::CollectionClient;
use crate::domain::{InventoryCreate, InventoryPatch, InventoryRecord, RecordId, TitleFilter};
use crate::inventory_actor::StoreError;
use crate::store::RecordStore;

/// Client for the inventory collection actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: CollectionClient<InventoryRecord>,
}

impl InventoryClient {
    pub fn new(inner: CollectionClient<InventoryRecord>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordStore for InventoryClient {
    #[instrument(skip(self))]
    async fn find_one(&self, filter: &TitleFilter) -> Result<Option<InventoryRecord>, StoreError> {
        debug!("Sending request");
        self.inner.find_one(filter.clone()).await.map_err(StoreError::from_actor)
    }

    #[instrument(skip(self, record), fields(title = %record.title))]
    async fn insert_one(&self, record: InventoryCreate) -> Result<RecordId, StoreError> {
        debug!("Sending request");
        self.inner.insert_one(record).await.map_err(StoreError::from_actor)
    }

    #[instrument(skip(self))]
    async fn update_one(&self, filter: &TitleFilter, patch: InventoryPatch) -> Result<u64, StoreError> {
        debug!("Sending request");
        self.inner.update_one(filter.clone(), patch).await.map_err(StoreError::from_actor)
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, filter: &TitleFilter) -> Result<u64, StoreError> {
        debug!("Sending request");
        self.inner.delete_one(filter.clone()).await.map_err(StoreError::from_actor)
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.ping().await.map_err(StoreError::from_actor)
    }
}
