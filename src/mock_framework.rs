//! # Mock Framework
//!
//! Utilities for testing store-driven logic in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_find_one`] or [`expect_insert_one`] to assert behavior.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{CollectionActor, CollectionClient, CollectionRequest, Document};
use crate::clients::InventoryClient;
use crate::domain::{InventoryRecord, RecordId};
use crate::metadata::{Attributes, LookupError, MetadataLookup};

type Reply<T> = oneshot::Sender<Result<T, String>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends messages to a channel the test controls instead of a
/// running `CollectionActor`, so each store round trip can be inspected and
/// answered (success, failure, or a miss) deterministically.
pub fn create_mock_client<T: Document>(buffer_size: usize) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Helper to verify that the next message is a FindOne request
pub async fn expect_find_one<T: Document>(receiver: &mut mpsc::Receiver<CollectionRequest<T>>) -> Option<(T::Filter, Reply<Option<T>>)> {
    match receiver.recv().await {
        Some(CollectionRequest::FindOne { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an InsertOne request
pub async fn expect_insert_one<T: Document>(receiver: &mut mpsc::Receiver<CollectionRequest<T>>) -> Option<(T::Insert, Reply<T::Id>)> {
    match receiver.recv().await {
        Some(CollectionRequest::InsertOne { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateOne request
pub async fn expect_update_one<T: Document>(receiver: &mut mpsc::Receiver<CollectionRequest<T>>) -> Option<(T::Filter, T::Patch, Reply<u64>)> {
    match receiver.recv().await {
        Some(CollectionRequest::UpdateOne { filter, patch, respond_to }) => Some((filter, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DeleteOne request
pub async fn expect_delete_one<T: Document>(receiver: &mut mpsc::Receiver<CollectionRequest<T>>) -> Option<(T::Filter, Reply<u64>)> {
    match receiver.recv().await {
        Some(CollectionRequest::DeleteOne { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Spawns a real inventory collection with predictable ids (`rec_1`, `rec_2`, ...).
pub fn spawn_inventory_store() -> InventoryClient {
    let counter = Arc::new(AtomicU64::new(1));
    let next_id = move || RecordId(format!("rec_{}", counter.fetch_add(1, Ordering::SeqCst)));
    let (actor, client) = CollectionActor::<InventoryRecord>::new("inventory", 16, next_id);
    tokio::spawn(actor.run());
    InventoryClient::new(client)
}

/// Metadata lookup that always answers with the same result.
pub struct FixedLookup(pub Result<Vec<Attributes>, LookupError>);

impl FixedLookup {
    pub fn found(name: &str) -> Self {
        let mut game = Attributes::new();
        game.insert("name".to_string(), name.into());
        Self(Ok(vec![game]))
    }

    pub fn failing() -> Self {
        Self(Err(LookupError::NoMatch("fixed".to_string())))
    }
}

#[async_trait]
impl MetadataLookup for FixedLookup {
    async fn search_by_title(&self, _title: &str) -> Result<Vec<Attributes>, LookupError> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TitleFilter;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<InventoryRecord>(10);

        // Test FindOne
        let find_task = tokio::spawn(async move {
            client.find_one(TitleFilter::new("Chess")).await
        });

        let (filter, responder) = expect_find_one(&mut receiver).await.expect("Expected FindOne request");
        assert_eq!(filter.title, "Chess");
        responder.send(Ok(None)).unwrap();

        let result = find_task.await.unwrap();
        assert_eq!(result, Ok(None));
    }
}
