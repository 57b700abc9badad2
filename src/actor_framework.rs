use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (Documents, Filters, and Patches)
// =============================================================================

/// Trait that any document must implement to be stored in a CollectionActor
pub trait Document: Clone + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type Insert: Send + Sync + Debug;
    type Filter: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the document
    fn id(&self) -> &Self::Id;

    /// Construct the full document from the store-assigned ID and the insert payload
    fn from_insert(id: Self::Id, payload: Self::Insert) -> Result<Self, String>;

    /// Exact field equality against the filter
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks ---

    fn on_insert(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> { Ok(()) }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, String>>;

/// Error reported when the actor's mailbox is closed.
pub const ACTOR_CLOSED: &str = "Actor closed";
/// Error reported when the actor dropped the reply channel without answering.
pub const ACTOR_DROPPED: &str = "Actor dropped";

#[derive(Debug)]
pub enum CollectionRequest<T: Document> {
    FindOne {
        filter: T::Filter,
        respond_to: Response<Option<T>>,
    },
    InsertOne {
        payload: T::Insert,
        respond_to: Response<T::Id>,
    },
    UpdateOne {
        filter: T::Filter,
        patch: T::Patch,
        respond_to: Response<u64>,
    },
    DeleteOne {
        filter: T::Filter,
        respond_to: Response<u64>,
    },
    Ping {
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one collection of documents. Every read and write goes through the
/// actor's mailbox, so callers never share the underlying storage.
///
/// Documents are kept in insertion order; `find_one`, `update_one` and
/// `delete_one` act on the first match, the way a document database does
/// without a sort.
pub struct CollectionActor<T: Document> {
    name: String,
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    documents: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Document> CollectionActor<T> {
    pub fn new(
        name: impl Into<String>,
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            name: name.into(),
            receiver,
            documents: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "collection_actor", skip(self), fields(collection = %self.name))]
    pub async fn run(mut self) {
        info!("Collection actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::FindOne { filter, respond_to } => {
                    let found = self.position(&filter).map(|i| self.documents[i].clone());
                    let _ = respond_to.send(Ok(found));
                }
                CollectionRequest::InsertOne { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_insert(payload));
                }
                CollectionRequest::UpdateOne { filter, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(filter, patch));
                }
                CollectionRequest::DeleteOne { filter, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(filter));
                }
                CollectionRequest::Ping { respond_to } => {
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(documents = self.documents.len(), "Collection actor stopped");
    }

    fn position(&self, filter: &T::Filter) -> Option<usize> {
        self.documents.iter().position(|doc| doc.matches(filter))
    }

    fn handle_insert(&mut self, payload: T::Insert) -> Result<T::Id, String> {
        let id = (self.next_id_fn)();
        let mut doc = T::from_insert(id.clone(), payload)?;
        doc.on_insert()?;
        self.documents.push(doc);
        debug!(%id, "Document inserted");
        Ok(id)
    }

    fn handle_update(&mut self, filter: T::Filter, patch: T::Patch) -> Result<u64, String> {
        match self.position(&filter) {
            Some(i) => {
                self.documents[i].on_update(patch)?;
                debug!(id = %self.documents[i].id(), "Document updated");
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn handle_delete(&mut self, filter: T::Filter) -> Result<u64, String> {
        match self.position(&filter) {
            Some(i) => {
                self.documents[i].on_delete()?;
                let removed = self.documents.remove(i);
                debug!(id = %removed.id(), "Document deleted");
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn find_one(&self, filter: T::Filter) -> Result<Option<T>, String> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(CollectionRequest::FindOne { filter, respond_to })
            .await.map_err(|_| ACTOR_CLOSED.to_string())?;
        response.await.map_err(|_| ACTOR_DROPPED.to_string())?
    }

    pub async fn insert_one(&self, payload: T::Insert) -> Result<T::Id, String> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(CollectionRequest::InsertOne { payload, respond_to })
            .await.map_err(|_| ACTOR_CLOSED.to_string())?;
        response.await.map_err(|_| ACTOR_DROPPED.to_string())?
    }

    pub async fn update_one(&self, filter: T::Filter, patch: T::Patch) -> Result<u64, String> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(CollectionRequest::UpdateOne { filter, patch, respond_to })
            .await.map_err(|_| ACTOR_CLOSED.to_string())?;
        response.await.map_err(|_| ACTOR_DROPPED.to_string())?
    }

    pub async fn delete_one(&self, filter: T::Filter) -> Result<u64, String> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(CollectionRequest::DeleteOne { filter, respond_to })
            .await.map_err(|_| ACTOR_CLOSED.to_string())?;
        response.await.map_err(|_| ACTOR_DROPPED.to_string())?
    }

    pub async fn ping(&self) -> Result<(), String> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(CollectionRequest::Ping { respond_to })
            .await.map_err(|_| ACTOR_CLOSED.to_string())?;
        response.await.map_err(|_| ACTOR_DROPPED.to_string())?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
