use thiserror::Error;

use crate::actor_framework::{ACTOR_CLOSED, ACTOR_DROPPED};

/// Errors surfaced by the record store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
    #[error("Document rejected: {0}")]
    RejectedDocument(String),
}

impl StoreError {
    /// Maps a collection actor error string. Channel failures are the
    /// framework's closed/dropped errors; anything else came from a document hook.
    pub fn from_actor(message: String) -> Self {
        if message == ACTOR_CLOSED || message == ACTOR_DROPPED {
            StoreError::ActorCommunicationError(message)
        } else {
            StoreError::RejectedDocument(message)
        }
    }
}
