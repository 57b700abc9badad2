use thiserror::Error;

use crate::inventory_actor::StoreError;
use crate::metadata::LookupError;

/// Errors that stop the process: startup, serving, and shutdown failures.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Inventory store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
    #[error("Metadata lookup setup failed: {0}")]
    Lookup(#[from] LookupError),
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
