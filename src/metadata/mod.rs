//! External game metadata lookup.
//!
//! The service only needs one call: search by title, returning whatever
//! attribute maps the provider knows about.

mod error;
mod igdb;

pub use error::LookupError;
pub use igdb::{IgdbLookup, LookupConfig};

use async_trait::async_trait;
use serde_json::{Map, Value};

/// One provider result: a generic attribute map.
pub type Attributes = Map<String, Value>;

#[async_trait]
pub trait MetadataLookup: Send + Sync {
    async fn search_by_title(&self, title: &str) -> Result<Vec<Attributes>, LookupError>;
}

/// Lookup used when no provider credentials are configured. Every search fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredLookup;

#[async_trait]
impl MetadataLookup for UnconfiguredLookup {
    async fn search_by_title(&self, _title: &str) -> Result<Vec<Attributes>, LookupError> {
        Err(LookupError::NotConfigured)
    }
}
