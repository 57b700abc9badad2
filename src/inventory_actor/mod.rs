//! Inventory-specific document bindings for the collection actor.

pub mod entity;
pub mod error;

pub use error::*;
