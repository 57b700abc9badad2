//! The inventory record lifecycle: search, create, update, delete.

mod inventory_service;
pub mod params;
mod reply;

pub use inventory_service::{InventoryService, ServiceConfig};
pub use reply::Reply;
