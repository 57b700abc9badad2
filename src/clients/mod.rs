mod inventory_client;

pub use inventory_client::InventoryClient;
