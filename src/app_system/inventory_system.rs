use std::sync::Arc;

use tracing::{error, info, warn};

use crate::actor_framework::CollectionActor;
use crate::clients::InventoryClient;
use crate::domain::{InventoryRecord, RecordId};
use crate::metadata::{IgdbLookup, LookupConfig, MetadataLookup, UnconfiguredLookup};
use crate::server::{AppState, ServerConfig};
use crate::service::{InventoryService, ServiceConfig};
use crate::store::RecordStore;

use super::SystemError;

/// The running application: the inventory collection actor and the service
/// built on top of it.
///
/// Responsible for starting the actor, wiring the service together, and
/// handling shutdown.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    pub service: Arc<InventoryService>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts the collection actor and checks it answers before building the
    /// service. Failing that check is fatal.
    pub async fn start(
        config: &ServerConfig,
        lookup: Option<LookupConfig>,
        service_config: ServiceConfig,
    ) -> Result<Self, SystemError> {
        info!("Starting inventory system");

        // 1. Inventory collection
        let (actor, collection) = CollectionActor::<InventoryRecord>::new(
            "inventory",
            config.channel_capacity,
            RecordId::generate,
        );
        let inventory_client = InventoryClient::new(collection);
        let inventory_handle = tokio::spawn(actor.run());

        if let Err(e) = inventory_client.ping().await {
            error!(error = %e, "Inventory store did not answer");
            return Err(e.into());
        }

        // 2. Metadata lookup
        let lookup: Arc<dyn MetadataLookup> = match lookup {
            Some(lookup_config) => {
                info!(url = %lookup_config.url, "Metadata lookup enabled");
                Arc::new(IgdbLookup::new(lookup_config)?)
            }
            None => {
                warn!("IGDB credentials not set, every search will report not found");
                Arc::new(UnconfiguredLookup)
            }
        };

        // 3. Service
        let service = Arc::new(InventoryService::new(
            Arc::new(inventory_client.clone()),
            lookup,
            service_config,
        ));

        Ok(Self {
            inventory_client,
            service,
            handles: vec![inventory_handle],
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            service: self.service.clone(),
        }
    }

    /// Drops every handle to the collection actor and waits for it to stop.
    /// Any `AppState` handed out must already be gone.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(format!("{:?}", e)));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
