mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod inventory_actor;
mod metadata;
mod server;
mod service;
mod store;

#[cfg(test)]
mod mock_framework;

use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app_system::{setup_tracing, InventorySystem, SystemError};
use crate::server::{CliArgs, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Setup tracing once for the entire application
    setup_tracing();

    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Inventory service failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> Result<(), SystemError> {
    let config = ServerConfig::from(&args);
    let system = InventorySystem::start(
        &config,
        args.to_lookup_config(),
        args.to_service_config(),
    )
    .await?;

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(addr = %listener.local_addr()?, "Inventory service listening");

    server::serve(listener, system.app_state(), shutdown_signal()).await?;

    system.shutdown().await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
