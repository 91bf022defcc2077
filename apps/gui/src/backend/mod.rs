//! Runs the catalog driver on its own thread and Tokio runtime.
//!
//! The UI talks to it only through [`CatalogHandle`]: commands go in over a
//! channel, snapshots come back through a watch, and every published snapshot
//! requests a repaint.

mod config;

pub use config::CatalogConfig;

use catalog::{CatalogDriver, CatalogHandle, HttpCatalogClient};
use std::sync::Arc;
use std::thread;
use tokio::runtime::Runtime;
use tracing::{error, info};

pub fn spawn_backend(
    config: &CatalogConfig,
    initial_search: String,
    ctx: egui::Context,
) -> CatalogHandle {
    let source = Arc::new(HttpCatalogClient::new(config.endpoint.clone()));
    info!("Starting catalog backend against {}", source.endpoint());

    let (driver, handle) = CatalogDriver::new(source, config.options(initial_search));
    let driver = driver.on_update(move || ctx.request_repaint());

    let spawned = thread::Builder::new()
        .name("catalog-backend".to_string())
        .spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to start the backend runtime: {e}");
                    return;
                }
            };
            rt.block_on(driver.run());
            info!("Catalog backend stopped");
        });

    // The driver is dropped with the closure, so the handle reports closed
    if let Err(e) = spawned {
        error!("Failed to spawn the backend thread: {e}");
    }

    handle
}
