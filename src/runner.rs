use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::api::StockerClient;
use crate::config::Settings;
use crate::events::{Dispatcher, Event, EventKind};
use crate::surface::{LogSurface, Surface};
use crate::sync::PriceSyncController;
use crate::view::{Patch, Route};

/// Runner for the standalone sync engine
///
/// Wires the configured page view, the HTTP client, and the controller
/// together, then polls until ctrl-c (the page-teardown analog).
pub struct SyncRunner {
    config: Settings,
}

impl SyncRunner {
    /// Create a new runner from a configuration file
    pub fn new(config_path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let config = Settings::new(config_path.as_ref().to_str().unwrap_or("config"))?;
        Ok(Self { config })
    }

    pub fn from_settings(config: Settings) -> Self {
        Self { config }
    }

    /// Run the sync loop
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        // 1. Setup Logging
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", &self.config.log.level);
        }
        env_logger::try_init().ok();

        info!("Starting SyncRunner...");

        // 2. Build client and page view from config
        let api = Arc::new(StockerClient::new(self.config.server.base_url.clone()));
        let view = self.config.page.view();
        info!(
            "Page seeded: route={:?}, {} cards, {} rows",
            view.route,
            view.cards.len(),
            view.rows.len()
        );

        // 3. Event wiring: card clicks navigate to the trade page
        let mut dispatcher = Dispatcher::new();
        dispatcher.subscribe(EventKind::CardClicked, |event| {
            if let Event::CardClicked(symbol) = event {
                LogSurface.apply(&Patch::Navigate {
                    route: Route::Trade(symbol.clone()),
                });
            }
        });

        // 4. Start live updates
        let mut controller = PriceSyncController::new(
            api,
            view,
            Box::new(LogSurface),
            self.config.sync_config(),
        );
        controller.start().await;

        if !controller.is_running() {
            info!("Nothing priced on the configured page; exiting");
            return Ok(());
        }

        // 5. Poll until teardown
        tokio::signal::ctrl_c().await?;
        info!("Shutting down...");
        dispatcher.dispatch(&Event::PageUnload);
        controller.stop();

        Ok(())
    }
}
