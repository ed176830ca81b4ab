//! Standalone live sync binary
//!
//! Runs the price sync engine headless against a Stocker server, logging
//! every display patch. The page it keeps fresh is seeded from the config
//! file.
//!
//! ## Setup
//!
//! 1. Optionally create a `.env` file in the project root:
//!    ```
//!    STOCKER_SERVER__BASE_URL=http://127.0.0.1:5000
//!    ```
//!
//! 2. Run against a config:
//!    ```bash
//!    cargo run --bin stocker_sync -- --config config.toml
//!    ```

use std::env;

use log::error;

use stocker_sync::runner::SyncRunner;

#[tokio::main]
async fn main() {
    // Load .env file before config, which reads the environment
    dotenvy::dotenv().ok();

    // Parse arguments
    let args: Vec<String> = env::args().collect();
    let config_path = if args.len() > 2 && args[1] == "--config" {
        args[2].clone()
    } else {
        "config".to_string()
    };

    let runner = match SyncRunner::new(&config_path) {
        Ok(runner) => runner,
        Err(e) => {
            env_logger::try_init().ok();
            error!("Failed to load config {config_path:?}: {e}");
            return;
        }
    };

    if let Err(e) = runner.run().await {
        error!("Sync runner exited with error: {e}");
    }
}
