//! Hex map editor binary.
//!
//! Configuration comes from `HEXMAP_*` environment variables, optionally
//! loaded from a `.env` file in the working directory.
//!
//! ```bash
//! HEXMAP_SAVE_DIR=./maps HEXMAP_APPEND_JSON_EXTENSION=true cargo run -p hexmap-client
//! ```

use anyhow::Result;
use hexmap_client::{CliApp, CliConfig, logging};
use hexmap_runtime::RuntimeConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (file only; the TUI owns the terminal)
    let _log_guard = logging::setup_logging(&cli_config)?;

    tracing::info!("Starting hexmap editor");
    tracing::info!("Save directory: {}", runtime_config.save_dir.display());
    tracing::info!(
        "Texture timeout: {:?}, append .json: {}",
        runtime_config.texture_timeout,
        runtime_config.append_json_extension
    );

    // 3. Resolve textures and assemble the session
    let app = CliApp::builder(runtime_config, cli_config).build().await?;

    // 4. Run until the user quits
    app.execute().await?;

    tracing::info!("Editor shutdown complete");
    Ok(())
}
