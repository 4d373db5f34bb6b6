//! Battle client binary.
//!
//! Composition root that assembles:
//! 1. Runtime (interaction boundary) via client-bootstrap
//! 2. Engine (battle resolution) - the bundled demo engine
//! 3. Frontend (UI) - the headless auto-playing reference frontend
//!
//! ```bash
//! RUST_LOG=info cargo run -p battle-client
//! ```

use anyhow::Result;

use battle_client::{Client, DemoEngine};
use client_bootstrap::SessionBuilder;
use client_frontend_core::{FrontendConfig, HeadlessFrontend};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting battle client");

    // 1. Build the runtime around the demo engine
    let setup = SessionBuilder::from_env()
        .engine(DemoEngine::builtin())
        .build()
        .await?;

    // 2. Build the frontend
    let frontend_config = FrontendConfig::from_env();
    let frontend = HeadlessFrontend::first_enabled(frontend_config);

    // 3. Compose and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
