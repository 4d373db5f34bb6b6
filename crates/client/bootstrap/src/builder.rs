//! Builds the runtime and config bundle used by front-ends.
use anyhow::{Context, Result};

use runtime::{BattleEngine, Runtime};

use crate::config::ClientConfig;

/// Builder that assembles the runtime and configuration for clients.
pub struct SessionBuilder {
    config: ClientConfig,
    engine: Option<Box<dyn BattleEngine>>,
}

impl SessionBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            engine: None,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Provide the battle engine backing this session.
    pub fn engine(mut self, engine: impl BattleEngine + 'static) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    pub async fn build(self) -> Result<ClientSetup> {
        let engine = self
            .engine
            .context("a battle engine must be provided before building the client")?;

        let runtime = Runtime::builder()
            .config(self.config.runtime.clone())
            .engine_boxed(engine)
            .build()
            .await
            .context("starting the battle runtime")?;

        tracing::info!(target: "client::bootstrap", "battle session ready");

        Ok(ClientSetup {
            config: self.config,
            runtime,
        })
    }
}

/// Everything a frontend needs to run: configuration plus the live runtime.
pub struct ClientSetup {
    pub config: ClientConfig,
    pub runtime: Runtime,
}
