//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Separation of Concerns
//!
//! - **Client**: composition root and lifecycle management
//! - **Runtime**: authoritative frame state and the interaction boundary
//! - **Frontend**: rendering and input, talking through `RuntimeHandle` only
//! - **Engine**: battle resolution behind the `BattleEngine` trait; the
//!   bundled [`DemoEngine`] is a stand-in for a real one

mod builder;
pub mod demo;

pub use builder::ClientBuilder;
pub use demo::DemoEngine;

use anyhow::Result;

use client_frontend_core::Frontend;
use runtime::Runtime;

/// Composition container tying a built runtime to a frontend.
pub struct Client {
    runtime: Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend to completion, then shut the runtime down.
    pub async fn run(mut self) -> Result<()> {
        let handle = self.runtime.handle();
        self.frontend.run(handle).await?;
        self.runtime.shutdown().await?;
        Ok(())
    }
}
