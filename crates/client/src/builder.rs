//! Builder assembling the client container.
use anyhow::{Context, Result};

use client_frontend_core::Frontend;
use runtime::Runtime;

use crate::Client;

/// Builder for [`Client`] with injected layers.
pub struct ClientBuilder {
    runtime: Option<Runtime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            runtime: None,
            frontend: None,
        }
    }

    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        Ok(Client {
            runtime: self.runtime.context("client requires a runtime")?,
            frontend: self.frontend.context("client requires a frontend")?,
        })
    }
}
