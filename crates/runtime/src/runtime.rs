//! High-level runtime orchestrator.
//!
//! The runtime owns the background session worker, wires up command/event
//! channels, and exposes a builder-based API for clients to drive a battle
//! session.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{BattleEngine, Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, FrameEvent, PublishedFrame};
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that mediates between a battle engine and its UIs.
///
/// Design: Runtime owns the worker and coordinates shutdown.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    session_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.session_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    engine: Option<Box<dyn BattleEngine>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            engine: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required battle engine
    pub fn engine(mut self, engine: impl BattleEngine + 'static) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    /// Set an already-boxed battle engine.
    ///
    /// This is useful when the engine was chosen dynamically.
    pub fn engine_boxed(mut self, engine: Box<dyn BattleEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Build the runtime.
    ///
    /// Asks the engine for the opening frame, spawns the session worker, and
    /// publishes the opening frame so early subscribers see it too.
    pub async fn build(self) -> Result<Runtime> {
        let mut engine = self.engine.ok_or(RuntimeError::MissingEngine)?;

        let initial = engine
            .initial_frame()
            .await
            .map_err(RuntimeError::Engine)?;
        let initial = PublishedFrame::new(0, initial);

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = SessionWorker::new(engine, initial.clone(), command_rx, event_bus.clone());
        let session_worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        event_bus.publish(Event::Frame(FrameEvent::Replaced(initial)));

        Ok(Runtime {
            handle,
            session_worker_handle,
        })
    }
}
