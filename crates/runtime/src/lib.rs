//! Runtime orchestration for the engine/UI interaction boundary.
//!
//! This crate hosts the authoritative side of the protocol: a session worker
//! owns the current [`battle_core::TurnFrame`], validates every emitted
//! action against it, forwards accepted requests to the [`BattleEngine`],
//! and pushes frame replacements to subscribers over a topic-based event
//! bus. Consumers hold a cloneable [`RuntimeHandle`] and never touch the
//! worker directly.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the push/subscribe bus replacing state polling
//! - `workers` keeps the background session task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    BattleEngine, EmitOutcome, EngineError, Result, RuntimeError, RuntimeHandle, ScriptedEngine,
};
pub use events::{
    Event, EventBus, FrameEvent, InteractionEvent, PublishedFrame, RejectReason, Topic,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
