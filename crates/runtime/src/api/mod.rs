//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration or workers.

pub mod engine;
pub mod errors;
pub mod handle;

pub use engine::{BattleEngine, EngineError, ScriptedEngine};
pub use errors::{Result, RuntimeError};
pub use handle::{EmitOutcome, RuntimeHandle};
