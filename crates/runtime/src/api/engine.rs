//! Asynchronous abstraction over the battle-resolution engine.
//!
//! Battle rules, damage formulas, and opponent behavior live outside this
//! workspace; the runtime only sees them through [`BattleEngine`]. The
//! engine is the sole authority on legality and next-state — everything the
//! UI does ahead of it is advisory.
use std::collections::VecDeque;

use async_trait::async_trait;
use thiserror::Error;

use battle_core::{ActionRequest, TurnFrame, ValidationError};

/// Failure reported by an engine while producing a frame.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ValidationError> for EngineError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.to_string())
    }
}

/// Trait for resolving accepted action requests into the next frame.
///
/// Different implementations can back this with:
/// - A full battle simulation
/// - A network bridge to a remote engine
/// - Scripted fixtures for tests and replays
#[async_trait]
pub trait BattleEngine: Send {
    /// Produce the opening frame for a session.
    async fn initial_frame(&mut self) -> std::result::Result<TurnFrame, EngineError>;

    /// Resolve one accepted request against the current frame and return the
    /// replacement frame. Only requests that passed the registry/thing-set
    /// membership check at the runtime boundary arrive here.
    async fn resolve(
        &mut self,
        request: ActionRequest,
        current: &TurnFrame,
    ) -> std::result::Result<TurnFrame, EngineError>;
}

/// Engine fixture that replays a pre-built frame sequence.
///
/// Each accepted request pops the next queued frame; once the script is
/// exhausted the current frame is returned unchanged. Useful for tests and
/// replay tooling.
pub struct ScriptedEngine {
    frames: VecDeque<TurnFrame>,
}

impl ScriptedEngine {
    pub fn new(frames: impl IntoIterator<Item = TurnFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

#[async_trait]
impl BattleEngine for ScriptedEngine {
    async fn initial_frame(&mut self) -> std::result::Result<TurnFrame, EngineError> {
        self.frames
            .pop_front()
            .ok_or_else(|| EngineError::new("scripted engine has no frames"))
    }

    async fn resolve(
        &mut self,
        _request: ActionRequest,
        current: &TurnFrame,
    ) -> std::result::Result<TurnFrame, EngineError> {
        Ok(self.frames.pop_front().unwrap_or_else(|| current.clone()))
    }
}
