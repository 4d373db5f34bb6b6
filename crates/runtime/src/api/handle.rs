//! Cloneable façade for issuing interaction requests to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! emitting actions and streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::ActionRequest;

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, PublishedFrame, RejectReason, Topic};
use crate::workers::Command;

/// What happened to an emission at the runtime boundary.
///
/// Emissions are fire-and-forget as far as battle state goes: an ignored
/// request changes nothing, and the caller is only told so it can log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Forwarded to the engine; the replacement frame has been published.
    Accepted,
    /// Not legal in the current frame; no observable state change.
    Ignored(RejectReason),
}

impl EmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Emit a coarse action by slug (`emit(slug, payload?)` in protocol
    /// terms). A slug outside the current choice registry is a no-op.
    pub async fn emit(
        &self,
        slug: impl Into<String>,
        payload: Option<serde_json::Value>,
    ) -> Result<EmitOutcome> {
        self.send_request(ActionRequest::Slug {
            slug: slug.into(),
            payload,
        })
        .await
    }

    /// Emit a click on one interactive entity (`emitThingClick(uid)`). A uid
    /// outside the current interactive set is a no-op.
    pub async fn emit_thing_click(&self, uid: impl Into<String>) -> Result<EmitOutcome> {
        self.send_request(ActionRequest::thing(uid)).await
    }

    /// Emit an already-built request.
    pub async fn send_request(&self, request: ActionRequest) -> Result<EmitOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Emit {
                request,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the currently published frame (read-only).
    pub async fn current_frame(&self) -> Result<PublishedFrame> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryFrame { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Frame` - frame replacements (the render trigger)
    /// - `Topic::Interaction` - accepted/ignored emissions
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
