//! Session worker that owns the authoritative [`battle_core::TurnFrame`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), gates
//! them against the current frame's legality sets, forwards accepted
//! requests to the [`BattleEngine`], and publishes events to the EventBus.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use battle_core::{ActionRequest, FrameWarning};

use crate::api::engine::BattleEngine;
use crate::api::errors::{Result, RuntimeError};
use crate::api::handle::EmitOutcome;
use crate::events::{Event, EventBus, FrameEvent, InteractionEvent, PublishedFrame, RejectReason};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Emit one player intent. Replies with whether the boundary accepted it.
    Emit {
        request: ActionRequest,
        reply: oneshot::Sender<Result<EmitOutcome>>,
    },
    /// Query the currently published frame (read-only).
    QueryFrame {
        reply: oneshot::Sender<PublishedFrame>,
    },
}

/// Background task that processes interaction commands.
///
/// Commands are handled strictly serially: an accepted emission is resolved
/// and its replacement frame published before the next command is read, so
/// there is exactly one in-flight action per frame by construction.
pub struct SessionWorker {
    engine: Box<dyn BattleEngine>,
    current: PublishedFrame,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub fn new(
        engine: Box<dyn BattleEngine>,
        initial: PublishedFrame,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        log_frame_warnings(&initial);
        tracing::info!(
            target: "runtime::session",
            scene = initial.frame.scene.uid(),
            choices = initial.frame.choices.len(),
            "session worker initialized"
        );

        Self {
            engine,
            current: initial,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Emit { request, reply } => {
                let result = self.handle_emit(request).await;
                if reply.send(result).is_err() {
                    debug!(target: "runtime::session", "Emit reply channel closed (caller dropped)");
                }
            }
            Command::QueryFrame { reply } => {
                if reply.send(self.current.clone()).is_err() {
                    debug!(target: "runtime::session", "QueryFrame reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Boundary check and engine forwarding for one emission.
    ///
    /// The UI's `disabled` gating is advisory; this re-validation is the
    /// authoritative one. Illegal requests change nothing and are answered
    /// with an `Ignored` outcome plus a single warning log.
    async fn handle_emit(&mut self, request: ActionRequest) -> Result<EmitOutcome> {
        let reason = match &request {
            ActionRequest::Slug { slug, .. } if !self.current.frame.choices.contains(slug) => {
                Some(RejectReason::SlugNotAvailable)
            }
            ActionRequest::Thing { uid } if !self.current.frame.interactive.contains(uid) => {
                Some(RejectReason::ThingNotAvailable)
            }
            _ => None,
        };

        if let Some(reason) = reason {
            warn!(
                target: "runtime::session",
                key = request.key(),
                seq = self.current.seq,
                ?reason,
                "ignoring emission not legal in the current frame"
            );
            self.event_bus
                .publish(Event::Interaction(InteractionEvent::Ignored {
                    seq: self.current.seq,
                    request,
                    reason,
                }));
            return Ok(EmitOutcome::Ignored(reason));
        }

        let acted_seq = self.current.seq;
        let next = self
            .engine
            .resolve(request.clone(), &self.current.frame)
            .await
            .map_err(RuntimeError::Engine)?;

        self.current = PublishedFrame::new(acted_seq + 1, next);
        log_frame_warnings(&self.current);

        self.event_bus
            .publish(Event::Interaction(InteractionEvent::Accepted {
                seq: acted_seq,
                request,
            }));
        self.event_bus
            .publish(Event::Frame(FrameEvent::Replaced(self.current.clone())));

        Ok(EmitOutcome::Accepted)
    }
}

fn log_frame_warnings(published: &PublishedFrame) {
    for warning in published.frame.warnings() {
        match warning {
            FrameWarning::CombatSlugAfterEnd { slug } => warn!(
                target: "runtime::session",
                seq = published.seq,
                slug,
                "terminal frame still offers a combat slug"
            ),
            FrameWarning::InteractiveUidNotInScene { uid } => warn!(
                target: "runtime::session",
                seq = published.seq,
                uid,
                "interactive uid resolves to no entity in the scene"
            ),
        }
    }
}
