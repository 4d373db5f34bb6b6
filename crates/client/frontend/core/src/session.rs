//! Per-turn interaction state machine.
//!
//! Models a turn as request/response: `Idle` (no frame) → `Rendered` (frame
//! displayed, controls enabled per membership) → `ActionEmitted` (one
//! accepted emission forwarded, further clicks dropped) → back to `Rendered`
//! when the replacement frame arrives. All gating here is advisory; the
//! runtime boundary re-validates every emission.
use tracing::{debug, warn};

use runtime::{
    EmitOutcome, Event, FrameEvent, InteractionEvent, RejectReason, Result, RuntimeHandle,
};

use crate::config::{FrontendConfig, MessageConfig};
use crate::event::{EventConsumer, EventImpact};
use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::view_model::ViewModel;

/// Where the session stands within the current turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionPhase {
    /// No frame yet.
    Idle,
    /// A frame is displayed and controls are live.
    Rendered,
    /// One emission was accepted; input is ignored until the next frame.
    ActionEmitted,
}

/// What a click attempt turned into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClickOutcome {
    /// Accepted at the boundary and forwarded to the engine.
    Emitted,
    /// The runtime boundary ignored it (engine-side legality is
    /// authoritative even when the UI thought the control was live).
    EngineIgnored(RejectReason),
    /// Control absent or disabled in the current view; `emit` was never
    /// called.
    NotClickable,
    /// An action was already emitted for this frame.
    AlreadyActed,
    /// Nothing is rendered yet.
    NoFrame,
}

/// Stateful interaction driver owned by a frontend's event loop.
pub struct InteractionSession {
    handle: RuntimeHandle,
    config: MessageConfig,
    phase: SessionPhase,
    view: Option<ViewModel>,
    messages: MessageLog,
}

impl InteractionSession {
    pub fn new(handle: RuntimeHandle, config: FrontendConfig) -> Self {
        let messages = MessageLog::new(config.messages.capacity);
        Self {
            handle,
            config: config.messages,
            phase: SessionPhase::Idle,
            view: None,
            messages,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn view(&self) -> Option<&ViewModel> {
        self.view.as_ref()
    }

    /// Click a coarse action control by slug.
    pub async fn click(&mut self, slug: &str) -> Result<ClickOutcome> {
        if let Some(blocked) = self.gate() {
            return Ok(blocked);
        }

        let clickable = self
            .view
            .as_ref()
            .and_then(|view| view.control(slug))
            .is_some_and(|control| control.enabled);
        if !clickable {
            debug!(target: "frontend::session", slug, "suppressing click on disabled control");
            return Ok(ClickOutcome::NotClickable);
        }

        let outcome = self.handle.emit(slug, None).await?;
        Ok(self.settle(slug, outcome))
    }

    /// Click a skill button by uid. Canonical frames route through the
    /// thing-interaction layer; legacy frames carry the uid in the registry
    /// and are emitted as a slug instead.
    pub async fn click_skill(&mut self, uid: &str) -> Result<ClickOutcome> {
        if let Some(blocked) = self.gate() {
            return Ok(blocked);
        }

        let Some(skill) = self
            .view
            .as_ref()
            .and_then(|view| view.skill(uid))
            .filter(|skill| skill.enabled)
            .cloned()
        else {
            debug!(target: "frontend::session", uid, "suppressing click on disabled skill");
            return Ok(ClickOutcome::NotClickable);
        };

        let outcome = if skill.legacy_slug {
            self.handle.emit(uid, None).await?
        } else {
            self.handle.emit_thing_click(uid).await?
        };
        Ok(self.settle(uid, outcome))
    }

    fn gate(&self) -> Option<ClickOutcome> {
        match self.phase {
            SessionPhase::Idle => Some(ClickOutcome::NoFrame),
            SessionPhase::ActionEmitted => Some(ClickOutcome::AlreadyActed),
            SessionPhase::Rendered => None,
        }
    }

    fn settle(&mut self, key: &str, outcome: EmitOutcome) -> ClickOutcome {
        match outcome {
            EmitOutcome::Accepted => {
                self.phase = SessionPhase::ActionEmitted;
                ClickOutcome::Emitted
            }
            EmitOutcome::Ignored(reason) => {
                warn!(
                    target: "frontend::session",
                    key,
                    ?reason,
                    "boundary ignored an emission the view considered live"
                );
                ClickOutcome::EngineIgnored(reason)
            }
        }
    }

    fn turn(&self) -> Option<u64> {
        self.view.as_ref().map(|view| view.turn.counter)
    }
}

impl EventConsumer for InteractionSession {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Frame(FrameEvent::Replaced(published)) => {
                let view = ViewModel::from_published(published);
                if self.config.show_turns {
                    let text = if view.battle_ended {
                        format!("The battle is over (turn {}).", view.turn.counter)
                    } else {
                        format!("Turn {}.", view.turn.counter)
                    };
                    self.messages.push(MessageEntry::new(
                        text,
                        Some(view.turn.counter),
                        MessageLevel::Info,
                    ));
                }
                self.view = Some(view);
                self.phase = SessionPhase::Rendered;
                EventImpact::redraw()
            }
            Event::Interaction(InteractionEvent::Accepted { request, .. }) => {
                self.messages.push(MessageEntry::new(
                    format!("Action `{}` sent.", request.key()),
                    self.turn(),
                    MessageLevel::Info,
                ));
                EventImpact::redraw()
            }
            Event::Interaction(InteractionEvent::Ignored { request, .. }) => {
                if self.config.show_rejected {
                    self.messages.push(MessageEntry::new(
                        format!("Action `{}` is not available right now.", request.key()),
                        self.turn(),
                        MessageLevel::Warning,
                    ));
                    EventImpact::redraw()
                } else {
                    EventImpact::none()
                }
            }
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.messages
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }
}
