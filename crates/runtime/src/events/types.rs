//! Event types for different topics.
use std::sync::Arc;

use battle_core::{ActionRequest, TurnFrame};

/// A frame together with its monotonic sequence number.
///
/// `seq` increases by one per replacement; UI layers use it to pair emitted
/// actions with the frame they acted on.
#[derive(Clone, Debug)]
pub struct PublishedFrame {
    pub seq: u64,
    pub frame: Arc<TurnFrame>,
}

impl PublishedFrame {
    pub fn new(seq: u64, frame: TurnFrame) -> Self {
        Self {
            seq,
            frame: Arc::new(frame),
        }
    }
}

/// Events on the `Frame` topic: the snapshot-replaced notifications that
/// replace state polling.
#[derive(Clone, Debug)]
pub enum FrameEvent {
    /// A new frame supersedes everything rendered so far. Consumers
    /// re-render fully from it.
    Replaced(PublishedFrame),
}

/// Why an emission was ignored at the runtime boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Slug not present in the frame's choice registry.
    SlugNotAvailable,
    /// Uid not present in the frame's interactive set.
    ThingNotAvailable,
}

/// Events on the `Interaction` topic: the fate of emitted actions.
#[derive(Clone, Debug)]
pub enum InteractionEvent {
    /// Request passed the boundary check and was forwarded to the engine.
    Accepted { seq: u64, request: ActionRequest },

    /// Request referenced nothing legal in the current frame; no state
    /// changed.
    Ignored {
        seq: u64,
        request: ActionRequest,
        reason: RejectReason,
    },
}
