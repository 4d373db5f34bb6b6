//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

use super::types::{FrameEvent, InteractionEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Frame replacements (the render trigger)
    Frame,
    /// Accepted/ignored interaction requests
    Interaction,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone)]
pub enum Event {
    Frame(FrameEvent),
    Interaction(InteractionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Frame(_) => Topic::Frame,
            Event::Interaction(_) => Topic::Interaction,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Delivery is push-based; no consumer ever polls
/// the session state on a timer.
pub struct EventBus {
    channels: Arc<RwLock<HashMap<Topic, broadcast::Sender<Event>>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();

        // Pre-create channels for each topic
        channels.insert(Topic::Frame, broadcast::channel(capacity).0);
        channels.insert(Topic::Interaction, broadcast::channel(capacity).0);

        Self {
            channels: Arc::new(RwLock::new(channels)),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        // Best-effort: if the lock is contended or nobody subscribed, the
        // event is simply dropped.
        match self.channels.try_read() {
            Ok(channels) => {
                if let Some(tx) = channels.get(&topic)
                    && tx.send(event).is_err()
                {
                    tracing::trace!(target: "runtime::events", "no subscribers for topic {:?}", topic);
                }
            }
            Err(_) => {
                tracing::debug!(
                    target: "runtime::events",
                    "failed to acquire event bus lock for topic {:?}",
                    topic
                );
            }
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        let channels = self
            .channels
            .try_read()
            .expect("event bus channel map is only write-locked during construction");
        channels
            .get(&topic)
            .expect("all topics are pre-created in with_capacity")
            .subscribe()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::ActionRequest;

    use crate::events::types::{InteractionEvent, RejectReason};

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::new();
        let mut interaction_rx = bus.subscribe(Topic::Interaction);
        let _frame_rx = bus.subscribe(Topic::Frame);

        bus.publish(Event::Interaction(InteractionEvent::Ignored {
            seq: 0,
            request: ActionRequest::slug("quit"),
            reason: RejectReason::SlugNotAvailable,
        }));

        let event = interaction_rx.recv().await.unwrap();
        assert!(matches!(
            event,
            Event::Interaction(InteractionEvent::Ignored { .. })
        ));
        assert!(interaction_rx.try_recv().is_err());
    }
}
