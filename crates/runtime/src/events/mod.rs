//! Topic-based event routing between the session worker and subscribers.
pub mod bus;
pub mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{FrameEvent, InteractionEvent, PublishedFrame, RejectReason};
