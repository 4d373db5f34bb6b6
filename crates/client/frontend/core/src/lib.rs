//! Cross-frontend primitives for presenting a battle.
//!
//! Houses the frame-derived view model, the per-turn interaction state
//! machine, message logging, and the frontend trait that CLI or graphical
//! clients implement. Everything here is presentation-agnostic: no layout,
//! styling, or widget code.
pub mod config;
pub mod event;
pub mod frontend;
pub mod headless;
pub mod message;
pub mod session;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use headless::{HeadlessChoice, HeadlessFrontend};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use session::{ClickOutcome, InteractionSession, SessionPhase};
pub use view_model::{ActionControl, CombatantPanel, SkillControl, TurnView, ViewModel};
