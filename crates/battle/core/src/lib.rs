//! Data contract between a creature-battle engine and its render layer.
//!
//! The engine hands the UI an immutable [`TurnFrame`] per turn: a validated
//! [`SceneSnapshot`] of battle state, the [`ChoiceRegistry`] of currently
//! legal action slugs, and the [`InteractiveSet`] of clickable entity uids.
//! The UI answers with a single [`ActionRequest`]. Nothing else crosses the
//! boundary.
pub mod choice;
pub mod entity;
pub mod frame;
pub mod interaction;
pub mod scene;

pub use choice::{ChoiceRegistry, NAVIGATION_SLUGS, is_navigation_slug};
pub use entity::{
    Category, CreatureView, DEFAULT_NAME, Entity, EntityVariant, PlayerView, SceneView, SkillView,
};
pub use frame::{FrameWarning, TurnFrame};
pub use interaction::{ActionRequest, InteractiveSet};
pub use scene::{OPPOSING_SIDE_KEYS, SceneSnapshot, SnapshotParseError, ValidationError};
