//! Polymorphic entity shape shared by every domain object.
//!
//! Players, creatures, skills, and the scene root all use the same
//! [`Entity`] struct; variant-specific behavior hangs off the
//! `meta.category` discriminant via [`EntityVariant`] and the typed views.
mod base;
mod variant;

pub use base::{DEFAULT_NAME, Entity};
pub use variant::{Category, CreatureView, EntityVariant, PlayerView, SceneView, SkillView};
