//! Static creature and skill prototypes.
//!
//! Entities in a snapshot carry a `meta.prototype_id` pointing at the
//! template they were instantiated from; this crate owns those templates and
//! provides a RON loader for data-driven catalogs. Content is consumed by
//! engines when building scenes and never appears in protocol state itself.
pub mod prototypes;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use prototypes::{CreaturePrototype, PrototypeCatalog, SkillPrototype};

#[cfg(feature = "loaders")]
pub use loaders::load_catalog_ron;
