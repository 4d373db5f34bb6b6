//! Validated scene snapshots.
//!
//! A snapshot is one immutable render of battle state: the engine emits one
//! per turn, the UI re-renders fully and never patches it. Construction goes
//! through [`SceneSnapshot::validate`] so a malformed payload surfaces a
//! typed error instead of rendering partially.
use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::entity::{Category, CreatureView, Entity, PlayerView, SceneView};

/// Keys under which the opposing side may appear. A snapshot carries at most
/// one of them.
pub const OPPOSING_SIDE_KEYS: [&str; 3] = ["opponent", "foe", "bot"];

const PLAYER_KEY: &str = "player";
const PLAYER_CREATURE_KEY: &str = "player_creature";

/// Shape violations that reject a snapshot outright. Anything softer than
/// these renders a documented fallback instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("scene root entity has no uid")]
    MissingRootUid,

    #[error("scene root entity `{uid}` has no meta.category tag")]
    MissingRootCategory { uid: String },

    #[error("scene root entity `{uid}` is tagged `{category}`, not a scene")]
    NonSceneRoot { uid: String, category: String },

    #[error("nested entity under `{parent_uid}` has no uid")]
    MissingNestedUid { parent_uid: String },

    #[error("uid `{uid}` appears more than once in the snapshot")]
    DuplicateUid { uid: String },

    #[error("snapshot carries both `{first}` and `{second}` opposing-side keys")]
    AmbiguousOpposingSide { first: String, second: String },
}

/// One consistent instant of battle state, shape-checked at construction.
///
/// Entities inside are owned by the snapshot and none of them outlive it;
/// `uid` is the only value comparable across snapshots.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SceneSnapshot {
    root: Entity,
}

impl SceneSnapshot {
    /// Validate a root entity into a snapshot.
    pub fn validate(root: Entity) -> Result<Self, ValidationError> {
        if root.uid.is_empty() {
            return Err(ValidationError::MissingRootUid);
        }
        match root.category() {
            None => {
                return Err(ValidationError::MissingRootCategory {
                    uid: root.uid.clone(),
                });
            }
            Some(Category::Scene(_)) => {}
            Some(other) => {
                return Err(ValidationError::NonSceneRoot {
                    uid: root.uid.clone(),
                    category: other.to_string(),
                });
            }
        }

        check_uids(&root)?;
        check_opposing_side(&root)?;

        Ok(Self { root })
    }

    /// Parse and validate a JSON payload (the engine→UI wire shape).
    pub fn from_json(payload: &str) -> Result<Self, SnapshotParseError> {
        let root: Entity = serde_json::from_str(payload)?;
        Ok(Self::validate(root)?)
    }

    pub fn root(&self) -> &Entity {
        &self.root
    }

    pub fn into_inner(self) -> Entity {
        self.root
    }

    pub fn uid(&self) -> &str {
        &self.root.uid
    }

    pub fn scene(&self) -> SceneView<'_> {
        SceneView(&self.root)
    }

    pub fn battle_ended(&self) -> bool {
        self.scene().battle_ended()
    }

    pub fn player(&self) -> Option<PlayerView<'_>> {
        self.root.entity(PLAYER_KEY).map(PlayerView)
    }

    /// The one opposing side present, under whichever observed key it uses.
    pub fn opponent(&self) -> Option<PlayerView<'_>> {
        OPPOSING_SIDE_KEYS
            .iter()
            .find_map(|key| self.root.entity(key))
            .map(PlayerView)
    }

    /// Active player combatant: the denormalized `player_creature` key first,
    /// then the player side's `active_creature`.
    pub fn player_creature(&self) -> Option<CreatureView<'_>> {
        self.root
            .entity(PLAYER_CREATURE_KEY)
            .map(CreatureView)
            .or_else(|| self.player().and_then(|side| side.active_creature()))
    }

    /// Active opposing combatant, resolved symmetrically to
    /// [`Self::player_creature`] (`<side>_creature`, then `active_creature`).
    pub fn opponent_creature(&self) -> Option<CreatureView<'_>> {
        OPPOSING_SIDE_KEYS
            .iter()
            .find_map(|key| self.root.entity(&format!("{key}_creature")))
            .map(CreatureView)
            .or_else(|| self.opponent().and_then(|side| side.active_creature()))
    }

    /// Entity lookup by uid anywhere in the snapshot.
    pub fn find(&self, uid: &str) -> Option<&Entity> {
        self.root.walk().find(|entity| entity.uid == uid)
    }
}

/// Errors from [`SceneSnapshot::from_json`]: malformed JSON or a payload
/// that parsed but failed shape validation.
#[derive(Debug, Error)]
pub enum SnapshotParseError {
    #[error("snapshot payload is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Shape(#[from] ValidationError),
}

fn check_uids(root: &Entity) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    let mut stack = vec![root];

    while let Some(entity) = stack.pop() {
        if !seen.insert(entity.uid.as_str()) {
            return Err(ValidationError::DuplicateUid {
                uid: entity.uid.clone(),
            });
        }
        for child in entity
            .entities
            .values()
            .chain(entity.collections.values().flatten())
        {
            if child.uid.is_empty() {
                return Err(ValidationError::MissingNestedUid {
                    parent_uid: entity.uid.clone(),
                });
            }
            stack.push(child);
        }
    }

    Ok(())
}

fn check_opposing_side(root: &Entity) -> Result<(), ValidationError> {
    let mut present = OPPOSING_SIDE_KEYS
        .iter()
        .filter(|key| root.entities.contains_key(**key));

    if let (Some(first), Some(second)) = (present.next(), present.next()) {
        return Err(ValidationError::AmbiguousOpposingSide {
            first: (*first).to_owned(),
            second: (*second).to_owned(),
        });
    }
    Ok(())
}
