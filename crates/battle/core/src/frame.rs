//! The per-render payload handed from engine to UI.
use serde::Serialize;

use crate::choice::ChoiceRegistry;
use crate::entity::Entity;
use crate::interaction::InteractiveSet;
use crate::scene::{SceneSnapshot, ValidationError};

/// Everything the render layer needs for one turn: the scene snapshot, the
/// slug registry, and the interactive uid set.
///
/// Immutable once built; the engine replaces the whole frame after each
/// processed action. Consumers re-render fully rather than patching.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnFrame {
    pub scene: SceneSnapshot,
    pub choices: ChoiceRegistry,
    pub interactive: InteractiveSet,
}

impl TurnFrame {
    pub fn new(scene: SceneSnapshot, choices: ChoiceRegistry, interactive: InteractiveSet) -> Self {
        Self {
            scene,
            choices,
            interactive,
        }
    }

    /// Validate raw parts into a frame (the engine-emission path).
    pub fn from_parts(
        root: Entity,
        choices: ChoiceRegistry,
        interactive: InteractiveSet,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(SceneSnapshot::validate(root)?, choices, interactive))
    }

    pub fn battle_ended(&self) -> bool {
        self.scene.battle_ended()
    }

    /// Soft inconsistencies worth surfacing without rejecting the frame.
    /// The engine stays authoritative; these exist for diagnosability.
    pub fn warnings(&self) -> Vec<FrameWarning> {
        let mut warnings = Vec::new();
        if self.battle_ended() {
            for slug in self.choices.combat_slugs() {
                warnings.push(FrameWarning::CombatSlugAfterEnd {
                    slug: slug.to_owned(),
                });
            }
        }
        for uid in self.interactive.iter() {
            if self.scene.find(uid).is_none() {
                warnings.push(FrameWarning::InteractiveUidNotInScene {
                    uid: uid.to_owned(),
                });
            }
        }
        warnings
    }
}

/// Non-fatal frame inconsistencies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameWarning {
    /// Terminal scene still offering a combat action slug.
    CombatSlugAfterEnd { slug: String },
    /// Interactive uid that resolves to no entity in the snapshot.
    InteractiveUidNotInScene { uid: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Category;

    fn ended_scene() -> Entity {
        Entity::with_category("scene-1", Category::Scene("Battle".into()))
            .with_meta("battle_ended", "true")
    }

    #[test]
    fn from_parts_rejects_bad_scenes() {
        let result = TurnFrame::from_parts(
            Entity::new(""),
            ChoiceRegistry::empty(),
            InteractiveSet::empty(),
        );
        assert_eq!(result.unwrap_err(), ValidationError::MissingRootUid);
    }

    #[test]
    fn terminal_frame_warns_on_combat_slugs() {
        let frame = TurnFrame::from_parts(
            ended_scene(),
            ChoiceRegistry::from_slugs(["tackle", "return-to-main-menu"]),
            InteractiveSet::empty(),
        )
        .unwrap();

        assert_eq!(
            frame.warnings(),
            vec![FrameWarning::CombatSlugAfterEnd {
                slug: "tackle".into()
            }]
        );
    }

    #[test]
    fn navigation_only_terminal_frame_is_clean() {
        let frame = TurnFrame::from_parts(
            ended_scene(),
            ChoiceRegistry::from_slugs(["return-to-main-menu", "rematch"]),
            InteractiveSet::empty(),
        )
        .unwrap();
        assert!(frame.warnings().is_empty());
    }

    #[test]
    fn dangling_interactive_uid_warns() {
        let frame = TurnFrame::from_parts(
            Entity::with_category("scene-1", Category::Scene("Battle".into())),
            ChoiceRegistry::empty(),
            InteractiveSet::from_uids(["ghost"]),
        )
        .unwrap();

        assert_eq!(
            frame.warnings(),
            vec![FrameWarning::InteractiveUidNotInScene {
                uid: "ghost".into()
            }]
        );
    }
}
