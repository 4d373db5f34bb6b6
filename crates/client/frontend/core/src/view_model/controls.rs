//! Action and skill control derivation.
use battle_core::{TurnFrame, is_navigation_slug};

/// One coarse action affordance, derived from the choice registry.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionControl {
    pub slug: String,
    pub label: String,
    pub navigation: bool,
    pub enabled: bool,
}

/// One skill button for the active player creature.
///
/// Enabled through the thing-interaction layer (canonical), or through a
/// uid-valued registry slug (an older engine convention, still accepted
/// on the read side).
#[derive(Clone, Debug, PartialEq)]
pub struct SkillControl {
    pub uid: String,
    pub label: String,
    pub damage: f64,
    pub skill_type: Option<String>,
    pub enabled: bool,
    /// True when enablement came from the registry rather than the
    /// interactive set; clicks then emit the uid as a slug.
    pub legacy_slug: bool,
}

pub(super) fn collect_actions(frame: &TurnFrame) -> Vec<ActionControl> {
    // Registry entries that are really player skill uids (legacy convention)
    // surface as skill controls instead of duplicate action buttons.
    let skill_uids: Vec<&str> = frame
        .scene
        .player_creature()
        .map(|creature| creature.skills().map(|skill| skill.uid()).collect())
        .unwrap_or_default();

    frame
        .choices
        .iter()
        .filter(|slug| !skill_uids.contains(slug))
        .map(|slug| ActionControl {
            slug: slug.to_owned(),
            label: label_for_slug(frame, slug),
            navigation: is_navigation_slug(slug),
            // Membership in the registry IS the legality check; a control is
            // only materialized for members.
            enabled: true,
        })
        .collect()
}

pub(super) fn collect_skills(frame: &TurnFrame) -> Vec<SkillControl> {
    let Some(creature) = frame.scene.player_creature() else {
        return Vec::new();
    };

    creature
        .skills()
        .map(|skill| {
            let uid = skill.uid().to_owned();
            let interactive = frame.interactive.contains(&uid);
            let legacy_slug = !interactive && frame.choices.contains(&uid);
            SkillControl {
                label: skill.name().to_owned(),
                damage: skill.damage(),
                skill_type: skill.skill_type().map(str::to_owned),
                enabled: interactive || legacy_slug,
                legacy_slug,
                uid,
            }
        })
        .collect()
}

/// Humanize a slug for display, preferring the display name of a matching
/// scene entity when the registry carries a uid.
fn label_for_slug(frame: &TurnFrame, slug: &str) -> String {
    if let Some(entity) = frame.scene.find(slug) {
        return entity.name().to_owned();
    }
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{Category, ChoiceRegistry, Entity, InteractiveSet};

    #[test]
    fn slug_labels_humanize() {
        let frame = TurnFrame::from_parts(
            Entity::with_category("s", Category::Scene("Menu".into())),
            ChoiceRegistry::from_slugs(["return-to-main-menu", "play"]),
            InteractiveSet::empty(),
        )
        .unwrap();

        let controls = collect_actions(&frame);
        assert_eq!(controls[0].label, "Return To Main Menu");
        assert!(controls[0].navigation);
        assert_eq!(controls[1].label, "Play");
    }

    #[test]
    fn uid_slugs_surface_as_skill_buttons_only() {
        let frame = TurnFrame::from_parts(
            Entity::with_category("s", Category::Scene("Battle".into())).with_entity(
                "player_creature",
                Entity::with_category("c-1", Category::Creature).with_collection(
                    "skills",
                    vec![Entity::with_category("tackle", Category::Skill).with_name("Tackle")],
                ),
            ),
            ChoiceRegistry::from_slugs(["tackle"]),
            InteractiveSet::empty(),
        )
        .unwrap();

        // The uid-slug shows up as the skill button only, not as a duplicate
        // action control.
        assert!(collect_actions(&frame).is_empty());
        let skills = collect_skills(&frame);
        assert!(skills[0].enabled);
        assert!(skills[0].legacy_slug);
    }
}
