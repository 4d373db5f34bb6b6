//! Prototype definitions and entity instantiation.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use battle_core::{Category, Entity, SkillView};

/// Template for a skill entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillPrototype {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical damage stat; instances carry it under `stats.damage`.
    pub damage: f64,
    #[serde(default)]
    pub skill_type: Option<String>,
    #[serde(default)]
    pub is_physical: bool,
}

/// Template for a creature entity, referencing skills by prototype id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreaturePrototype {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub max_hp: f64,
    pub attack: f64,
    pub defense: f64,
    #[serde(default)]
    pub sp_attack: f64,
    #[serde(default)]
    pub sp_defense: f64,
    pub speed: f64,
    pub skills: Vec<String>,
}

/// Lookup tables for every known prototype.
#[derive(Clone, Debug, Default)]
pub struct PrototypeCatalog {
    creatures: HashMap<String, CreaturePrototype>,
    skills: HashMap<String, SkillPrototype>,
}

impl PrototypeCatalog {
    pub fn new(
        creatures: impl IntoIterator<Item = CreaturePrototype>,
        skills: impl IntoIterator<Item = SkillPrototype>,
    ) -> Self {
        Self {
            creatures: creatures
                .into_iter()
                .map(|proto| (proto.id.clone(), proto))
                .collect(),
            skills: skills
                .into_iter()
                .map(|proto| (proto.id.clone(), proto))
                .collect(),
        }
    }

    /// Small built-in roster used by demos and tests.
    pub fn builtin() -> Self {
        Self::new(
            [
                CreaturePrototype {
                    id: "bubwool".into(),
                    display_name: "Bubwool".into(),
                    description: Some("A fluffy creature with a strong tackle.".into()),
                    max_hp: 30.0,
                    attack: 10.0,
                    defense: 8.0,
                    sp_attack: 6.0,
                    sp_defense: 6.0,
                    speed: 12.0,
                    skills: vec!["tackle".into(), "lick".into()],
                },
                CreaturePrototype {
                    id: "scizard".into(),
                    display_name: "Scizard".into(),
                    description: Some("A lizard with a tough hide.".into()),
                    max_hp: 40.0,
                    attack: 9.0,
                    defense: 11.0,
                    sp_attack: 7.0,
                    sp_defense: 7.0,
                    speed: 9.0,
                    skills: vec!["tackle".into(), "fireball".into()],
                },
            ],
            [
                SkillPrototype {
                    id: "tackle".into(),
                    display_name: "Tackle".into(),
                    description: Some("Throw yourself at a foe, dealing damage.".into()),
                    damage: 10.0,
                    skill_type: Some("normal".into()),
                    is_physical: true,
                },
                SkillPrototype {
                    id: "lick".into(),
                    display_name: "Lick".into(),
                    description: Some("Lick a foe, dealing a little damage.".into()),
                    damage: 6.0,
                    skill_type: Some("normal".into()),
                    is_physical: true,
                },
                SkillPrototype {
                    id: "fireball".into(),
                    display_name: "Fireball".into(),
                    description: Some("Throw fire at a foe, dealing damage.".into()),
                    damage: 12.0,
                    skill_type: Some("fire".into()),
                    is_physical: false,
                },
            ],
        )
    }

    pub fn creature(&self, id: &str) -> Option<&CreaturePrototype> {
        self.creatures.get(id)
    }

    pub fn skill(&self, id: &str) -> Option<&SkillPrototype> {
        self.skills.get(id)
    }

    pub fn creature_ids(&self) -> impl Iterator<Item = &str> {
        self.creatures.keys().map(String::as_str)
    }

    /// Instantiate a skill entity. The instance uid is namespaced by the
    /// owning creature so the same prototype can appear on several creatures
    /// within one snapshot without colliding.
    pub fn spawn_skill(&self, id: &str, owner_uid: &str) -> Option<Entity> {
        let proto = self.skill(id)?;
        let mut entity = Entity::with_category(format!("{owner_uid}-{id}"), Category::Skill)
            .with_name(proto.display_name.clone())
            .with_meta(Entity::META_PROTOTYPE_ID, proto.id.clone())
            .with_stat(SkillView::DAMAGE, proto.damage);
        if let Some(description) = &proto.description {
            entity = entity.with_description(description.clone());
        }
        if let Some(skill_type) = &proto.skill_type {
            entity = entity.with_meta(SkillView::META_SKILL_TYPE, skill_type.clone());
        }
        if proto.is_physical {
            entity = entity.with_meta(SkillView::META_IS_PHYSICAL, "true");
        }
        Some(entity)
    }

    /// Instantiate a creature entity at full health, skills included.
    pub fn spawn_creature(&self, id: &str, uid: impl Into<String>) -> Option<Entity> {
        let proto = self.creature(id)?;
        let uid = uid.into();
        let skills: Vec<Entity> = proto
            .skills
            .iter()
            .filter_map(|skill_id| self.spawn_skill(skill_id, &uid))
            .collect();

        let mut entity = Entity::with_category(uid, Category::Creature)
            .with_name(proto.display_name.clone())
            .with_meta(Entity::META_PROTOTYPE_ID, proto.id.clone())
            .with_stat("hp", proto.max_hp)
            .with_stat("max_hp", proto.max_hp)
            .with_stat("attack", proto.attack)
            .with_stat("defense", proto.defense)
            .with_stat("sp_attack", proto.sp_attack)
            .with_stat("sp_defense", proto.sp_defense)
            .with_stat("speed", proto.speed)
            .with_collection("skills", skills);
        if let Some(description) = &proto.description {
            entity = entity.with_description(description.clone());
        }
        Some(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::EntityVariant;

    #[test]
    fn builtin_catalog_resolves_skill_references() {
        let catalog = PrototypeCatalog::builtin();
        for id in catalog.creature_ids().map(str::to_owned).collect::<Vec<_>>() {
            let proto = catalog.creature(&id).unwrap();
            for skill_id in &proto.skills {
                assert!(catalog.skill(skill_id).is_some(), "missing skill {skill_id}");
            }
        }
    }

    #[test]
    fn spawned_creature_is_a_tagged_full_health_instance() {
        let catalog = PrototypeCatalog::builtin();
        let entity = catalog.spawn_creature("bubwool", "c-1").unwrap();

        assert_eq!(entity.meta_value(Entity::META_PROTOTYPE_ID), Some("bubwool"));
        let EntityVariant::Creature(view) = entity.classify() else {
            panic!("expected a creature variant");
        };
        assert_eq!(view.hp(), view.max_hp());
        assert_eq!(view.skills().count(), 2);
    }

    #[test]
    fn skill_uids_are_namespaced_per_owner() {
        let catalog = PrototypeCatalog::builtin();
        let first = catalog.spawn_creature("bubwool", "c-1").unwrap();
        let second = catalog.spawn_creature("bubwool", "c-2").unwrap();

        let uid_of = |entity: &Entity| entity.collection("skills")[0].uid.clone();
        assert_ne!(uid_of(&first), uid_of(&second));
    }

    #[test]
    fn unknown_prototype_yields_none() {
        let catalog = PrototypeCatalog::builtin();
        assert!(catalog.spawn_creature("missingno", "c-1").is_none());
    }
}
