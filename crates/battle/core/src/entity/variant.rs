use strum::{Display, EnumString};

use super::base::Entity;

/// Variant discriminant carried in `meta.category`.
///
/// Scene roots are tagged with their scene name rather than a fixed word, so
/// every unrecognized tag parses into [`Category::Scene`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Player,
    Creature,
    Skill,
    #[strum(default)]
    Scene(String),
}

/// Borrowed tagged union over an [`Entity`].
///
/// Boundaries that interpret an entity match on this exhaustively instead of
/// duck-typing on which fields happen to be present.
#[derive(Clone, Copy, Debug)]
pub enum EntityVariant<'a> {
    Player(PlayerView<'a>),
    Creature(CreatureView<'a>),
    Skill(SkillView<'a>),
    Scene(SceneView<'a>),
    /// No `meta.category` tag; render generically, never guess a variant.
    Untagged(&'a Entity),
}

impl<'a> EntityVariant<'a> {
    pub fn of(entity: &'a Entity) -> Self {
        match entity.category() {
            Some(Category::Player) => Self::Player(PlayerView(entity)),
            Some(Category::Creature) => Self::Creature(CreatureView(entity)),
            Some(Category::Skill) => Self::Skill(SkillView(entity)),
            Some(Category::Scene(_)) => Self::Scene(SceneView(entity)),
            None => Self::Untagged(entity),
        }
    }
}

/// Typed accessors for `category: Player` entities.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a>(pub(crate) &'a Entity);

impl<'a> PlayerView<'a> {
    pub const CREATURES: &'static str = "creatures";
    pub const ACTIVE_CREATURE: &'static str = "active_creature";

    pub fn entity(&self) -> &'a Entity {
        self.0
    }

    pub fn name(&self) -> &'a str {
        self.0.name()
    }

    /// Roster owned by this side, in display/selection order.
    pub fn creatures(&self) -> impl Iterator<Item = CreatureView<'a>> {
        self.0.collection(Self::CREATURES).iter().map(CreatureView)
    }

    /// Denormalized active combatant, when the side carries one.
    pub fn active_creature(&self) -> Option<CreatureView<'a>> {
        self.0.entity(Self::ACTIVE_CREATURE).map(CreatureView)
    }
}

/// Typed accessors for `category: Creature` entities.
#[derive(Clone, Copy, Debug)]
pub struct CreatureView<'a>(pub(crate) &'a Entity);

impl<'a> CreatureView<'a> {
    pub const SKILLS: &'static str = "skills";

    pub fn entity(&self) -> &'a Entity {
        self.0
    }

    pub fn uid(&self) -> &'a str {
        &self.0.uid
    }

    pub fn name(&self) -> &'a str {
        self.0.name()
    }

    /// Current hit points, clamped into `0..=max_hp`.
    pub fn hp(&self) -> f64 {
        self.0.stat("hp").clamp(0.0, self.max_hp())
    }

    pub fn max_hp(&self) -> f64 {
        self.0.stat("max_hp").max(0.0)
    }

    pub fn is_fainted(&self) -> bool {
        self.hp() <= 0.0
    }

    pub fn attack(&self) -> f64 {
        self.0.stat("attack")
    }

    pub fn defense(&self) -> f64 {
        self.0.stat("defense")
    }

    pub fn sp_attack(&self) -> f64 {
        self.0.stat("sp_attack")
    }

    pub fn sp_defense(&self) -> f64 {
        self.0.stat("sp_defense")
    }

    pub fn speed(&self) -> f64 {
        self.0.stat("speed")
    }

    pub fn skills(&self) -> impl Iterator<Item = SkillView<'a>> {
        self.0.collection(Self::SKILLS).iter().map(SkillView)
    }
}

/// Typed accessors for `category: Skill` entities.
#[derive(Clone, Copy, Debug)]
pub struct SkillView<'a>(pub(crate) &'a Entity);

impl<'a> SkillView<'a> {
    /// Canonical damage stat key. `base_damage` is accepted on the read side
    /// as a migration alias; writers emit `damage` only.
    pub const DAMAGE: &'static str = "damage";
    pub const DAMAGE_ALIAS: &'static str = "base_damage";

    pub const META_SKILL_TYPE: &'static str = "skill_type";
    pub const META_IS_PHYSICAL: &'static str = "is_physical";

    pub fn entity(&self) -> &'a Entity {
        self.0
    }

    pub fn uid(&self) -> &'a str {
        &self.0.uid
    }

    pub fn name(&self) -> &'a str {
        self.0.name()
    }

    pub fn damage(&self) -> f64 {
        self.0
            .stat_opt(Self::DAMAGE)
            .or_else(|| self.0.stat_opt(Self::DAMAGE_ALIAS))
            .unwrap_or(0.0)
    }

    pub fn skill_type(&self) -> Option<&'a str> {
        self.0.meta_value(Self::META_SKILL_TYPE)
    }

    pub fn is_physical(&self) -> bool {
        self.0
            .meta_value(Self::META_IS_PHYSICAL)
            .is_some_and(parse_flag)
    }
}

/// Typed accessors for scene-tagged entities (snapshot roots).
#[derive(Clone, Copy, Debug)]
pub struct SceneView<'a>(pub(crate) &'a Entity);

impl<'a> SceneView<'a> {
    pub const META_BATTLE_ENDED: &'static str = "battle_ended";

    pub fn entity(&self) -> &'a Entity {
        self.0
    }

    pub fn scene_name(&self) -> &'a str {
        self.0
            .meta_value(Entity::META_CATEGORY)
            .unwrap_or(super::base::DEFAULT_NAME)
    }

    pub fn turn_counter(&self) -> u64 {
        self.0.stat("turn_counter").max(0.0) as u64
    }

    pub fn max_turns(&self) -> Option<u64> {
        self.0.stat_opt("max_turns").map(|n| n.max(0.0) as u64)
    }

    /// Terminal-state flag. `meta` is a string map, so the value is
    /// boolean-like: `true`/`1`/`yes`/`on` (case-insensitive) count as true.
    pub fn battle_ended(&self) -> bool {
        self.0
            .meta_value(Self::META_BATTLE_ENDED)
            .is_some_and(parse_flag)
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
