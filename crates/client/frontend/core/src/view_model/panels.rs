//! Combatant display panels.
use battle_core::{CreatureView, DEFAULT_NAME};

/// Display data for one side's active creature.
///
/// An absent combatant renders the documented fallbacks instead of failing:
/// name [`DEFAULT_NAME`], hp `0/0`.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatantPanel {
    pub name: String,
    pub hp: f64,
    pub max_hp: f64,
    pub fainted: bool,
    /// True when the combatant was missing from the snapshot entirely.
    pub absent: bool,
}

impl CombatantPanel {
    pub fn from_creature(creature: CreatureView<'_>) -> Self {
        Self {
            name: creature.name().to_owned(),
            hp: creature.hp(),
            max_hp: creature.max_hp(),
            fainted: creature.is_fainted(),
            absent: false,
        }
    }

    pub fn absent() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            hp: 0.0,
            max_hp: 0.0,
            fainted: false,
            absent: true,
        }
    }

    /// `"hp/max"` meter text, e.g. `"17/30"`.
    pub fn hp_text(&self) -> String {
        format!("{}/{}", self.hp, self.max_hp)
    }

    /// Fill ratio for hp bars, `0.0..=1.0`.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp <= 0.0 {
            0.0
        } else {
            (self.hp / self.max_hp).clamp(0.0, 1.0)
        }
    }
}
