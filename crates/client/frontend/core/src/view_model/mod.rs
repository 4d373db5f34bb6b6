//! Presentation-ready projection of a [`TurnFrame`].
//!
//! Derivation is pure: the same frame always produces the same view model,
//! so re-rendering a frame twice enables exactly the same controls.

mod controls;
mod panels;

pub use controls::{ActionControl, SkillControl};
pub use panels::CombatantPanel;

use battle_core::TurnFrame;
use runtime::PublishedFrame;

/// Scene-level turn counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnView {
    pub counter: u64,
    pub max: Option<u64>,
}

/// Everything a frontend needs to draw one frame.
///
/// Built wholesale from each frame; nothing here is patched incrementally,
/// matching the snapshot-replacement contract.
#[derive(Clone, Debug)]
pub struct ViewModel {
    /// Sequence number of the frame this was derived from.
    pub seq: u64,

    pub scene_name: String,
    pub turn: TurnView,
    pub battle_ended: bool,

    pub player: CombatantPanel,
    pub opponent: CombatantPanel,

    /// Coarse action controls, in registry order. Every entry's slug is a
    /// member of the frame's choice registry by construction.
    pub controls: Vec<ActionControl>,

    /// Skill buttons for the active player creature, in collection order.
    pub skills: Vec<SkillControl>,

    /// True when nothing is enabled: the UI shows its waiting fallback.
    pub waiting: bool,
}

impl ViewModel {
    pub fn from_published(published: &PublishedFrame) -> Self {
        Self::from_frame(published.seq, &published.frame)
    }

    pub fn from_frame(seq: u64, frame: &TurnFrame) -> Self {
        let scene = frame.scene.scene();
        let turn = TurnView {
            counter: scene.turn_counter(),
            max: scene.max_turns(),
        };

        let player = frame
            .scene
            .player_creature()
            .map(CombatantPanel::from_creature)
            .unwrap_or_else(CombatantPanel::absent);
        let opponent = frame
            .scene
            .opponent_creature()
            .map(CombatantPanel::from_creature)
            .unwrap_or_else(CombatantPanel::absent);

        let controls = controls::collect_actions(frame);
        let skills = controls::collect_skills(frame);

        let waiting = controls.is_empty() && !skills.iter().any(|skill| skill.enabled);

        Self {
            seq,
            scene_name: scene.scene_name().to_owned(),
            turn,
            battle_ended: frame.battle_ended(),
            player,
            opponent,
            controls,
            skills,
            waiting,
        }
    }

    pub fn control(&self, slug: &str) -> Option<&ActionControl> {
        self.controls.iter().find(|control| control.slug == slug)
    }

    pub fn skill(&self, uid: &str) -> Option<&SkillControl> {
        self.skills.iter().find(|skill| skill.uid == uid)
    }

    /// Controls a conforming UI may activate right now.
    pub fn enabled_controls(&self) -> impl Iterator<Item = &ActionControl> {
        self.controls.iter().filter(|control| control.enabled)
    }

    pub fn enabled_skills(&self) -> impl Iterator<Item = &SkillControl> {
        self.skills.iter().filter(|skill| skill.enabled)
    }
}
