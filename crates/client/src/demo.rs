//! Demo battle engine.
//!
//! A deliberately small stand-in for the real battle-resolution engine,
//! which lives outside this workspace. It exists so the protocol can be
//! exercised end to end: menu → battle → terminal frame, with damage taken
//! straight from skill prototypes and a foe that answers every hit.
use async_trait::async_trait;

use battle_core::{
    ActionRequest, Category, ChoiceRegistry, Entity, InteractiveSet, TurnFrame,
};
use battle_content::PrototypeCatalog;
use runtime::{BattleEngine, EngineError};

const PLAYER_PROTO: &str = "bubwool";
const FOE_PROTO: &str = "scizard";

const PLAYER_CREATURE_UID: &str = "c-player";
const FOE_CREATURE_UID: &str = "c-foe";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Menu,
    Battle,
    BattleOver,
    Closed,
}

/// Scripted-rules engine over the built-in (or a custom) prototype catalog.
pub struct DemoEngine {
    catalog: PrototypeCatalog,
    phase: Phase,
    turn: u64,
    player_hp: f64,
    foe_hp: f64,
}

impl DemoEngine {
    pub fn new(catalog: PrototypeCatalog) -> Self {
        Self {
            catalog,
            phase: Phase::Menu,
            turn: 0,
            player_hp: 0.0,
            foe_hp: 0.0,
        }
    }

    pub fn builtin() -> Self {
        Self::new(PrototypeCatalog::builtin())
    }

    fn proto_max_hp(&self, proto_id: &str) -> Result<f64, EngineError> {
        self.catalog
            .creature(proto_id)
            .map(|proto| proto.max_hp)
            .ok_or_else(|| EngineError::new(format!("catalog has no creature '{proto_id}'")))
    }

    fn reset_battle(&mut self) -> Result<(), EngineError> {
        self.player_hp = self.proto_max_hp(PLAYER_PROTO)?;
        self.foe_hp = self.proto_max_hp(FOE_PROTO)?;
        self.turn = 0;
        self.phase = Phase::Battle;
        Ok(())
    }

    fn spawn_combatant(
        &self,
        proto_id: &str,
        uid: &str,
        hp: f64,
    ) -> Result<Entity, EngineError> {
        let mut creature = self
            .catalog
            .spawn_creature(proto_id, uid)
            .ok_or_else(|| EngineError::new(format!("catalog has no creature '{proto_id}'")))?;
        creature.stats.insert("hp".to_owned(), hp.max(0.0));
        Ok(creature)
    }

    fn menu_frame(&self) -> Result<TurnFrame, EngineError> {
        let scene = Entity::with_category("main-menu", Category::Scene("MainMenuScene".into()));
        Ok(TurnFrame::from_parts(
            scene,
            ChoiceRegistry::from_slugs(["play", "quit"]),
            InteractiveSet::empty(),
        )?)
    }

    fn battle_frame(&self) -> Result<TurnFrame, EngineError> {
        let player_creature =
            self.spawn_combatant(PLAYER_PROTO, PLAYER_CREATURE_UID, self.player_hp)?;
        let foe_creature = self.spawn_combatant(FOE_PROTO, FOE_CREATURE_UID, self.foe_hp)?;

        let skill_uids: Vec<String> = player_creature
            .collection("skills")
            .iter()
            .map(|skill| skill.uid.clone())
            .collect();

        let over = self.phase == Phase::BattleOver;
        let mut scene = Entity::with_category("battle", Category::Scene("MainGameScene".into()))
            .with_stat("turn_counter", self.turn as f64)
            .with_entity(
                "player",
                Entity::with_category("side-player", Category::Player)
                    .with_name("Player")
                    .with_entity("active_creature", player_creature),
            )
            .with_entity(
                "foe",
                Entity::with_category("side-foe", Category::Player)
                    .with_name("Foe")
                    .with_entity("active_creature", foe_creature),
            );
        if over {
            scene = scene.with_meta("battle_ended", "true");
        }

        let (choices, interactive) = if over {
            (
                ChoiceRegistry::from_slugs(["return-to-main-menu", "rematch"]),
                InteractiveSet::empty(),
            )
        } else {
            (
                ChoiceRegistry::from_slugs(["quit"]),
                InteractiveSet::from_uids(skill_uids),
            )
        };

        Ok(TurnFrame::from_parts(scene, choices, interactive)?)
    }

    fn farewell_frame(&self) -> Result<TurnFrame, EngineError> {
        let scene = Entity::with_category("farewell", Category::Scene("FarewellScene".into()))
            .with_meta("battle_ended", "true");
        Ok(TurnFrame::from_parts(
            scene,
            ChoiceRegistry::empty(),
            InteractiveSet::empty(),
        )?)
    }

    /// Damage of the player skill behind an interactive uid.
    fn player_skill_damage(&self, uid: &str) -> Result<f64, EngineError> {
        let skill_id = uid
            .strip_prefix(&format!("{PLAYER_CREATURE_UID}-"))
            .ok_or_else(|| EngineError::new(format!("'{uid}' is not a player skill uid")))?;
        self.catalog
            .skill(skill_id)
            .map(|skill| skill.damage)
            .ok_or_else(|| EngineError::new(format!("catalog has no skill '{skill_id}'")))
    }

    fn foe_counter_damage(&self) -> Result<f64, EngineError> {
        let proto = self
            .catalog
            .creature(FOE_PROTO)
            .ok_or_else(|| EngineError::new(format!("catalog has no creature '{FOE_PROTO}'")))?;
        Ok(proto
            .skills
            .first()
            .and_then(|skill_id| self.catalog.skill(skill_id))
            .map(|skill| skill.damage)
            .unwrap_or(0.0))
    }

    fn resolve_battle_click(&mut self, uid: &str) -> Result<(), EngineError> {
        self.foe_hp = (self.foe_hp - self.player_skill_damage(uid)?).max(0.0);
        if self.foe_hp <= 0.0 {
            self.phase = Phase::BattleOver;
            return Ok(());
        }

        self.player_hp = (self.player_hp - self.foe_counter_damage()?).max(0.0);
        if self.player_hp <= 0.0 {
            self.phase = Phase::BattleOver;
            return Ok(());
        }

        self.turn += 1;
        Ok(())
    }
}

#[async_trait]
impl BattleEngine for DemoEngine {
    async fn initial_frame(&mut self) -> Result<TurnFrame, EngineError> {
        self.menu_frame()
    }

    // Only requests that passed the registry/thing-set check arrive here, so
    // anything unexpected is a bug in the frame this engine emitted.
    async fn resolve(
        &mut self,
        request: ActionRequest,
        _current: &TurnFrame,
    ) -> Result<TurnFrame, EngineError> {
        match (self.phase, &request) {
            (Phase::Menu, ActionRequest::Slug { slug, .. }) if slug == "play" => {
                self.reset_battle()?;
                self.battle_frame()
            }
            (Phase::Menu, ActionRequest::Slug { slug, .. }) if slug == "quit" => {
                self.phase = Phase::Closed;
                self.farewell_frame()
            }
            (Phase::Battle, ActionRequest::Thing { uid }) => {
                self.resolve_battle_click(uid)?;
                self.battle_frame()
            }
            (Phase::Battle, ActionRequest::Slug { slug, .. }) if slug == "quit" => {
                self.phase = Phase::Closed;
                self.farewell_frame()
            }
            (Phase::BattleOver, ActionRequest::Slug { slug, .. }) if slug == "rematch" => {
                self.reset_battle()?;
                self.battle_frame()
            }
            (Phase::BattleOver, ActionRequest::Slug { slug, .. })
                if slug == "return-to-main-menu" =>
            {
                self.phase = Phase::Menu;
                self.menu_frame()
            }
            (phase, request) => Err(EngineError::new(format!(
                "request {request:?} is not handled in phase {phase:?}"
            ))),
        }
    }
}
