//! End-to-end checks of the emit/emitThingClick boundary semantics.
use std::time::Duration;

use battle_core::{Category, ChoiceRegistry, Entity, InteractiveSet, TurnFrame};
use battle_content::PrototypeCatalog;
use runtime::{
    EmitOutcome, Event, FrameEvent, InteractionEvent, RejectReason, Runtime, RuntimeConfig,
    ScriptedEngine, Topic,
};

fn battle_scene(turn: u64) -> Entity {
    let catalog = PrototypeCatalog::builtin();
    let player_creature = catalog
        .spawn_creature("bubwool", format!("c-player-{turn}"))
        .expect("builtin catalog has bubwool");
    let foe_creature = catalog
        .spawn_creature("scizard", format!("c-foe-{turn}"))
        .expect("builtin catalog has scizard");

    Entity::with_category(format!("scene-{turn}"), Category::Scene("MainGameScene".into()))
        .with_stat("turn_counter", turn as f64)
        .with_entity(
            "player",
            Entity::with_category(format!("side-player-{turn}"), Category::Player)
                .with_name("Player")
                .with_entity("active_creature", player_creature),
        )
        .with_entity(
            "foe",
            Entity::with_category(format!("side-foe-{turn}"), Category::Player)
                .with_name("Foe")
                .with_entity("active_creature", foe_creature),
        )
}

fn opening_frame() -> TurnFrame {
    TurnFrame::from_parts(
        battle_scene(0),
        ChoiceRegistry::from_slugs(["attack", "quit"]),
        InteractiveSet::from_uids(["c-player-0-tackle", "c-player-0-lick"]),
    )
    .expect("opening frame is well-formed")
}

fn second_frame() -> TurnFrame {
    TurnFrame::from_parts(
        battle_scene(1),
        ChoiceRegistry::from_slugs(["attack"]),
        InteractiveSet::from_uids(["c-player-1-tackle"]),
    )
    .expect("second frame is well-formed")
}

async fn start_runtime(frames: Vec<TurnFrame>) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig::default())
        .engine(ScriptedEngine::new(frames))
        .build()
        .await
        .expect("runtime should start")
}

#[tokio::test]
async fn accepted_slug_replaces_the_frame() {
    let runtime = start_runtime(vec![opening_frame(), second_frame()]).await;
    let handle = runtime.handle();
    let mut frames = handle.subscribe(Topic::Frame);

    let outcome = handle.emit("attack", None).await.unwrap();
    assert_eq!(outcome, EmitOutcome::Accepted);

    let current = handle.current_frame().await.unwrap();
    assert_eq!(current.seq, 1);
    assert_eq!(current.frame.scene.uid(), "scene-1");

    // The replacement arrived as a push notification, not via polling.
    let replaced = tokio::time::timeout(Duration::from_millis(100), async {
        loop {
            match frames.recv().await.unwrap() {
                Event::Frame(FrameEvent::Replaced(published)) if published.seq == 1 => {
                    break published;
                }
                _ => {}
            }
        }
    })
    .await
    .expect("frame event should arrive");
    assert_eq!(replaced.frame.scene.uid(), "scene-1");

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn unlisted_slug_is_ignored_and_changes_nothing() {
    let runtime = start_runtime(vec![opening_frame(), second_frame()]).await;
    let handle = runtime.handle();
    let mut interactions = handle.subscribe(Topic::Interaction);

    let before = handle.current_frame().await.unwrap();

    // "rematch" is a real navigation slug, but this frame does not offer it.
    let outcome = handle.emit("rematch", None).await.unwrap();
    assert_eq!(
        outcome,
        EmitOutcome::Ignored(RejectReason::SlugNotAvailable)
    );

    let after = handle.current_frame().await.unwrap();
    assert_eq!(after.seq, before.seq);
    assert_eq!(after.frame.scene, before.frame.scene);
    assert_eq!(after.frame.choices, before.frame.choices);

    let event = tokio::time::timeout(Duration::from_millis(100), interactions.recv())
        .await
        .expect("interaction event should arrive")
        .unwrap();
    assert!(matches!(
        event,
        Event::Interaction(InteractionEvent::Ignored {
            reason: RejectReason::SlugNotAvailable,
            ..
        })
    ));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn thing_clicks_are_gated_by_the_interactive_set() {
    let runtime = start_runtime(vec![opening_frame(), second_frame()]).await;
    let handle = runtime.handle();

    // The foe's skills exist in the scene but are not interactive.
    let outcome = handle.emit_thing_click("c-foe-0-tackle").await.unwrap();
    assert_eq!(
        outcome,
        EmitOutcome::Ignored(RejectReason::ThingNotAvailable)
    );
    assert_eq!(handle.current_frame().await.unwrap().seq, 0);

    let outcome = handle.emit_thing_click("c-player-0-tackle").await.unwrap();
    assert_eq!(outcome, EmitOutcome::Accepted);
    assert_eq!(handle.current_frame().await.unwrap().seq, 1);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn empty_registry_accepts_nothing() {
    let idle = TurnFrame::new(
        battle_core::SceneSnapshot::validate(battle_scene(0)).unwrap(),
        ChoiceRegistry::empty(),
        InteractiveSet::empty(),
    );
    let runtime = start_runtime(vec![idle]).await;
    let handle = runtime.handle();

    for slug in ["attack", "quit", "play"] {
        let outcome = handle.emit(slug, None).await.unwrap();
        assert_eq!(
            outcome,
            EmitOutcome::Ignored(RejectReason::SlugNotAvailable),
            "slug {slug} should be ignored"
        );
    }
    assert_eq!(handle.current_frame().await.unwrap().seq, 0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn payloads_reach_the_engine_opaquely() {
    // The scripted engine ignores payload contents; this only checks the
    // boundary passes them through without constraining their shape.
    let runtime = start_runtime(vec![opening_frame(), second_frame()]).await;
    let handle = runtime.handle();

    let outcome = handle
        .emit("attack", Some(serde_json::json!({ "skillId": "tackle" })))
        .await
        .unwrap();
    assert_eq!(outcome, EmitOutcome::Accepted);

    runtime.shutdown().await.unwrap();
}
