//! Interaction session state-machine checks against a live runtime.
use std::time::Duration;

use battle_core::{Category, ChoiceRegistry, Entity, InteractiveSet, TurnFrame};
use client_frontend_core::{
    ClickOutcome, EventConsumer, FrontendConfig, Frontend, HeadlessFrontend, InteractionSession,
    SessionPhase,
};
use runtime::{
    Event, FrameEvent, RejectReason, Runtime, ScriptedEngine, Topic,
};

fn scene(turn: u64, ended: bool) -> Entity {
    let mut scene = Entity::with_category(
        format!("scene-{turn}"),
        Category::Scene("MainGameScene".into()),
    )
    .with_stat("turn_counter", turn as f64)
    .with_entity(
        "player_creature",
        Entity::with_category(format!("c-{turn}"), Category::Creature)
            .with_name("Bubwool")
            .with_stat("hp", 30.0)
            .with_stat("max_hp", 30.0)
            .with_collection(
                "skills",
                vec![
                    Entity::with_category(format!("sk-{turn}-tackle"), Category::Skill)
                        .with_name("Tackle")
                        .with_stat("damage", 10.0),
                ],
            ),
    );
    if ended {
        scene = scene.with_meta("battle_ended", "true");
    }
    scene
}

fn frame(turn: u64, slugs: &[&str], uids: &[&str], ended: bool) -> TurnFrame {
    TurnFrame::from_parts(
        scene(turn, ended),
        ChoiceRegistry::from_slugs(slugs.iter().copied()),
        InteractiveSet::from_uids(uids.iter().copied()),
    )
    .expect("test frame is well-formed")
}

async fn start(frames: Vec<TurnFrame>) -> Runtime {
    Runtime::builder()
        .engine(ScriptedEngine::new(frames))
        .build()
        .await
        .expect("runtime should start")
}

async fn seeded_session(runtime: &Runtime) -> InteractionSession {
    let handle = runtime.handle();
    let mut session = InteractionSession::new(handle.clone(), FrontendConfig::default());
    let published = handle.current_frame().await.unwrap();
    session.on_event(&Event::Frame(FrameEvent::Replaced(published)));
    session
}

#[tokio::test]
async fn clicking_a_disabled_control_never_emits() {
    // Skill exists in the scene but neither legality channel lists it.
    let runtime = start(vec![frame(0, &["quit"], &[], false)]).await;
    let handle = runtime.handle();
    let mut interactions = handle.subscribe(Topic::Interaction);
    let mut session = seeded_session(&runtime).await;

    let outcome = session.click_skill("sk-0-tackle").await.unwrap();
    assert_eq!(outcome, ClickOutcome::NotClickable);
    assert_eq!(session.phase(), SessionPhase::Rendered);

    // No emission reached the boundary: the frame is untouched and no
    // interaction event was published at all.
    assert_eq!(handle.current_frame().await.unwrap().seq, 0);
    assert!(interactions.try_recv().is_err());

    // Same for a control that simply is not in the registry.
    let outcome = session.click("rematch").await.unwrap();
    assert_eq!(outcome, ClickOutcome::NotClickable);
    assert!(interactions.try_recv().is_err());

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn one_accepted_emission_per_frame() {
    let runtime = start(vec![
        frame(0, &["attack"], &[], false),
        frame(1, &["attack"], &[], false),
    ])
    .await;
    let handle = runtime.handle();
    let mut frames = handle.subscribe(Topic::Frame);
    let mut session = seeded_session(&runtime).await;

    assert_eq!(session.click("attack").await.unwrap(), ClickOutcome::Emitted);
    assert_eq!(session.phase(), SessionPhase::ActionEmitted);

    // Further clicks are dropped locally until the next frame arrives.
    assert_eq!(
        session.click("attack").await.unwrap(),
        ClickOutcome::AlreadyActed
    );

    let event = tokio::time::timeout(Duration::from_millis(100), frames.recv())
        .await
        .expect("replacement frame should arrive")
        .unwrap();
    session.on_event(&event);
    assert_eq!(session.phase(), SessionPhase::Rendered);
    assert_eq!(session.view().unwrap().seq, 1);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn stale_view_clicks_are_ignored_by_the_boundary() {
    // Frame 0 offers "quit"; frame 1 does not.
    let runtime = start(vec![
        frame(0, &["attack", "quit"], &[], false),
        frame(1, &["attack"], &[], false),
    ])
    .await;
    let handle = runtime.handle();
    let mut session = seeded_session(&runtime).await;

    // Advance the runtime behind the session's back.
    handle.emit("attack", None).await.unwrap();

    // The session still renders frame 0, where "quit" looked live. The
    // boundary re-validates and ignores it; nothing changes.
    let outcome = session.click("quit").await.unwrap();
    assert_eq!(
        outcome,
        ClickOutcome::EngineIgnored(RejectReason::SlugNotAvailable)
    );
    assert_eq!(session.phase(), SessionPhase::Rendered);
    assert_eq!(handle.current_frame().await.unwrap().seq, 1);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn session_starts_idle() {
    let runtime = start(vec![frame(0, &["attack"], &[], false)]).await;
    let mut session =
        InteractionSession::new(runtime.handle(), FrontendConfig::default());

    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.click("attack").await.unwrap(), ClickOutcome::NoFrame);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn headless_frontend_plays_to_the_terminal_frame() {
    let runtime = start(vec![
        frame(0, &[], &["sk-0-tackle"], false),
        frame(1, &[], &["sk-1-tackle"], false),
        frame(2, &["return-to-main-menu"], &[], true),
    ])
    .await;

    let mut frontend = HeadlessFrontend::first_enabled(FrontendConfig::default());
    frontend.run(runtime.handle()).await.unwrap();

    // Two skill clicks were accepted, landing on the terminal frame.
    assert_eq!(runtime.handle().current_frame().await.unwrap().seq, 2);
    assert!(runtime.handle().current_frame().await.unwrap().frame.battle_ended());

    runtime.shutdown().await.unwrap();
}
