//! Policy-driven reference frontend.
//!
//! Renders nothing: it derives the view model per frame, asks a policy to
//! pick among the enabled affordances, and drives the interaction session
//! until the battle ends. This is the conforming-UI reference used by the
//! demo binary and integration tests; real presentation layers replace it.
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use runtime::{Event, FrameEvent, RuntimeHandle, Topic};

use crate::config::FrontendConfig;
use crate::event::EventConsumer;
use crate::frontend::Frontend;
use crate::session::{ClickOutcome, InteractionSession};
use crate::view_model::ViewModel;

/// One pick by a headless policy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HeadlessChoice {
    /// Click the action control with this slug.
    Action(String),
    /// Click the skill button with this uid.
    Skill(String),
}

type ChoicePolicy = Box<dyn FnMut(&ViewModel) -> Option<HeadlessChoice> + Send>;

pub struct HeadlessFrontend {
    config: FrontendConfig,
    policy: ChoicePolicy,
    /// Safety stop for scripted sessions that never reach a terminal frame.
    max_frames: usize,
}

impl HeadlessFrontend {
    pub fn new(
        config: FrontendConfig,
        policy: impl FnMut(&ViewModel) -> Option<HeadlessChoice> + Send + 'static,
    ) -> Self {
        Self {
            config,
            policy: Box::new(policy),
            max_frames: 200,
        }
    }

    /// Policy that always clicks the first enabled skill, then the first
    /// enabled action control.
    pub fn first_enabled(config: FrontendConfig) -> Self {
        Self::new(config, |view| {
            view.enabled_skills()
                .next()
                .map(|skill| HeadlessChoice::Skill(skill.uid.clone()))
                .or_else(|| {
                    view.enabled_controls()
                        .next()
                        .map(|control| HeadlessChoice::Action(control.slug.clone()))
                })
        })
    }

    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames.max(1);
        self
    }
}

#[async_trait]
impl Frontend for HeadlessFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        let mut frames = handle.subscribe(Topic::Frame);
        let mut session = InteractionSession::new(handle.clone(), self.config.clone());

        // The opening frame may have been published before we subscribed;
        // seed the session from a query instead of waiting for an event.
        let opening = handle
            .current_frame()
            .await
            .context("querying the opening frame")?;
        session.on_event(&Event::Frame(FrameEvent::Replaced(opening)));

        for _ in 0..self.max_frames {
            let choice = {
                let Some(view) = session.view() else { break };
                if view.battle_ended {
                    info!(
                        target: "frontend::headless",
                        turn = view.turn.counter,
                        "battle ended"
                    );
                    break;
                }
                if view.waiting {
                    info!(target: "frontend::headless", "nothing enabled; waiting fallback shown");
                    break;
                }
                match (self.policy)(view) {
                    Some(choice) => choice,
                    None => break,
                }
            };

            let outcome = match &choice {
                HeadlessChoice::Action(slug) => session.click(slug).await?,
                HeadlessChoice::Skill(uid) => session.click_skill(uid).await?,
            };

            match outcome {
                ClickOutcome::Emitted => {
                    // Block until the replacement frame arrives; interaction
                    // events on other topics are not needed here.
                    loop {
                        let event = frames
                            .recv()
                            .await
                            .context("frame event stream closed mid-session")?;
                        session.on_event(&event);
                        if matches!(event, Event::Frame(_)) {
                            break;
                        }
                    }
                }
                // A policy picking something the engine refuses would spin
                // forever; stop and let the caller inspect the log.
                _ => break,
            }
        }

        for entry in session.message_log().iter() {
            info!(target: "frontend::headless", turn = ?entry.turn, "{}", entry.text);
        }

        Ok(())
    }
}
