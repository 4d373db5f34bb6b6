//! Frontend configuration structures and loaders.
//!
//! UI-specific configuration shared across frontend implementations. Kept
//! separate from runtime configuration: the engine side has no say in how a
//! client filters its message log.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `SHOW_REJECTED_ACTIONS` - Log ignored emissions to the message log (default: true)
    /// - `SHOW_TURN_MESSAGES` - Announce each new frame in the message log (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("BATTLE_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(show) = read_env_bool("SHOW_REJECTED_ACTIONS") {
            config.messages.show_rejected = show;
        }
        if let Some(show) = read_env_bool("SHOW_TURN_MESSAGES") {
            config.messages.show_turns = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Surface ignored emissions as warning messages.
    pub show_rejected: bool,
    /// Announce each frame replacement.
    pub show_turns: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            show_rejected: true,
            show_turns: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
