//! Client-side configuration loading.
use std::env;

use runtime::RuntimeConfig;

/// Configuration bundle for a client process.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    /// - `BATTLE_COMMAND_BUFFER` - Session worker command queue size (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("BATTLE_EVENT_BUFFER") {
            config.runtime.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("BATTLE_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
