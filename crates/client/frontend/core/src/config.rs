//! Frontend configuration structures and loaders.
//!
//! UI-agnostic settings shared by every frontend implementation; terminal
//! layout specifics live with the CLI crate.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub channels: ChannelConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(channels: ChannelConfig, messages: MessageConfig) -> Self {
        Self { channels, messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MARKET_EVENT_BUFFER` - view-model event channel size (default: 32)
    /// - `MARKET_MESSAGE_CAPACITY` - message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("MARKET_EVENT_BUFFER") {
            config.channels.event_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("MARKET_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub event_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { event_buffer: 32 }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
