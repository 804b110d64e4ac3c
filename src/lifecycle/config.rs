//! Runtime configuration for the actor system.

use serde::Deserialize;
use tracing::warn;

/// Environment variable overriding [`SystemConfig::buffer_size`].
pub const BUFFER_SIZE_ENV: &str = "LIBRARY_ACTOR_BUFFER";

const DEFAULT_BUFFER_SIZE: usize = 32;

/// Settings applied when [`LibrarySystem`](super::LibrarySystem) spawns its actors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Capacity of each actor's request channel. Callers wait when it is full.
    pub buffer_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl SystemConfig {
    /// Defaults, with `LIBRARY_ACTOR_BUFFER` applied when it holds a positive integer.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(BUFFER_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(value = %raw, "Ignoring invalid {}", BUFFER_SIZE_ENV),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_buffer_size() {
        assert_eq!(SystemConfig::default().buffer_size, 32);
    }
}
