use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub study: StudyConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Deck selection defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Deck opened when none is given on the command line.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Study loop tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Render tick in milliseconds (default: 250). Must be greater than zero.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// How long a parsed deck stays fresh in the cache, in seconds (default: 300).
    /// Zero means every reload goes back to disk.
    #[serde(default = "default_deck_cache_ttl_secs")]
    pub deck_cache_ttl_secs: u64,
}

/// Session persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Whether quiz progress is written to disk between runs (default: true).
    #[serde(default = "default_persist")]
    pub persist: bool,
}

fn default_tick_ms() -> u64 {
    250
}

fn default_deck_cache_ttl_secs() -> u64 {
    300
}

fn default_persist() -> bool {
    true
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            deck_cache_ttl_secs: default_deck_cache_ttl_secs(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: default_persist(),
        }
    }
}
