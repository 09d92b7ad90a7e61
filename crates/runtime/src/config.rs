//! Engine configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;

/// Where content lives, where players are saved, and how the engine rolls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Directory holding `config.toml` and the RON content files.
    pub data_dir: PathBuf,
    /// Enables the file-backed player store when set.
    pub save_dir: Option<PathBuf>,
    /// Per-topic capacity of the event bus.
    pub event_buffer: usize,
    /// Seeds a reproducible PCG rng instead of the thread rng.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/game/content/data"),
            save_dir: None,
            event_buffer: 100,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMBAT_DATA_DIR` - Content directory (default: `crates/game/content/data`)
    /// - `COMBAT_SAVE_DIR` - Player save directory (default: in-memory store)
    /// - `COMBAT_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    /// - `COMBAT_RNG_SEED` - Seed for reproducible rolls (default: thread rng)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("COMBAT_DATA_DIR") {
            config.data_dir = dir;
        }
        config.save_dir = read_env::<PathBuf>("COMBAT_SAVE_DIR");
        if let Some(capacity) = read_env::<usize>("COMBAT_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }
        config.rng_seed = read_env::<u64>("COMBAT_RNG_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
