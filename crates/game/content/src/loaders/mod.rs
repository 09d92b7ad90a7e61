//! Content loaders for reading combat data from files.
//!
//! Each loader turns one RON/TOML file into `combat-core` types;
//! [`ContentFactory`] loads a whole data directory and [`validate`] checks
//! cross-references before the runtime wraps the data in oracles.

pub mod config;
pub mod dungeon;
pub mod factory;
pub mod item;
pub mod monster;
pub mod styles;
pub mod validation;

pub use config::ConfigLoader;
pub use dungeon::DungeonLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use item::ItemLoader;
pub use monster::MonsterLoader;
pub use styles::StyleLoader;
pub use validation::{issues, validate};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
