//! Data-driven combat content and its loaders.
//!
//! This crate loads the static tables the combat engine consults:
//! - Monster templates (RON)
//! - Item catalog (RON)
//! - Dungeon layouts (RON)
//! - The attack-style table (RON)
//! - Combat tunables (TOML)
//!
//! Content is consumed through the runtime oracles and never appears in
//! persisted session or run state beyond its ids.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, DungeonLoader, ItemLoader, LoadResult,
    MonsterLoader, StyleLoader, validate,
};
