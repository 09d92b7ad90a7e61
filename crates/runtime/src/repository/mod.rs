//! Player persistence and the per-action unit of work.
//!
//! [`PlayerRepository`] implementations only load and save whole
//! [`PlayerRecord`]s. [`CombatStore`] layers the concurrency discipline on
//! top: one lock per player, a private working copy per action, and a
//! storage-level check of the single-active-session/run constraint on commit.
mod error;
mod file;
mod memory;
mod record;
mod store;

pub use error::{RepositoryError, Result};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use record::{
    InventorySlot, MAX_LEVEL, PlayerProfile, PlayerRecord, SkillRecord, level_for_xp, xp_for_level,
};
pub use store::{CombatStore, PlayerTx};

use combat_core::PlayerId;

/// Whole-record persistence for players.
pub trait PlayerRepository: Send + Sync {
    fn save(&self, record: &PlayerRecord) -> Result<()>;

    fn load(&self, player: PlayerId) -> Result<Option<PlayerRecord>>;

    fn list_players(&self) -> Result<Vec<PlayerId>>;
}
