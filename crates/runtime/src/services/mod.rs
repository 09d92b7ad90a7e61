//! Contracts for the services the combat engine delegates to.
//!
//! Energy, inventory, loot, skills, infirmary admission and the dungeon loot
//! store are plain bookkeeping owned elsewhere in a game backend. The engine
//! only talks to them through these traits. Every contract is scoped to the
//! player of the current unit of work, and [`PlayerTx`] implements them all
//! against its working copy so they commit or roll back together with the
//! combat state.
//!
//! [`PlayerTx`]: crate::repository::PlayerTx
mod player_tx;

use async_trait::async_trait;
use combat_core::{
    DungeonRun, EncounterLogEntry, EncounterSession, ItemId, KingdomId, LootDrop,
    MonsterDefinition, RngOracle, RunId, SessionId, SkillKind, SkillLevels,
};

use crate::api::{Result, SkillGain};
use crate::repository::PlayerProfile;

#[async_trait]
pub trait EnergyService: Send + Sync {
    async fn has_energy(&self, amount: u32) -> bool;

    async fn consume_energy(&mut self, amount: u32) -> Result<()>;

    /// Death penalty.
    async fn set_energy_on_death(&mut self) -> Result<()>;
}

#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn has_item(&self, item: ItemId, quantity: u32) -> bool;

    async fn remove_item(&mut self, item: ItemId, quantity: u32) -> Result<()>;

    async fn add_item(&mut self, item: ItemId, quantity: u32) -> Result<()>;

    async fn equipped_items(&self) -> Vec<ItemId>;
}

/// Gold and item drops granted straight to the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LootGrant {
    pub gold: u32,
    pub items: Vec<LootDrop>,
}

/// Interactive loot path only; the dungeon rolls into its own ledger.
#[async_trait]
pub trait LootService: Send + Sync {
    async fn roll_and_give_loot(
        &mut self,
        monster: &MonsterDefinition,
        rng: &dyn RngOracle,
    ) -> Result<LootGrant>;
}

#[async_trait]
pub trait SkillService: Send + Sync {
    /// Adds XP, creating the skill at level 1 if it has no record yet.
    async fn add_xp(&mut self, skill: SkillKind, amount: u64) -> Result<SkillGain>;

    async fn level(&self, skill: SkillKind) -> u32;

    async fn levels(&self) -> SkillLevels;
}

#[async_trait]
pub trait InfirmaryService: Send + Sync {
    async fn admit_player(&mut self) -> Result<()>;
}

#[async_trait]
pub trait DungeonLootStore: Send + Sync {
    /// Additive; called once per completed run.
    async fn add_loot(&mut self, kingdom: KingdomId, item: ItemId, quantity: u32) -> Result<()>;
}

#[async_trait]
pub trait PlayerRecords: Send + Sync {
    async fn profile(&self) -> PlayerProfile;

    async fn set_hp(&mut self, hp: u32) -> Result<()>;

    async fn credit_gold(&mut self, amount: u64) -> Result<()>;
}

#[async_trait]
pub trait CombatRecords: Send + Sync {
    async fn active_session(&self) -> Option<EncounterSession>;

    async fn active_run(&self) -> Option<DungeonRun>;

    async fn next_session_id(&mut self) -> SessionId;

    async fn next_run_id(&mut self) -> RunId;

    /// Inserts or replaces the session with the same id.
    async fn save_session(&mut self, session: &EncounterSession) -> Result<()>;

    async fn append_log(&mut self, session: SessionId, entries: &[EncounterLogEntry]) -> Result<()>;

    /// Inserts or replaces the run with the same id.
    async fn save_run(&mut self, run: &DungeonRun) -> Result<()>;
}

/// Everything one combat action may touch.
pub trait Collaborators:
    EnergyService
    + InventoryService
    + LootService
    + SkillService
    + InfirmaryService
    + DungeonLootStore
    + PlayerRecords
    + CombatRecords
{
}

impl<T> Collaborators for T where
    T: EnergyService
        + InventoryService
        + LootService
        + SkillService
        + InfirmaryService
        + DungeonLootStore
        + PlayerRecords
        + CombatRecords
{
}
