//! Async orchestration for the combat resolution engine.
//!
//! This crate wires the pure rules of `combat-core` to persistence, the
//! collaborator services and an event bus. Consumers build a
//! [`CombatEngine`] and drive fights through its [`EncounterService`] and
//! [`DungeonService`] handles.
//!
//! Modules are organized by responsibility:
//! - [`engine`] hosts the services and the builder
//! - [`api`] exposes the error and report types callers interact with
//! - [`services`] defines the collaborator contracts each action runs against
//! - [`repository`] persists players and provides the per-player unit of work
//! - [`oracle`] adapts loaded content to the `combat-core` oracle traits
//! - [`events`] provides the topic-based event bus
pub mod api;
pub mod config;
pub mod engine;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod services;

pub use api::{
    CompletionRewards, EatReport, ExchangeReport, FightReport, FightRewards, Forfeiture,
    Rejection, Result, RunEndReport, RunView, RuntimeError, SessionView, SkillGain,
    VictoryRewards,
};
pub use config::EngineConfig;
pub use engine::{CombatEngine, CombatEngineBuilder, DungeonService, EncounterService};
pub use events::{DungeonEvent, EncounterEvent, Event, EventBus, Topic};
pub use oracle::{
    DungeonOracleImpl, ItemOracleImpl, MonsterOracleImpl, OracleManager, ThreadRngOracle,
};
pub use repository::{
    CombatStore, FileStore, InMemoryStore, PlayerProfile, PlayerRecord, PlayerRepository,
    PlayerTx, RepositoryError,
};
pub use services::{
    Collaborators, CombatRecords, DungeonLootStore, EnergyService, InfirmaryService,
    InventoryService, LootGrant, LootService, PlayerRecords, SkillService,
};
