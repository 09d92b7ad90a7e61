//! Pure combat rules and state types shared by the combat runtime.
//!
//! `combat-core` defines the canonical formulas (stat aggregation, strike
//! resolution, loot rolls) and the two persisted state machines (interactive
//! [`EncounterSession`] and batch [`DungeonRun`]) as plain data plus pure
//! transitions. It performs no I/O: static content is reached through the
//! oracle traits in [`env`], randomness through [`RngOracle`], and the runtime
//! crate owns persistence and side effects.
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod encounter;
pub mod env;
pub mod error;
pub mod loot;
pub mod state;
pub mod stats;
pub mod style;

pub use combat::{
    Effectiveness, StrikeInput, StrikeResult, calculate_hit_chance, calculate_max_hit,
    resolve_strike,
};
pub use config::CombatConfig;
pub use dungeon::{
    DungeonRun, FightOutcome, LootLedger, RunStatus, XpShare, distribute_xp, fight_xp,
    select_monster, simulate_fight,
};
pub use encounter::{
    EncounterLogEntry, EncounterSession, EncounterStatus, HealOutcome, LogAction, LogActor,
    heal_amount,
};
pub use env::{
    CombatEnv, ConsumableData, DungeonDefinition, DungeonOracle, Env, EquipmentBonuses,
    FloorDefinition, ItemDefinition, ItemKind, ItemOracle, LootEntry, MonsterDefinition,
    MonsterFamily, MonsterOracle, OracleError, PcgRng, RngOracle, ScriptedRng, SpawnEntry,
    StyleOracle, StyleTable, TypedDefenses, WeaponData,
};
pub use error::{ErrorSeverity, GameError};
pub use loot::{GoldRange, LootDrop, roll_gold, roll_loot};
pub use state::{DungeonId, ItemId, KingdomId, MonsterId, PlayerId, RunId, SessionId};
pub use stats::{
    CombatantSnapshot, EffectiveStats, SkillKind, SkillLevels, StanceBonus, aggregate,
    combat_level,
};
pub use style::{AttackType, SpeedClass, SpeedProfile, StyleProfile, WeaponStyle, WeaponSubtype};
