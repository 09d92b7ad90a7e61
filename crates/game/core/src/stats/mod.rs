//! Stat Aggregator.
//!
//! Turns base skill levels, equipped-item bonuses and the active stance into
//! the effective numbers the strike resolver consumes.
//!
//! ```text
//! [ Skill levels ] + [ Stance delta ] ───────────────► attack / strength
//! [ Skill levels ] + [ Stance delta ] + [ Equipment ] ► defense
//! [ Equipment ] ─────────────────────────────────────► offense bonuses
//! ```
//!
//! Equipment offense is reported separately from the level-derived values so
//! the resolver adds it exactly once (hit-chance term and max-hit term).

pub mod bonus;
pub mod skills;
pub mod snapshot;

pub use bonus::{EquipmentBonuses, StanceBonus};
pub use skills::{SkillKind, SkillLevels, combat_level};
pub use snapshot::{CombatantSnapshot, EffectiveStats, aggregate};
