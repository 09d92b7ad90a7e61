//! Strike resolution.
//!
//! Pure functions that decide hit/miss and damage for a single strike. The
//! same resolver serves player→monster and monster→player strikes; only the
//! [`StrikeInput`] differs.
//!
//! ```text
//! hit_chance = clamp(base + (attack − defense) × per_level + attack_bonus, min, max)
//! max_hit    = floor((strength + strength_bonus) × factor)
//! damage     = uniform(1, max(1, max_hit)) → effectiveness (floor) → speed (round)
//! ```

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{Effectiveness, apply_damage, apply_speed, calculate_max_hit};
pub use hit::{calculate_hit_chance, check_hit};
pub use result::{StrikeInput, StrikeResult, resolve_strike};
