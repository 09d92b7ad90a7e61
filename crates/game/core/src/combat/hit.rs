//! Hit chance calculation.

use crate::config::CombatConfig;

/// Hit chance in percent, clamped to the configured bounds.
///
/// `attack_bonus` is the attacker's equipment attack bonus and is added
/// after the level difference is scaled.
pub fn calculate_hit_chance(
    attack: i32,
    defense: i32,
    attack_bonus: i32,
    config: &CombatConfig,
) -> u32 {
    let diff = attack as i64 - defense as i64;
    let raw = config.base_hit_chance as i64
        + diff * config.hit_chance_per_level as i64
        + attack_bonus as i64;
    raw.clamp(config.min_hit_chance as i64, config.max_hit_chance as i64) as u32
}

/// `true` when a d100 roll lands at or under the hit chance.
pub fn check_hit(roll: u32, hit_chance: u32) -> bool {
    roll <= hit_chance
}
