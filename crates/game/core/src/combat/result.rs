//! Strike input, result and the resolver entry point.

use crate::config::CombatConfig;
use crate::env::{MonsterDefinition, RngOracle};
use crate::stats::EffectiveStats;

use super::damage::{Effectiveness, apply_speed, calculate_max_hit};
use super::hit::{calculate_hit_chance, check_hit};

/// Everything one strike needs, already resolved from stats and styles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeInput {
    pub attack: i32,
    /// Defender's defense against this strike (typed for monsters).
    pub defense: i32,
    pub strength: i32,
    pub attack_bonus: i32,
    pub strength_bonus: i32,
    pub effectiveness: Effectiveness,
    pub speed_multiplier: f64,
}

impl StrikeInput {
    /// Player strike against a monster defense value.
    pub fn player(
        stats: &EffectiveStats,
        defense: i32,
        effectiveness: Effectiveness,
        speed_multiplier: f64,
    ) -> Self {
        Self {
            attack: stats.attack,
            defense,
            strength: stats.strength,
            attack_bonus: stats.attack_bonus,
            strength_bonus: stats.strength_bonus,
            effectiveness,
            speed_multiplier,
        }
    }

    /// Monster strike: no equipment bonus, no effectiveness, no speed.
    pub fn monster(monster: &MonsterDefinition, player_defense: i32) -> Self {
        Self {
            attack: monster.attack_level,
            defense: player_defense,
            strength: monster.strength_level,
            attack_bonus: 0,
            strength_bonus: 0,
            effectiveness: Effectiveness::Neutral,
            speed_multiplier: 1.0,
        }
    }

    pub fn hit_chance(&self, config: &CombatConfig) -> u32 {
        calculate_hit_chance(self.attack, self.defense, self.attack_bonus, config)
    }

    pub fn max_hit(&self, config: &CombatConfig) -> u32 {
        calculate_max_hit(self.strength, self.strength_bonus, config)
    }
}

/// Outcome of one strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeResult {
    pub hit: bool,
    /// Zero on a miss.
    pub damage: u32,
    pub roll: u32,
    pub hit_chance: u32,
}

impl StrikeResult {
    pub const fn miss(roll: u32, hit_chance: u32) -> Self {
        Self {
            hit: false,
            damage: 0,
            roll,
            hit_chance,
        }
    }
}

/// Resolves one strike: d100 against the clamped hit chance, then a uniform
/// damage roll in `[1, max(1, max_hit)]` with multipliers applied.
pub fn resolve_strike<R>(input: &StrikeInput, rng: &R, config: &CombatConfig) -> StrikeResult
where
    R: RngOracle + ?Sized,
{
    let hit_chance = input.hit_chance(config);
    let roll = rng.roll_d100();
    if !check_hit(roll, hit_chance) {
        return StrikeResult::miss(roll, hit_chance);
    }

    let max_hit = input.max_hit(config).max(1);
    let rolled = rng.range(1, max_hit);
    let damage = input.effectiveness.apply(rolled, config);
    let damage = apply_speed(damage, input.speed_multiplier);

    StrikeResult {
        hit: true,
        damage,
        roll,
        hit_chance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::MonsterId;

    fn stats(attack: i32, strength: i32) -> EffectiveStats {
        EffectiveStats {
            attack,
            strength,
            defense: 1,
            attack_bonus: 0,
            strength_bonus: 0,
        }
    }

    #[test]
    fn miss_deals_no_damage() {
        let config = CombatConfig::default();
        let input = StrikeInput::player(&stats(10, 20), 10, Effectiveness::Neutral, 1.0);
        let rng = ScriptedRng::new([51]);

        let result = resolve_strike(&input, &rng, &config);
        assert!(!result.hit);
        assert_eq!(result.damage, 0);
        assert_eq!(result.hit_chance, 50);
    }

    #[test]
    fn hit_rolls_within_max_hit() {
        let config = CombatConfig::default();
        let input = StrikeInput::player(&stats(10, 20), 10, Effectiveness::Neutral, 1.0);
        let rng = ScriptedRng::new([50, 99]);

        let result = resolve_strike(&input, &rng, &config);
        assert!(result.hit);
        assert_eq!(result.damage, 10);
    }

    #[test]
    fn zero_max_hit_still_deals_one() {
        let config = CombatConfig::default();
        let input = StrikeInput::player(&stats(10, 1), 10, Effectiveness::Neutral, 1.0);
        let rng = ScriptedRng::new([1]);

        let result = resolve_strike(&input, &rng, &config);
        assert_eq!(result.damage, 1);
    }

    #[test]
    fn effectiveness_then_speed() {
        let config = CombatConfig::default();
        let input = StrikeInput::player(&stats(10, 20), 10, Effectiveness::Effective, 0.6);
        let rng = ScriptedRng::new([1, 10]);

        // 10 → floor(15) → round(9.0)
        let result = resolve_strike(&input, &rng, &config);
        assert_eq!(result.damage, 9);
    }

    #[test]
    fn monster_strike_ignores_bonuses() {
        let monster = MonsterDefinition::new(MonsterId(1), "Goblin", 5, 8, 3, 12);
        let input = StrikeInput::monster(&monster, 7);
        assert_eq!(input.attack_bonus, 0);
        assert_eq!(input.effectiveness, Effectiveness::Neutral);
        assert_eq!(input.hit_chance(&CombatConfig::default()), 46);
        assert_eq!(input.max_hit(&CombatConfig::default()), 4);
    }
}
