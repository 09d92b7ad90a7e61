/// Tunable combat constants.
///
/// Every formula in [`crate::combat`], [`crate::encounter`] and
/// [`crate::dungeon`] reads its constants from here so balance changes and
/// test fixtures never touch code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Hit chance (percent) when attack equals defense and no bonus applies.
    pub base_hit_chance: i32,
    /// Hit chance gained per point of attack over defense.
    pub hit_chance_per_level: i32,
    pub min_hit_chance: i32,
    pub max_hit_chance: i32,
    /// Max hit = floor((strength + bonus) × factor).
    pub max_hit_factor: f64,
    /// Damage multiplier when the weapon is effective against the monster family.
    pub effective_multiplier: f64,
    /// Damage multiplier when the weapon is weak against the monster family.
    pub weak_multiplier: f64,
    /// Percent chance that a flee attempt succeeds.
    pub flee_chance: u32,
    /// Safety cap on rounds inside one dungeon fight.
    pub dungeon_round_cap: u32,
    /// Dungeon XP awarded per point of (capped) damage dealt.
    pub dungeon_xp_per_damage: u32,
    /// Hit Points XP = floor(total combat XP / divisor) on dungeon completion.
    pub hit_points_xp_divisor: u32,
    /// Flat energy consumed by `start_combat`.
    pub encounter_energy_cost: u32,
    /// Interactive XP per monster HP when a monster has no explicit reward.
    pub interactive_xp_per_damage: u32,
}

impl CombatConfig {
    pub const DEFAULT_BASE_HIT_CHANCE: i32 = 50;
    pub const DEFAULT_HIT_CHANCE_PER_LEVEL: i32 = 2;
    pub const DEFAULT_MIN_HIT_CHANCE: i32 = 10;
    pub const DEFAULT_MAX_HIT_CHANCE: i32 = 95;
    pub const DEFAULT_MAX_HIT_FACTOR: f64 = 0.5;
    pub const DEFAULT_EFFECTIVE_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_WEAK_MULTIPLIER: f64 = 0.5;
    pub const DEFAULT_FLEE_CHANCE: u32 = 50;
    pub const DEFAULT_DUNGEON_ROUND_CAP: u32 = 50;
    pub const DEFAULT_DUNGEON_XP_PER_DAMAGE: u32 = 4;
    pub const DEFAULT_HIT_POINTS_XP_DIVISOR: u32 = 3;
    pub const DEFAULT_ENCOUNTER_ENERGY_COST: u32 = 5;
    pub const DEFAULT_INTERACTIVE_XP_PER_DAMAGE: u32 = 4;

    pub fn new() -> Self {
        Self {
            base_hit_chance: Self::DEFAULT_BASE_HIT_CHANCE,
            hit_chance_per_level: Self::DEFAULT_HIT_CHANCE_PER_LEVEL,
            min_hit_chance: Self::DEFAULT_MIN_HIT_CHANCE,
            max_hit_chance: Self::DEFAULT_MAX_HIT_CHANCE,
            max_hit_factor: Self::DEFAULT_MAX_HIT_FACTOR,
            effective_multiplier: Self::DEFAULT_EFFECTIVE_MULTIPLIER,
            weak_multiplier: Self::DEFAULT_WEAK_MULTIPLIER,
            flee_chance: Self::DEFAULT_FLEE_CHANCE,
            dungeon_round_cap: Self::DEFAULT_DUNGEON_ROUND_CAP,
            dungeon_xp_per_damage: Self::DEFAULT_DUNGEON_XP_PER_DAMAGE,
            hit_points_xp_divisor: Self::DEFAULT_HIT_POINTS_XP_DIVISOR,
            encounter_energy_cost: Self::DEFAULT_ENCOUNTER_ENERGY_COST,
            interactive_xp_per_damage: Self::DEFAULT_INTERACTIVE_XP_PER_DAMAGE,
        }
    }

    pub fn with_round_cap(mut self, cap: u32) -> Self {
        self.dungeon_round_cap = cap.max(1);
        self
    }

    pub fn with_encounter_energy_cost(mut self, cost: u32) -> Self {
        self.encounter_energy_cost = cost;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
