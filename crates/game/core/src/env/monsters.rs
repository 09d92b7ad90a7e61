//! Monster template oracle.

use crate::config::CombatConfig;
use crate::loot::GoldRange;
use crate::state::{ItemId, MonsterId};
use crate::style::AttackType;

/// Oracle providing monster templates.
pub trait MonsterOracle: Send + Sync {
    fn monster(&self, id: MonsterId) -> Option<MonsterDefinition>;
}

/// Monster family, matched against weapon effectiveness lists.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MonsterFamily {
    /// Bandits, guards, cultists
    #[default]
    Humanoid,
    /// Goblins, hobgoblins
    Goblinoid,
    /// Skeletons, zombies, ghosts
    Undead,
    /// Wolves, rats, spiders
    Beast,
    Demon,
    Dragon,
    /// Golems, animated armour
    Construct,
}

/// Per-attack-type defense values; missing entries fall back to the
/// monster's defense level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypedDefenses {
    pub stab: Option<i32>,
    pub slash: Option<i32>,
    pub crush: Option<i32>,
}

impl TypedDefenses {
    pub fn get(&self, attack_type: AttackType) -> Option<i32> {
        match attack_type {
            AttackType::Stab => self.stab,
            AttackType::Slash => self.slash,
            AttackType::Crush => self.crush,
        }
    }
}

/// One entry of a monster loot table. Every entry rolls independently.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub item: ItemId,
    pub min_quantity: u32,
    pub max_quantity: u32,
    /// Drop chance in percent (0–100).
    pub chance: f64,
}

impl LootEntry {
    pub fn new(item: ItemId, min_quantity: u32, max_quantity: u32, chance: f64) -> Self {
        Self {
            item,
            min_quantity,
            max_quantity,
            chance,
        }
    }
}

/// Monster template.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterDefinition {
    pub id: MonsterId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub family: MonsterFamily,
    /// Minimum player combat level required to start an encounter.
    #[cfg_attr(feature = "serde", serde(default))]
    pub level_requirement: u32,
    pub attack_level: i32,
    pub strength_level: i32,
    pub defense_level: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defenses: TypedDefenses,
    pub max_hp: u32,
    /// Explicit XP reward; derived from max HP when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub experience: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold: GoldRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot: Vec<LootEntry>,
}

impl MonsterDefinition {
    pub fn new(
        id: MonsterId,
        name: impl Into<String>,
        attack_level: i32,
        strength_level: i32,
        defense_level: i32,
        max_hp: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            family: MonsterFamily::default(),
            level_requirement: 0,
            attack_level,
            strength_level,
            defense_level,
            defenses: TypedDefenses::default(),
            max_hp,
            experience: None,
            gold: GoldRange::NONE,
            loot: Vec::new(),
        }
    }

    pub fn with_family(mut self, family: MonsterFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_defenses(mut self, defenses: TypedDefenses) -> Self {
        self.defenses = defenses;
        self
    }

    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn with_gold(mut self, gold: GoldRange) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_loot(mut self, loot: Vec<LootEntry>) -> Self {
        self.loot = loot;
        self
    }

    pub fn with_level_requirement(mut self, level: u32) -> Self {
        self.level_requirement = level;
        self
    }

    /// Defense against an attack type, falling back to the generic level.
    pub fn typed_defense(&self, attack_type: AttackType) -> i32 {
        self.defenses
            .get(attack_type)
            .unwrap_or(self.defense_level)
    }

    /// XP granted for an interactive victory.
    pub fn xp_reward(&self, config: &CombatConfig) -> u32 {
        self.experience
            .unwrap_or(self.max_hp * config.interactive_xp_per_damage)
    }
}
