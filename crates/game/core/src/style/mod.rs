//! Attack-style vocabulary.
//!
//! Closed enums for attack type, stance and weapon speed, plus the style
//! profile a player picks by index. The lookup table that maps weapon
//! subtypes to profiles lives behind [`crate::env::StyleOracle`].

use crate::stats::SkillKind;

/// Kind of damage an attack deals; selects the monster's typed defense.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackType {
    Stab,
    Slash,
    Crush,
}

/// Combat posture; shifts effective stats and decides XP routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponStyle {
    Accurate,
    Aggressive,
    Defensive,
    /// Shares XP between several skills.
    Controlled,
}

/// Weapon family used as the key of the style and speed tables.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponSubtype {
    /// No weapon equipped.
    #[default]
    Unarmed,
    Dagger,
    Sword,
    Scimitar,
    Longsword,
    Mace,
    Warhammer,
    Battleaxe,
    Spear,
    TwoHandedSword,
}

/// Weapon speed class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpeedClass {
    Slow,
    #[default]
    Normal,
    Fast,
}

/// Strikes per round and per-strike damage multiplier for a speed class.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedProfile {
    pub hits_per_round: u32,
    pub damage_multiplier: f64,
}

impl SpeedProfile {
    pub const NORMAL: Self = Self {
        hits_per_round: 1,
        damage_multiplier: 1.0,
    };

    pub fn new(hits_per_round: u32, damage_multiplier: f64) -> Self {
        Self {
            hits_per_round: hits_per_round.max(1),
            damage_multiplier,
        }
    }
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// One selectable attack style of a weapon subtype.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleProfile {
    pub attack_type: AttackType,
    pub weapon_style: WeaponStyle,
    /// Skills credited with XP, in order. Never empty.
    pub xp_skills: Vec<SkillKind>,
}

impl StyleProfile {
    pub fn new(
        attack_type: AttackType,
        weapon_style: WeaponStyle,
        xp_skills: Vec<SkillKind>,
    ) -> Self {
        Self {
            attack_type,
            weapon_style,
            xp_skills,
        }
    }

    /// Skill named as the `training_style` of a session or run.
    pub fn primary_skill(&self) -> SkillKind {
        self.xp_skills.first().copied().unwrap_or(SkillKind::Attack)
    }

    /// True when XP is split between several skills.
    pub fn is_shared(&self) -> bool {
        self.xp_skills.len() > 1
    }
}
