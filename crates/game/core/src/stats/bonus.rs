//! Equipment and stance bonuses.

use core::iter::Sum;
use core::ops::Add;

use crate::style::WeaponStyle;

/// Flat bonuses granted by one item, or the sum over all equipped items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipmentBonuses {
    pub attack: i32,
    pub strength: i32,
    pub defense: i32,
    pub hp: i32,
}

impl EquipmentBonuses {
    pub const NONE: Self = Self {
        attack: 0,
        strength: 0,
        defense: 0,
        hp: 0,
    };

    pub const fn new(attack: i32, strength: i32, defense: i32, hp: i32) -> Self {
        Self {
            attack,
            strength,
            defense,
            hp,
        }
    }
}

impl Add for EquipmentBonuses {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            attack: self.attack + rhs.attack,
            strength: self.strength + rhs.strength,
            defense: self.defense + rhs.defense,
            hp: self.hp + rhs.hp,
        }
    }
}

impl Sum for EquipmentBonuses {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::NONE, Add::add)
    }
}

impl<'a> Sum<&'a EquipmentBonuses> for EquipmentBonuses {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Small fixed stat deltas granted by a weapon style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StanceBonus {
    pub attack: i32,
    pub strength: i32,
    pub defense: i32,
}

impl StanceBonus {
    pub const fn new(attack: i32, strength: i32, defense: i32) -> Self {
        Self {
            attack,
            strength,
            defense,
        }
    }

    /// Default deltas; style tables may override them.
    pub const fn for_style(style: WeaponStyle) -> Self {
        match style {
            WeaponStyle::Accurate => Self::new(3, 0, 0),
            WeaponStyle::Aggressive => Self::new(0, 3, 0),
            WeaponStyle::Defensive => Self::new(0, 0, 3),
            WeaponStyle::Controlled => Self::new(1, 1, 1),
        }
    }
}
