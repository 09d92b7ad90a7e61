use crate::state::ItemId;
use crate::style::WeaponSubtype;

use super::monsters::MonsterFamily;

pub use crate::stats::EquipmentBonuses;

pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition>;
}

/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (id, name, bonuses)
/// - `kind` enum holds type-specific data (weapon profile, healing value, ...)
/// - `bonuses` only count while the item is flagged equipped
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: EquipmentBonuses,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            bonuses: EquipmentBonuses::NONE,
        }
    }

    pub fn with_bonuses(mut self, bonuses: EquipmentBonuses) -> Self {
        self.bonuses = bonuses;
        self
    }

    pub fn weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(data) => Some(data),
            _ => None,
        }
    }

    /// HP restored when eaten; `None` for anything that is not food.
    pub fn healing(&self) -> Option<u32> {
        match &self.kind {
            ItemKind::Consumable(data) if data.hp_bonus > 0 => Some(data.hp_bonus),
            _ => None,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon(WeaponData),

    /// Equippable armor; everything it does lives in `bonuses`.
    Armor,

    /// Consumable item (food, potions).
    Consumable(ConsumableData),

    /// Crafting material, trophy or other loot.
    Material,
}

/// Weapon-specific data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponData {
    pub subtype: WeaponSubtype,
    /// Monster families this weapon deals bonus damage to.
    pub effective_against: Vec<MonsterFamily>,
    /// Monster families this weapon deals reduced damage to.
    pub weak_against: Vec<MonsterFamily>,
}

impl WeaponData {
    pub fn new(subtype: WeaponSubtype) -> Self {
        Self {
            subtype,
            effective_against: Vec::new(),
            weak_against: Vec::new(),
        }
    }
}

/// Consumable-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumableData {
    pub hp_bonus: u32,
}
