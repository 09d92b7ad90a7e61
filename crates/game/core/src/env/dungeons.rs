//! Dungeon layout oracle.

use crate::loot::GoldRange;
use crate::state::{DungeonId, KingdomId, MonsterId};

pub trait DungeonOracle: Send + Sync {
    fn dungeon(&self, id: DungeonId) -> Option<DungeonDefinition>;
}

/// Weighted entry of a floor spawn table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnEntry {
    pub monster: MonsterId,
    pub weight: u32,
}

impl SpawnEntry {
    pub fn new(monster: MonsterId, weight: u32) -> Self {
        Self { monster, weight }
    }
}

/// One floor of a dungeon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorDefinition {
    pub monster_count: u32,
    pub spawns: Vec<SpawnEntry>,
    /// Last encounter of the floor is the dungeon boss, if one is configured.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boss_floor: bool,
    /// Multiplier applied to every loot drop chance on this floor.
    #[cfg_attr(feature = "serde", serde(default = "default_loot_multiplier"))]
    pub loot_multiplier: f64,
}

#[cfg(feature = "serde")]
fn default_loot_multiplier() -> f64 {
    1.0
}

impl FloorDefinition {
    pub fn new(monster_count: u32, spawns: Vec<SpawnEntry>) -> Self {
        Self {
            monster_count,
            spawns,
            boss_floor: false,
            loot_multiplier: 1.0,
        }
    }

    pub fn with_boss(mut self) -> Self {
        self.boss_floor = true;
        self
    }

    pub fn with_loot_multiplier(mut self, multiplier: f64) -> Self {
        self.loot_multiplier = multiplier;
        self
    }
}

/// Dungeon template: gates, floors and completion bonus.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonDefinition {
    pub id: DungeonId,
    pub name: String,
    /// Kingdom whose loot store receives committed loot.
    pub kingdom: KingdomId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level_requirement: u32,
    pub energy_cost: u32,
    pub floors: Vec<FloorDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub boss: Option<MonsterId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completion_xp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completion_gold: GoldRange,
}

impl DungeonDefinition {
    /// Floor by 1-based number.
    pub fn floor(&self, number: u32) -> Option<&FloorDefinition> {
        let index = number.checked_sub(1)?;
        self.floors.get(index as usize)
    }

    pub fn floor_count(&self) -> u32 {
        self.floors.len() as u32
    }

    pub fn is_final_floor(&self, number: u32) -> bool {
        number >= self.floor_count()
    }
}
