//! Persisted per-player aggregate.
//!
//! A player's profile, skills, inventory, combat history and dungeon loot
//! stores live in one record so a whole action commits as one write.

use std::collections::BTreeMap;

use combat_core::{
    DungeonRun, EncounterLogEntry, EncounterSession, ItemId, KingdomId, PlayerId, SessionId,
    SkillKind, SkillLevels,
};
use serde::{Deserialize, Serialize};

/// Highest reachable skill level.
pub const MAX_LEVEL: u32 = 99;

/// Total XP needed to reach `level`: `100 × (level − 1)²`.
pub fn xp_for_level(level: u32) -> u64 {
    let steps = level.clamp(1, MAX_LEVEL) as u64 - 1;
    100 * steps * steps
}

/// Level reached with `xp` total experience.
pub fn level_for_xp(xp: u64) -> u32 {
    let steps = ((xp / 100) as f64).sqrt() as u64;
    // sqrt on f64 can land one off for large values
    let mut level = (steps + 1).min(MAX_LEVEL as u64) as u32;
    while level > 1 && xp_for_level(level) > xp {
        level -= 1;
    }
    while level < MAX_LEVEL && xp_for_level(level + 1) <= xp {
        level += 1;
    }
    level
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
    pub location: String,
    pub traveling: bool,
    pub in_infirmary: bool,
    pub current_hp: u32,
    pub base_max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub gold: u64,
}

impl PlayerProfile {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: "Town Square".into(),
            traveling: false,
            in_infirmary: false,
            current_hp: 10,
            base_max_hp: 10,
            energy: 100,
            max_energy: 100,
            gold: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub level: u32,
    pub xp: u64,
}

impl SkillRecord {
    pub fn at_level(level: u32) -> Self {
        let level = level.clamp(1, MAX_LEVEL);
        Self {
            level,
            xp: xp_for_level(level),
        }
    }
}

impl Default for SkillRecord {
    fn default() -> Self {
        Self::at_level(SkillKind::STARTING_LEVEL)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySlot {
    pub quantity: u32,
    pub equipped: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub profile: PlayerProfile,
    pub skills: BTreeMap<SkillKind, SkillRecord>,
    pub inventory: BTreeMap<ItemId, InventorySlot>,
    /// Every session the player started, oldest first.
    pub sessions: Vec<EncounterSession>,
    pub logs: BTreeMap<SessionId, Vec<EncounterLogEntry>>,
    /// Every run the player entered, oldest first.
    pub runs: Vec<DungeonRun>,
    pub dungeon_loot: BTreeMap<KingdomId, BTreeMap<ItemId, u32>>,
}

impl PlayerRecord {
    pub fn new(profile: PlayerProfile) -> Self {
        Self {
            profile,
            skills: BTreeMap::new(),
            inventory: BTreeMap::new(),
            sessions: Vec::new(),
            logs: BTreeMap::new(),
            runs: Vec::new(),
            dungeon_loot: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.profile.id
    }

    pub fn with_skill(mut self, skill: SkillKind, level: u32) -> Self {
        self.skills.insert(skill, SkillRecord::at_level(level));
        self
    }

    pub fn with_item(mut self, item: ItemId, quantity: u32) -> Self {
        let slot = self.inventory.entry(item).or_insert(InventorySlot {
            quantity: 0,
            equipped: false,
        });
        slot.quantity += quantity;
        self
    }

    pub fn with_equipped(mut self, item: ItemId) -> Self {
        let slot = self.inventory.entry(item).or_insert(InventorySlot {
            quantity: 1,
            equipped: false,
        });
        slot.equipped = true;
        self
    }

    pub fn skill_level(&self, skill: SkillKind) -> u32 {
        self.skills
            .get(&skill)
            .map(|record| record.level)
            .unwrap_or(SkillKind::STARTING_LEVEL)
    }

    pub fn skill_levels(&self) -> SkillLevels {
        SkillLevels::new(
            self.skill_level(SkillKind::Attack),
            self.skill_level(SkillKind::Strength),
            self.skill_level(SkillKind::Defense),
            self.skill_level(SkillKind::HitPoints),
        )
    }

    pub fn skill_xp(&self, skill: SkillKind) -> u64 {
        self.skills.get(&skill).map(|record| record.xp).unwrap_or(0)
    }

    pub fn item_quantity(&self, item: ItemId) -> u32 {
        self.inventory
            .get(&item)
            .map(|slot| slot.quantity)
            .unwrap_or(0)
    }

    pub fn equipped_items(&self) -> Vec<ItemId> {
        self.inventory
            .iter()
            .filter(|(_, slot)| slot.equipped && slot.quantity > 0)
            .map(|(item, _)| *item)
            .collect()
    }

    pub fn active_session(&self) -> Option<&EncounterSession> {
        self.sessions
            .iter()
            .rev()
            .find(|session| session.is_active())
    }

    pub fn active_run(&self) -> Option<&DungeonRun> {
        self.runs.iter().rev().find(|run| run.is_active())
    }

    pub fn active_session_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.is_active()).count()
    }

    pub fn active_run_count(&self) -> usize {
        self.runs.iter().filter(|r| r.is_active()).count()
    }

    pub fn stored_loot(&self, kingdom: KingdomId) -> Vec<(ItemId, u32)> {
        self.dungeon_loot
            .get(&kingdom)
            .map(|items| items.iter().map(|(item, qty)| (*item, *qty)).collect())
            .unwrap_or_default()
    }

    /// Largest session or run id in the record.
    pub fn max_ids(&self) -> (u64, u64) {
        let session = self.sessions.iter().map(|s| s.id.get()).max().unwrap_or(0);
        let run = self.runs.iter().map(|r| r.id.get()).max().unwrap_or(0);
        (session, run)
    }
}
