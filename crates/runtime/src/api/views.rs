//! Result payloads returned by the combat services.
//!
//! Everything here is `Serialize` so a transport layer can emit it as JSON.

use combat_core::{
    DungeonId, EncounterLogEntry, EncounterStatus, FightOutcome, ItemId, KingdomId, LootDrop,
    MonsterId, RunId, RunStatus, SessionId, SkillKind, StyleProfile,
};
use serde::Serialize;

/// Current state of an encounter session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionView {
    pub session: SessionId,
    pub monster: MonsterId,
    pub monster_name: String,
    pub status: EncounterStatus,
    pub round: u32,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub monster_hp: u32,
    pub monster_max_hp: u32,
    pub training_style: SkillKind,
    pub style: StyleProfile,
}

/// XP credited to one skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillGain {
    pub skill: SkillKind,
    pub xp: u64,
    pub levels_gained: u32,
    pub new_level: u32,
}

/// Rewards of an interactive victory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VictoryRewards {
    pub xp: SkillGain,
    pub gold: u32,
    pub items: Vec<LootDrop>,
}

/// Outcome of one `attack`, `eat` or `flee`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExchangeReport {
    pub status: EncounterStatus,
    pub session: SessionView,
    /// Entries appended by this action, in order.
    pub logs: Vec<EncounterLogEntry>,
    pub rewards: Option<VictoryRewards>,
    pub message: String,
}

/// Current state of a dungeon run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunView {
    pub run: RunId,
    pub dungeon: DungeonId,
    pub dungeon_name: String,
    pub kingdom: KingdomId,
    pub status: RunStatus,
    pub current_floor: u32,
    pub floor_count: u32,
    pub monsters_defeated: u32,
    pub total_monsters_on_floor: u32,
    pub floor_cleared: bool,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub xp_accumulated: u64,
    pub gold_accumulated: u64,
    pub loot_accumulated: Vec<LootDrop>,
    pub training_style: SkillKind,
    pub attack_style_index: usize,
}

/// Pending rewards banked by one won fight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FightRewards {
    pub xp: u64,
    pub gold: u32,
    pub loot: Vec<LootDrop>,
}

/// Rewards committed when the final floor is cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionRewards {
    pub bonus_xp: u64,
    pub bonus_gold: u32,
    pub xp: Vec<SkillGain>,
    pub gold: u64,
    pub kingdom: KingdomId,
    pub loot: Vec<LootDrop>,
}

/// Pending rewards discarded by death or abandonment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Forfeiture {
    pub xp: u64,
    pub gold: u64,
    pub loot: Vec<LootDrop>,
}

/// Outcome of one `fight_monster`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FightReport {
    pub status: RunStatus,
    pub monster: Option<MonsterId>,
    pub monster_name: Option<String>,
    /// `None` when the player was already at 0 HP and no fight took place.
    pub outcome: Option<FightOutcome>,
    pub rewards: Option<FightRewards>,
    pub floor_cleared: bool,
    pub completion: Option<CompletionRewards>,
    pub forfeiture: Option<Forfeiture>,
    pub run: RunView,
    pub message: String,
}

/// Outcome of `abandon`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunEndReport {
    pub status: RunStatus,
    pub forfeiture: Forfeiture,
    pub run: RunView,
    pub message: String,
}

/// Outcome of eating outside the exchange loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EatReport {
    pub item: ItemId,
    pub hp_restored: u32,
    pub player_hp: u32,
    pub player_max_hp: u32,
}
