use chrono::{DateTime, Utc};

use crate::state::ItemId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LogActor {
    Player,
    Monster,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LogAction {
    Attack,
    Eat,
    Flee,
}

/// One half of an exchange. Append-only; never mutated once written.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterLogEntry {
    pub round: u32,
    pub actor: LogActor,
    pub action: LogAction,
    /// For flee entries: whether the attempt succeeded.
    pub hit: bool,
    pub damage: u32,
    pub player_hp: u32,
    pub monster_hp: u32,
    pub item: Option<ItemId>,
    pub hp_restored: Option<u32>,
    pub at: DateTime<Utc>,
}
