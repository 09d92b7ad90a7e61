//! Event payloads published after a committed action.

use combat_core::{
    DungeonId, EncounterStatus, MonsterId, PlayerId, RunId, RunStatus, SessionId,
};
use serde::{Deserialize, Serialize};

/// Interactive encounter lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterEvent {
    EncounterStarted {
        player: PlayerId,
        session: SessionId,
        monster: MonsterId,
    },
    EncounterEnded {
        player: PlayerId,
        session: SessionId,
        status: EncounterStatus,
    },
}

/// Dungeon run lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DungeonEvent {
    RunStarted {
        player: PlayerId,
        run: RunId,
        dungeon: DungeonId,
    },
    FloorCleared {
        player: PlayerId,
        run: RunId,
        floor: u32,
    },
    FloorAdvanced {
        player: PlayerId,
        run: RunId,
        floor: u32,
    },
    RunEnded {
        player: PlayerId,
        run: RunId,
        status: RunStatus,
    },
}
