//! Oracle access errors.
//!
//! Errors related to oracle availability and content lookups.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{DungeonId, ItemId, MonsterId};
use crate::style::WeaponSubtype;

/// Errors that occur when accessing oracle data.
///
/// Missing oracles are fatal wiring mistakes. Unknown ids are validation
/// errors when they come from caller input; the runtime upgrades them to
/// [`OracleError::DanglingReference`] when stored state or other content
/// points at something that no longer exists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("MonsterOracle not available")]
    MonstersNotAvailable,

    #[error("DungeonOracle not available")]
    DungeonsNotAvailable,

    #[error("StyleOracle not available")]
    StylesNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("item definition {0} not found")]
    ItemNotFound(ItemId),

    #[error("monster template {0} not found")]
    MonsterNotFound(MonsterId),

    #[error("dungeon template {0} not found")]
    DungeonNotFound(DungeonId),

    #[error("no attack style #{index} for weapon subtype {subtype}")]
    StyleNotFound {
        subtype: WeaponSubtype,
        index: usize,
    },

    #[error("dungeon {dungeon} has no floor {floor}")]
    FloorNotFound { dungeon: DungeonId, floor: u32 },

    #[error("content reference is dangling: {0}")]
    DanglingReference(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ItemsNotAvailable | MonstersNotAvailable | DungeonsNotAvailable
            | StylesNotAvailable | RngNotAvailable | DanglingReference(_) => ErrorSeverity::Fatal,

            ItemNotFound(_)
            | MonsterNotFound(_)
            | DungeonNotFound(_)
            | StyleNotFound { .. }
            | FloorNotFound { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            MonstersNotAvailable => "ORACLE_MONSTERS_NOT_AVAILABLE",
            DungeonsNotAvailable => "ORACLE_DUNGEONS_NOT_AVAILABLE",
            StylesNotAvailable => "ORACLE_STYLES_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            MonsterNotFound(_) => "ORACLE_MONSTER_NOT_FOUND",
            DungeonNotFound(_) => "ORACLE_DUNGEON_NOT_FOUND",
            StyleNotFound { .. } => "ORACLE_STYLE_NOT_FOUND",
            FloorNotFound { .. } => "ORACLE_FLOOR_NOT_FOUND",
            DanglingReference(_) => "ORACLE_DANGLING_REFERENCE",
        }
    }
}
