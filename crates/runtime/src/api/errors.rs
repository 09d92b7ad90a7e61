//! Unified error types surfaced by the runtime API.
//!
//! Precondition failures are [`Rejection`]s: expected, human-readable, and
//! raised before anything is staged. Everything else is a fault the caller
//! cannot fix by retrying with different input.

use combat_core::{
    DungeonId, ErrorSeverity, GameError, ItemId, MonsterId, OracleError, PlayerId, WeaponSubtype,
};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("combat engine requires {0} to be configured before building")]
    MissingComponent(&'static str),
}

impl RuntimeError {
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }

    /// The rejection, if this is a precondition failure.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Rejected(rejection) => rejection.severity(),
            Self::Repository(err) => err.severity(),
            Self::Oracle(err) => err.severity(),
            Self::Invariant(_) => ErrorSeverity::Fatal,
            Self::MissingComponent(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected(rejection) => rejection.error_code(),
            Self::Repository(err) => err.error_code(),
            Self::Oracle(err) => err.error_code(),
            Self::Invariant(_) => "RUNTIME_INVARIANT",
            Self::MissingComponent(_) => "RUNTIME_MISSING_COMPONENT",
        }
    }
}

/// Why an action was refused. Nothing was mutated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("you cannot fight while travelling")]
    Traveling,

    #[error("you are recovering in the infirmary")]
    InInfirmary,

    #[error("you are dead")]
    PlayerDead,

    #[error("not enough energy: {required} required, {available} available")]
    NotEnoughEnergy { required: u32, available: u32 },

    #[error("combat level {actual} is below the required {required}")]
    LevelTooLow { required: u32, actual: u32 },

    #[error("you are already in combat")]
    EncounterInProgress,

    #[error("you are already in a dungeon")]
    DungeonInProgress,

    #[error("you are not in combat")]
    NoActiveEncounter,

    #[error("you are not in a dungeon")]
    NoActiveRun,

    #[error("unknown monster {0}")]
    UnknownMonster(MonsterId),

    #[error("unknown dungeon {0}")]
    UnknownDungeon(DungeonId),

    #[error("unknown item {0}")]
    UnknownItem(ItemId),

    #[error("{subtype} has no attack style #{index}")]
    UnknownStyle {
        subtype: WeaponSubtype,
        index: usize,
    },

    #[error("you do not have {0}")]
    ItemNotOwned(ItemId),

    #[error("{0} cannot be eaten")]
    NotFood(ItemId),

    #[error("you are already at full health")]
    AlreadyFullHealth,

    #[error("the current floor is not cleared yet")]
    FloorNotCleared,

    #[error("the current floor is already cleared")]
    FloorAlreadyCleared,

    #[error("this is the final floor")]
    FinalFloor,
}

impl GameError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use Rejection::*;
        match self {
            UnknownPlayer(_) => "REJECT_UNKNOWN_PLAYER",
            Traveling => "REJECT_TRAVELING",
            InInfirmary => "REJECT_IN_INFIRMARY",
            PlayerDead => "REJECT_PLAYER_DEAD",
            NotEnoughEnergy { .. } => "REJECT_NOT_ENOUGH_ENERGY",
            LevelTooLow { .. } => "REJECT_LEVEL_TOO_LOW",
            EncounterInProgress => "REJECT_ENCOUNTER_IN_PROGRESS",
            DungeonInProgress => "REJECT_DUNGEON_IN_PROGRESS",
            NoActiveEncounter => "REJECT_NO_ACTIVE_ENCOUNTER",
            NoActiveRun => "REJECT_NO_ACTIVE_RUN",
            UnknownMonster(_) => "REJECT_UNKNOWN_MONSTER",
            UnknownDungeon(_) => "REJECT_UNKNOWN_DUNGEON",
            UnknownItem(_) => "REJECT_UNKNOWN_ITEM",
            UnknownStyle { .. } => "REJECT_UNKNOWN_STYLE",
            ItemNotOwned(_) => "REJECT_ITEM_NOT_OWNED",
            NotFood(_) => "REJECT_NOT_FOOD",
            AlreadyFullHealth => "REJECT_ALREADY_FULL_HEALTH",
            FloorNotCleared => "REJECT_FLOOR_NOT_CLEARED",
            FloorAlreadyCleared => "REJECT_FLOOR_ALREADY_CLEARED",
            FinalFloor => "REJECT_FINAL_FLOOR",
        }
    }
}
