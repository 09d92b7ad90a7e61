//! Error types raised by repository implementations.

use combat_core::{ErrorSeverity, GameError, PlayerId};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("player repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("player {player} already has an active {kind}")]
    DuplicateActive {
        player: PlayerId,
        kind: &'static str,
    },
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) => ErrorSeverity::Recoverable,
            Self::LockPoisoned | Self::Serialization(_) => ErrorSeverity::Internal,
            Self::CorruptedData(_) | Self::DuplicateActive { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPO_LOCK_POISONED",
            Self::Io(_) => "REPO_IO",
            Self::Serialization(_) => "REPO_SERIALIZATION",
            Self::CorruptedData(_) => "REPO_CORRUPTED_DATA",
            Self::DuplicateActive { .. } => "REPO_DUPLICATE_ACTIVE",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
