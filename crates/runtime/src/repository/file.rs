//! File-based PlayerRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use combat_core::PlayerId;

use crate::repository::{PlayerRecord, PlayerRepository, RepositoryError, Result};

/// Stores each player as `player_{id}.bin` in bincode format.
///
/// Writes go to a temp file that is renamed over the old record, so a crash
/// mid-write leaves the previous committed record intact.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn record_path(&self, player: PlayerId) -> PathBuf {
        self.base_dir.join(format!("player_{}.bin", player.get()))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl PlayerRepository for FileStore {
    fn save(&self, record: &PlayerRecord) -> Result<()> {
        let path = self.record_path(record.id());
        let temp_path = path.with_extension("bin.tmp");

        let bytes = bincode::serialize(record)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} to {}", record.id(), path.display());

        Ok(())
    }

    fn load(&self, player: PlayerId) -> Result<Option<PlayerRecord>> {
        let path = self.record_path(player);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let record: PlayerRecord = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if record.id() != player {
            return Err(RepositoryError::CorruptedData(format!(
                "{} holds the record of {}",
                path.display(),
                record.id()
            )));
        }

        Ok(Some(record))
    }

    fn list_players(&self) -> Result<Vec<PlayerId>> {
        let mut players = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename
                    .strip_prefix("player_")
                    .and_then(|s| s.strip_suffix(".bin"))
                && let Ok(id) = id.parse::<u64>()
            {
                players.push(PlayerId(id));
            }
        }

        players.sort_unstable();
        Ok(players)
    }
}
